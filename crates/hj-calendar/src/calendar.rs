//! `Calendar` trait and calendar identifiers.
//!
//! A calendar converts between its own `(year, month, day)` dates and Julian
//! Day Numbers and answers structural questions (month, year and era
//! lengths).  Julian Day Numbers are the interchange value between
//! calendars; see [`convert`].

use std::fmt;
use std::str::FromStr;

use hj_core::errors::{Error, Result};
use hj_core::{ensure, JulianDay, Year};

use crate::date::CalendarDate;
use crate::weekday::Weekday;

/// Stable identifier of a calendar system.
///
/// The string forms follow the CLDR / BCP 47 calendar keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum CalendarIdentifier {
    /// Tabular Islamic calendar, Friday (civil) epoch: `"islamic-civil"`.
    IslamicCivil,
    /// Tabular Islamic calendar, Thursday (astronomical) epoch: `"islamic-tbla"`.
    IslamicTabular,
    /// Umm al-Qura calendar of Saudi Arabia: `"islamic-umalqura"`.
    IslamicUmalqura,
}

impl CalendarIdentifier {
    /// All known identifiers.
    pub const ALL: [CalendarIdentifier; 3] = [
        CalendarIdentifier::IslamicCivil,
        CalendarIdentifier::IslamicTabular,
        CalendarIdentifier::IslamicUmalqura,
    ];

    /// Return the identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarIdentifier::IslamicCivil => "islamic-civil",
            CalendarIdentifier::IslamicTabular => "islamic-tbla",
            CalendarIdentifier::IslamicUmalqura => "islamic-umalqura",
        }
    }
}

impl fmt::Display for CalendarIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CalendarIdentifier::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownCalendar(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarIdentifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar system.
///
/// Conversion methods do not validate their input: `to_julian_day` on a
/// date whose month or day is out of range returns an unspecified value.
/// Use [`Calendar::date`] to build checked dates.
pub trait Calendar: fmt::Debug + Send + Sync {
    /// Stable identifier used for selection and serialization.
    fn identifier(&self) -> CalendarIdentifier;

    /// Convert a Julian Day Number to a date in this calendar.
    fn from_julian_day(&self, jd: JulianDay) -> CalendarDate;

    /// Convert a date to a Julian Day Number.
    ///
    /// Only the year, month and day of `date` are read.
    fn to_julian_day(&self, date: &CalendarDate) -> JulianDay;

    /// Number of days in the month containing `date`.
    fn days_in_month(&self, date: &CalendarDate) -> u8;

    /// Number of months in a year.
    fn months_in_year(&self) -> u8;

    /// Number of days in the year containing `date`.
    fn days_in_year(&self, date: &CalendarDate) -> u16;

    /// Number of years in an era.
    fn years_in_era(&self) -> Year;

    /// Era names, in order.
    fn eras(&self) -> &'static [&'static str];

    /// Build a date in this calendar, checking month and day bounds.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `month` is outside
    /// `1..=months_in_year()` or `day` is outside `1..=days_in_month`.
    fn date(&self, year: Year, month: u8, day: u8) -> Result<CalendarDate> {
        let months = self.months_in_year();
        ensure!(
            (1..=months).contains(&month),
            Error::InvalidDate {
                year,
                month,
                day,
                reason: format!("month out of range [1, {months}]"),
            }
        );
        let candidate = CalendarDate::new_unchecked(self.identifier(), year, month, day);
        let days = self.days_in_month(&candidate);
        ensure!(
            (1..=days).contains(&day),
            Error::InvalidDate {
                year,
                month,
                day,
                reason: format!("day out of range [1, {days}]"),
            }
        );
        Ok(candidate)
    }

    /// Return `true` if `(year, month, day)` names a day of this calendar.
    fn is_valid(&self, year: Year, month: u8, day: u8) -> bool {
        self.date(year, month, day).is_ok()
    }

    /// Day of the week of `date`.
    fn weekday(&self, date: &CalendarDate) -> Weekday {
        Weekday::from_julian_day(self.to_julian_day(date))
    }
}

/// Re-express `date`, read in calendar `from`, as a date of calendar `to`.
pub fn convert(date: &CalendarDate, from: &dyn Calendar, to: &dyn Calendar) -> CalendarDate {
    to.from_julian_day(from.to_julian_day(date))
}
