//! The Islamic (Hijri) calendar family.
//!
//! Three variants share one [`Calendar`] implementation:
//!
//! * **Civil** (`"islamic-civil"`) — tabular arithmetic, Friday epoch.
//! * **Tabular** (`"islamic-tbla"`) — tabular arithmetic, Thursday epoch.
//! * **Umalqura** (`"islamic-umalqura"`) — Umm al-Qura month lengths for
//!   years 1300–1600 from a lookup table, civil arithmetic outside.
//!
//! Month and year lengths of the tabular rules do not depend on the epoch,
//! so the variants only differ in the epoch and, for Umalqura, the table.

/// Closed-form conversion formulas and leap-year rule.
pub mod arithmetic;

/// Umm al-Qura lookup table store.
pub mod umalqura;

/// Embedded Umm al-Qura asset.
pub mod umalqura_data;

use hj_core::errors::Result;
use hj_core::settings::Settings;
use hj_core::{JulianDay, Year};
use tracing::trace;

use crate::calendar::{Calendar, CalendarIdentifier};
use crate::date::CalendarDate;

pub use arithmetic::{is_leap_year, ASTRONOMICAL_EPOCH, CIVIL_EPOCH, MONTHS_IN_YEAR};
pub use umalqura::{PackedTable, UmalquraTable};

/// Years per era: the era ends near Gregorian year 9999.
pub const YEARS_IN_ERA: Year = 9665;

/// The single era, Anno Hegirae.
pub const ERAS: &[&str] = &["AH"];

/// An Islamic calendar variant.
///
/// Construction is cheap and repeatable: `Umalqura` borrows the
/// process-wide table decoded by [`UmalquraTable::shared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IslamicCalendar {
    /// Tabular arithmetic with the civil (Friday) epoch.
    Civil,
    /// Tabular arithmetic with the astronomical (Thursday) epoch.
    Tabular,
    /// Umm al-Qura table, civil arithmetic outside the table's years.
    Umalqura(&'static UmalquraTable),
}

impl IslamicCalendar {
    /// The civil variant.
    pub const fn civil() -> Self {
        IslamicCalendar::Civil
    }

    /// The tabular (astronomical epoch) variant.
    pub const fn tabular() -> Self {
        IslamicCalendar::Tabular
    }

    /// The Umm al-Qura variant.
    ///
    /// The first call decodes the embedded table.
    ///
    /// # Errors
    /// Returns [`Error::CorruptTable`](hj_core::Error::CorruptTable) if the
    /// embedded table cannot be decoded.
    pub fn umalqura() -> Result<Self> {
        UmalquraTable::shared().map(IslamicCalendar::Umalqura)
    }

    /// Build the variant named by `id`.
    ///
    /// # Errors
    /// Propagates the error of [`IslamicCalendar::umalqura`].
    pub fn from_identifier(id: CalendarIdentifier) -> Result<Self> {
        match id {
            CalendarIdentifier::IslamicCivil => Ok(Self::civil()),
            CalendarIdentifier::IslamicTabular => Ok(Self::tabular()),
            CalendarIdentifier::IslamicUmalqura => Self::umalqura(),
        }
    }

    /// Epoch used by the arithmetic formulas of this variant.
    pub fn epoch(&self) -> JulianDay {
        match self {
            IslamicCalendar::Tabular => ASTRONOMICAL_EPOCH,
            IslamicCalendar::Civil | IslamicCalendar::Umalqura(_) => CIVIL_EPOCH,
        }
    }

    /// The lookup table, if `year` is covered by it.
    fn table_for(&self, year: Year) -> Option<&'static UmalquraTable> {
        match *self {
            IslamicCalendar::Umalqura(table) if table.contains_year(year) => Some(table),
            IslamicCalendar::Umalqura(_) => {
                trace!(year, "year outside Umm al-Qura table, using civil arithmetic");
                None
            }
            IslamicCalendar::Civil | IslamicCalendar::Tabular => None,
        }
    }

    fn make(&self, (year, month, day): (Year, u8, u8)) -> CalendarDate {
        CalendarDate::new_unchecked(self.identifier(), year, month, day)
    }
}

impl Calendar for IslamicCalendar {
    fn identifier(&self) -> CalendarIdentifier {
        match self {
            IslamicCalendar::Civil => CalendarIdentifier::IslamicCivil,
            IslamicCalendar::Tabular => CalendarIdentifier::IslamicTabular,
            IslamicCalendar::Umalqura(_) => CalendarIdentifier::IslamicUmalqura,
        }
    }

    fn from_julian_day(&self, jd: JulianDay) -> CalendarDate {
        if let IslamicCalendar::Umalqura(table) = self {
            let search = Settings::instance().year_search();
            if let Some(ymd) = table.date_from_days(jd - CIVIL_EPOCH, search) {
                return self.make(ymd);
            }
            trace!(jd, "day outside Umm al-Qura table, using civil arithmetic");
        }
        self.make(arithmetic::julian_day_to_islamic(self.epoch(), jd))
    }

    fn to_julian_day(&self, date: &CalendarDate) -> JulianDay {
        match self.table_for(date.year()) {
            Some(table) => {
                CIVIL_EPOCH
                    + table.month_start(date.year(), date.month())
                    + i64::from(date.day())
                    - 1
            }
            None => arithmetic::islamic_to_julian_day(
                self.epoch(),
                date.year(),
                date.month(),
                date.day(),
            ),
        }
    }

    fn days_in_month(&self, date: &CalendarDate) -> u8 {
        match self.table_for(date.year()) {
            Some(table) => table.month_length(date.year(), date.month()),
            None => arithmetic::days_in_month(date.year(), date.month()),
        }
    }

    fn months_in_year(&self) -> u8 {
        MONTHS_IN_YEAR
    }

    fn days_in_year(&self, date: &CalendarDate) -> u16 {
        match self.table_for(date.year()) {
            Some(table) => table.year_length(date.year()),
            None => arithmetic::days_in_year(date.year()),
        }
    }

    fn years_in_era(&self) -> Year {
        YEARS_IN_ERA
    }

    fn eras(&self) -> &'static [&'static str] {
        ERAS
    }
}
