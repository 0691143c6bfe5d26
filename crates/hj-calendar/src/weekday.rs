//! `Weekday` — day of the week.

use hj_core::JulianDay;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), following ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Weekday of a Julian Day Number.  JDN 0 is a Monday.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        match jd.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_julian_days() {
        // JDN 0 is a Monday, so day `n` has ordinal `n % 7 + 1`.
        for jd in 0..14i64 {
            assert_eq!(i64::from(Weekday::from_julian_day(jd).ordinal()), jd % 7 + 1);
        }
    }

    #[test]
    fn known_julian_days() {
        assert_eq!(Weekday::from_julian_day(0), Weekday::Monday);
        // 2000-01-01
        assert_eq!(Weekday::from_julian_day(2_451_545), Weekday::Saturday);
        // Civil epoch, July 16, 622 (Julian)
        assert_eq!(Weekday::from_julian_day(1_948_440), Weekday::Friday);
        assert_eq!(Weekday::from_julian_day(-1), Weekday::Sunday);
    }
}
