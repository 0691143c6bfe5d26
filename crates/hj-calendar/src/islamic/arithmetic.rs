//! Closed-form arithmetic for the tabular Islamic calendar.
//!
//! The tabular calendar alternates 30- and 29-day months and adds a 30th day
//! to the twelfth month in 11 leap years of every 30-year cycle
//! (years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29).  The conversion
//! formulas are parameterized by the epoch, so the civil (Friday) and
//! astronomical (Thursday) reckonings share them.
//!
//! Divisions are done in `f64` and rounded with `ceil` / `floor` exactly as
//! written; swapping rounding direction shifts boundary dates by a day.

use hj_core::{JulianDay, Year};

/// Civil epoch: Friday, July 16, 622 CE (Julian calendar).
pub const CIVIL_EPOCH: JulianDay = 1_948_440;

/// Astronomical epoch: Thursday, July 15, 622 CE (Julian calendar).
pub const ASTRONOMICAL_EPOCH: JulianDay = 1_948_439;

/// Number of months in every Islamic year.
pub const MONTHS_IN_YEAR: u8 = 12;

/// Return `true` if `year` carries a 30th day in its twelfth month.
///
/// The remainder is Euclidean, so years before 1 follow the same 30-year
/// cycle as the encoding formula.
pub fn is_leap_year(year: Year) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Convert an Islamic date to a Julian Day Number for the given epoch.
///
/// `month` and `day` are not validated.
pub fn islamic_to_julian_day(epoch: JulianDay, year: Year, month: u8, day: u8) -> JulianDay {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);
    day + (29.5 * (month - 1) as f64).ceil() as i64
        + (year - 1) * 354
        + ((3 + 11 * year) as f64 / 30.0).floor() as i64
        + epoch
        - 1
}

/// Convert a Julian Day Number to an Islamic `(year, month, day)` for the
/// given epoch.
///
/// The year estimate is the exact inverse of [`islamic_to_julian_day`], so no
/// search is needed.
pub fn julian_day_to_islamic(epoch: JulianDay, jd: JulianDay) -> (Year, u8, u8) {
    let year = ((30 * (jd - epoch) + 10646) as f64 / 10631.0).floor() as Year;
    let year_start = islamic_to_julian_day(epoch, year, 1, 1);
    let month = (((jd - (29 + year_start)) as f64 / 29.5).ceil() as i64 + 1)
        .min(i64::from(MONTHS_IN_YEAR)) as u8;
    let day = jd - islamic_to_julian_day(epoch, year, month, 1) + 1;
    (year, month, day as u8)
}

/// Length of `month` in `year`: odd months have 30 days, even months 29, and
/// the twelfth month of a leap year 30.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    let mut length = 29 + month % 2;
    if month == MONTHS_IN_YEAR && is_leap_year(year) {
        length += 1;
    }
    length
}

/// 355 for leap years, otherwise 354.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        355
    } else {
        354
    }
}
