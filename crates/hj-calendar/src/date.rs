//! `CalendarDate` — a `(year, month, day)` triple tagged with its calendar.

use std::fmt;

use hj_core::Year;

use crate::calendar::CalendarIdentifier;

/// An immutable date in a specific calendar.
///
/// A date does not own its calendar; it records the calendar's
/// [`CalendarIdentifier`].  Use [`Calendar::date`](crate::Calendar::date) for
/// a checked constructor.
///
/// The derived ordering compares `(year, month, day)` and is only meaningful
/// between dates of the same calendar; compare Julian Day Numbers otherwise.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: Year,
    month: u8,
    day: u8,
    calendar: CalendarIdentifier,
}

impl CalendarDate {
    /// Create a date without checking that it exists in `calendar`.
    pub const fn new_unchecked(calendar: CalendarIdentifier, year: Year, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Year within the calendar's era.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Month (1-based).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month (1-based).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Identifier of the calendar this date belongs to.
    pub fn calendar(&self) -> CalendarIdentifier {
        self.calendar
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({})",
            self.year, self.month, self.day, self.calendar
        )
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CalendarDate({:04}-{:02}-{:02}, {})",
            self.year, self.month, self.day, self.calendar
        )
    }
}
