//! # hj-calendar
//!
//! The `Calendar` trait, calendar-tagged dates, and the Islamic calendar
//! family (civil, tabular and Umm al-Qura variants).
//!
//! ```
//! use hj_calendar::{Calendar, IslamicCalendar};
//!
//! let umalqura = IslamicCalendar::umalqura().unwrap();
//! let ramadan = umalqura.date(1445, 9, 1).unwrap();
//! assert_eq!(umalqura.to_julian_day(&ramadan), 2_460_381);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and identifiers.
pub mod calendar;

/// `CalendarDate` type.
pub mod date;

/// Islamic calendar variants and their building blocks.
pub mod islamic;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{convert, Calendar, CalendarIdentifier};
pub use date::CalendarDate;
pub use islamic::{IslamicCalendar, UmalquraTable};
pub use weekday::Weekday;
