//! # hijri
//!
//! Conversions between Islamic (Hijri) calendar dates and Julian Day
//! Numbers.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `hj-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hijri = "0.1"
//! ```
//!
//! ```rust
//! use hijri::calendar::{convert, Calendar, IslamicCalendar};
//!
//! let civil = IslamicCalendar::civil();
//! let umalqura = IslamicCalendar::umalqura().unwrap();
//!
//! let date = civil.date(1445, 9, 1).unwrap();
//! let same_day = convert(&date, &civil, &umalqura);
//! assert_eq!((same_day.year(), same_day.month(), same_day.day()), (1445, 9, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use hj_core as core;

/// Calendar trait, dates, and the Islamic calendar family.
pub use hj_calendar as calendar;

pub use hj_calendar::{Calendar, CalendarDate, CalendarIdentifier, IslamicCalendar};
pub use hj_core::{Error, JulianDay, Result};
