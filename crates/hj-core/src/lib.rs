//! # hj-core
//!
//! Core types, error definitions, and settings for hijri-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: primitive type aliases, the error enum with its `ensure!`
//! macro, and the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A Julian Day Number: a calendar-independent count of days.
///
/// JDN 0 is Monday, January 1, 4713 BCE in the proleptic Julian calendar.
pub type JulianDay = i64;

/// A year number within a calendar's single era.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedYearSearch, Settings, YearSearch};
