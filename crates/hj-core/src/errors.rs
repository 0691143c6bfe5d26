//! Error types for hijri-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Checks that bail out
//! with a specific variant use the [`ensure!`](crate::ensure) macro.
//!
//! Conversions between dates and Julian Day Numbers are infallible: callers
//! validate dates before converting.  Errors only arise from checked
//! constructors, identifier parsing, and decoding the embedded Umm al-Qura
//! table.

use thiserror::Error;

/// The top-level error type used throughout hijri-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (year, month, day) triple that does not name a day of the calendar.
    #[error("invalid date {year}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
        /// Which bound was violated.
        reason: String,
    },

    /// A calendar identifier string that names no known calendar.
    #[error("unknown calendar identifier: {0:?}")]
    UnknownCalendar(String),

    /// The packed lookup-table asset could not be decoded.
    #[error("corrupt calendar table: {0}")]
    CorruptTable(String),
}

/// Shorthand `Result` type used throughout hijri-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` if `$cond` is false.
///
/// The error expression is only evaluated when the check fails.
///
/// # Example
/// ```
/// use hj_core::{ensure, errors::Error};
/// fn span(first: i32, last: i32) -> hj_core::errors::Result<i32> {
///     ensure!(
///         first <= last,
///         Error::CorruptTable(format!("empty year span [{first}, {last}]"))
///     );
///     Ok(last - first + 1)
/// }
/// assert_eq!(span(1300, 1600), Ok(301));
/// assert!(span(1600, 1300).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
