//! Global library settings.
//!
//! [`Settings`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.  It currently holds the strategy used to locate
//! the year containing a Julian Day inside the Umm al-Qura table.
//!
//! Thread safety: the strategy is stored in an atomic, so it can be read on
//! every conversion without locking and changed from any thread.  Tests that
//! change a setting should use the scoped guard so the previous value is
//! restored when the guard drops.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// How a table-driven calendar finds the year containing a day offset.
///
/// Both strategies return identical results for every day in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum YearSearch {
    /// Walk forward one year at a time from the first covered year.
    #[default]
    Linear = 0,
    /// Binary search over the cumulative year-start table.
    Binary = 1,
}

impl YearSearch {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => YearSearch::Binary,
            _ => YearSearch::Linear,
        }
    }
}

/// Process-wide settings used by the hijri-rs library.
pub struct Settings {
    year_search: AtomicU8,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            year_search: AtomicU8::new(YearSearch::default() as u8),
        })
    }

    /// Return the current year-search strategy.
    pub fn year_search(&self) -> YearSearch {
        YearSearch::from_u8(self.year_search.load(Ordering::Relaxed))
    }

    /// Set the year-search strategy, returning the previous one.
    pub fn set_year_search(&self, strategy: YearSearch) -> YearSearch {
        YearSearch::from_u8(self.year_search.swap(strategy as u8, Ordering::Relaxed))
    }
}

/// Sets a year-search strategy for the lifetime of the guard.
///
/// The previous strategy is restored on drop.  Guards are exclusive across
/// threads: a second guard blocks until the first is dropped, so nesting two
/// guards on one thread deadlocks.
///
/// # Example
/// ```
/// use hj_core::settings::{ScopedYearSearch, Settings, YearSearch};
///
/// {
///     let _guard = ScopedYearSearch::new(YearSearch::Binary);
///     assert_eq!(Settings::instance().year_search(), YearSearch::Binary);
/// }
/// ```
#[must_use = "the previous strategy is restored as soon as the guard is dropped"]
pub struct ScopedYearSearch {
    previous: YearSearch,
    _exclusive: MutexGuard<'static, ()>,
}

static SCOPE: Mutex<()> = Mutex::new(());

impl ScopedYearSearch {
    /// Install `strategy` until the returned guard is dropped.
    pub fn new(strategy: YearSearch) -> Self {
        let exclusive = SCOPE.lock().unwrap_or_else(PoisonError::into_inner);
        Self {
            previous: Settings::instance().set_year_search(strategy),
            _exclusive: exclusive,
        }
    }
}

impl Drop for ScopedYearSearch {
    fn drop(&mut self) {
        Settings::instance().set_year_search(self.previous);
    }
}
