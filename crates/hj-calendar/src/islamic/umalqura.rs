//! Umm al-Qura lookup table store.
//!
//! Month lengths of the Umm al-Qura calendar follow predicted crescent
//! sightings and cannot be derived from a formula.  They ship as a packed
//! asset ([`PackedTable`]) that is decoded into an [`UmalquraTable`]: one
//! month-length bitmask per year plus a cumulative year-start table.
//!
//! The decoded table for the embedded asset is built at most once per process
//! by [`UmalquraTable::shared`] and is read-only afterwards.
//!
//! Day offsets handled here are relative to the civil epoch
//! ([`CIVIL_EPOCH`](super::CIVIL_EPOCH)), not Julian Day Numbers.

use std::sync::OnceLock;

use base64::prelude::BASE64_STANDARD;
use base64::Engine as _;
use hj_core::errors::{Error, Result};
use hj_core::settings::YearSearch;
use hj_core::{ensure, Year};
use tracing::{debug, error};

use super::umalqura_data::UMALQURA_DATA;

/// Bits 15..12 of a year word carry no month and must be clear.
const RESERVED_BITS: u16 = 0xF000;

/// A packed month-length asset before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedTable<'a> {
    /// First covered year.
    pub first_year: Year,
    /// Last covered year (inclusive).
    pub last_year: Year,
    /// Day offset of 1 Muharram of `first_year`.
    pub start_days: i64,
    /// Base64 of one little-endian `u16` word per covered year.
    pub payload: &'a str,
}

impl PackedTable<'_> {
    /// Number of years covered by the asset.
    pub fn year_count(&self) -> usize {
        usize::try_from(self.last_year - self.first_year + 1).unwrap_or(0)
    }
}

/// Decoded month-length and year-start tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmalquraTable {
    first_year: Year,
    start_days: i64,
    /// One word per year; bit `11 - (month - 1)` set ⇒ 30-day month.
    month_lengths: Box<[u16]>,
    /// `year_starts[i]` is the offset of year `first_year + i` from
    /// `start_days`.  The extra trailing entry marks the end of the last year.
    year_starts: Box<[u32]>,
}

static SHARED: OnceLock<Result<UmalquraTable>> = OnceLock::new();

impl UmalquraTable {
    /// Return the process-wide table decoded from the embedded asset.
    ///
    /// The asset is decoded on first call only; concurrent first callers block
    /// until that single decode has been published.
    ///
    /// # Errors
    /// Returns [`Error::CorruptTable`] if the embedded asset does not decode.
    /// The failure is cached: every later call returns the same error.
    pub fn shared() -> Result<&'static UmalquraTable> {
        SHARED
            .get_or_init(|| {
                let table = UmalquraTable::decode(&UMALQURA_DATA);
                match &table {
                    Ok(t) => debug!(
                        first_year = t.first_year(),
                        last_year = t.last_year(),
                        total_days = t.total_days(),
                        "decoded Umm al-Qura table"
                    ),
                    Err(e) => error!(error = %e, "embedded Umm al-Qura table is corrupt"),
                }
                table
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Decode a packed asset and build its cumulative year-start table.
    ///
    /// # Errors
    /// Returns [`Error::CorruptTable`] if the payload is not valid base64, its
    /// length does not match the covered year span, or a word has reserved
    /// bits set.
    pub fn decode(packed: &PackedTable<'_>) -> Result<Self> {
        ensure!(
            packed.first_year <= packed.last_year,
            Error::CorruptTable(format!(
                "empty year span [{}, {}]",
                packed.first_year, packed.last_year
            ))
        );
        let bytes = BASE64_STANDARD
            .decode(packed.payload)
            .map_err(|e| Error::CorruptTable(format!("payload is not base64: {e}")))?;

        let years = packed.year_count();
        ensure!(
            bytes.len() == years * 2,
            Error::CorruptTable(format!(
                "expected {} bytes for years {}..={}, found {}",
                years * 2,
                packed.first_year,
                packed.last_year,
                bytes.len()
            ))
        );

        let month_lengths: Box<[u16]> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        if let Some(i) = month_lengths.iter().position(|w| w & RESERVED_BITS != 0) {
            return Err(Error::CorruptTable(format!(
                "reserved bits set in word {:#06x} for year {}",
                month_lengths[i],
                packed.first_year + i as Year
            )));
        }

        let mut year_starts = Vec::with_capacity(years + 1);
        let mut year_start = 0u32;
        year_starts.push(year_start);
        for &word in month_lengths.iter() {
            year_start += year_length_of(word);
            year_starts.push(year_start);
        }

        Ok(Self {
            first_year: packed.first_year,
            start_days: packed.start_days,
            month_lengths,
            year_starts: year_starts.into_boxed_slice(),
        })
    }

    // ── Coverage ─────────────────────────────────────────────────────────────

    /// First covered year.
    pub fn first_year(&self) -> Year {
        self.first_year
    }

    /// Last covered year (inclusive).
    pub fn last_year(&self) -> Year {
        self.first_year + self.month_lengths.len() as Year - 1
    }

    /// Return `true` if `year` lies within the table.
    pub fn contains_year(&self, year: Year) -> bool {
        (self.first_year..=self.last_year()).contains(&year)
    }

    /// Day offset of the first covered day.
    pub fn first_day(&self) -> i64 {
        self.start_days
    }

    /// Day offset one past the last covered day.
    pub fn end_day(&self) -> i64 {
        self.start_days + i64::from(self.year_starts[self.month_lengths.len()])
    }

    /// Return `true` if the day offset `days` falls inside a covered year.
    pub fn contains_day(&self, days: i64) -> bool {
        // `end_day` reads the trailing sentinel, so the last year is covered in full.
        (self.first_day()..self.end_day()).contains(&days)
    }

    /// Total number of days covered by the table.
    pub fn total_days(&self) -> u32 {
        self.year_starts[self.month_lengths.len()]
    }

    // ── Per-year queries (year must be covered) ──────────────────────────────

    fn index(&self, year: Year) -> usize {
        debug_assert!(self.contains_year(year), "year {year} not in table");
        (year - self.first_year) as usize
    }

    /// Length (29 or 30) of `month` (1–12) in `year`.
    pub fn month_length(&self, year: Year, month: u8) -> u8 {
        month_length_of(self.month_lengths[self.index(year)], month)
    }

    /// The twelve month lengths of `year`.
    pub fn month_lengths(&self, year: Year) -> [u8; 12] {
        let word = self.month_lengths[self.index(year)];
        std::array::from_fn(|i| month_length_of(word, i as u8 + 1))
    }

    /// Day offset of 1 Muharram of `year`.
    pub fn year_start(&self, year: Year) -> i64 {
        self.start_days + i64::from(self.year_starts[self.index(year)])
    }

    /// Day offset of the first day of `month` in `year`.
    pub fn month_start(&self, year: Year, month: u8) -> i64 {
        let before: i64 = (1..month)
            .map(|m| i64::from(self.month_length(year, m)))
            .sum();
        self.year_start(year) + before
    }

    /// Number of days (354 or 355) in `year`.
    pub fn year_length(&self, year: Year) -> u16 {
        let i = self.index(year);
        (self.year_starts[i + 1] - self.year_starts[i]) as u16
    }

    // ── Day offset → date ────────────────────────────────────────────────────

    /// Resolve the day offset `days` to `(year, month, day)`.
    ///
    /// Returns `None` if `days` lies outside the covered years.
    pub fn date_from_days(&self, days: i64, search: YearSearch) -> Option<(Year, u8, u8)> {
        if !self.contains_day(days) {
            return None;
        }
        let (year, month) = match search {
            YearSearch::Linear => self.find_linear(days),
            YearSearch::Binary => self.find_binary(days),
        };
        let day = days - self.month_start(year, month) + 1;
        Some((year, month, day as u8))
    }

    /// Walk forward from the first year until `days` falls inside a year.
    fn find_linear(&self, days: i64) -> (Year, u8) {
        let mut year = self.first_year - 1;
        loop {
            year += 1;
            let d = days - self.year_start(year) + 1;
            let year_length = i64::from(self.year_length(year));
            if d <= year_length {
                return (year, self.month_of_day(year, d));
            }
        }
    }

    fn find_binary(&self, days: i64) -> (Year, u8) {
        let offset = days - self.start_days;
        // First entry past `offset`, minus one, is the containing year.
        let next = self
            .year_starts
            .partition_point(|&start| i64::from(start) <= offset);
        let year = self.first_year + (next - 1) as Year;
        let d = days - self.year_start(year) + 1;
        (year, self.month_of_day(year, d))
    }

    /// Month containing day-of-year `d` (1-based).
    fn month_of_day(&self, year: Year, mut d: i64) -> u8 {
        // Last day of the year: skip the month walk.
        if d == i64::from(self.year_length(year)) {
            return 12;
        }
        let mut month = 1;
        let mut month_length = i64::from(self.month_length(year, month));
        while d > month_length {
            d -= month_length;
            month += 1;
            month_length = i64::from(self.month_length(year, month));
        }
        month
    }
}

fn month_length_of(word: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    let mask = 1u16 << (11 - (month - 1));
    if word & mask == 0 {
        29
    } else {
        30
    }
}

fn year_length_of(word: u16) -> u32 {
    29 * 12 + (word & !RESERVED_BITS).count_ones()
}
