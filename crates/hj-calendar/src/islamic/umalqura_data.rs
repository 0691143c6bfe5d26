//! Embedded Umm al-Qura month-length asset.
//!
//! Byte layout: standard base64 (RFC 4648, padded) of one little-endian
//! `u16` word per Hijri year, starting at [`FIRST_YEAR`].  Bits 11..0 of a
//! word hold months 12..1; a set bit marks a 30-day month, a clear bit a
//! 29-day month.  Bits 15..12 are reserved and must be zero.
//!
//! The words are generated from the Umm al-Qura tables published by the
//! Saudi authorities and must not be edited by hand.

use hj_core::Year;

use super::umalqura::PackedTable;

/// First Hijri year covered by the table.
pub const FIRST_YEAR: Year = 1300;

/// Last Hijri year covered by the table (inclusive).
pub const LAST_YEAR: Year = 1600;

/// Day offset, relative to the civil epoch, of 1 Muharram [`FIRST_YEAR`].
pub const START_DAYS: i64 = 460_322;

const PAYLOAD: &str = concat!(
    "qgpUDckO1AbqBmwDrQpVBakGkgepC9QF2gpcBS0NlQZKB1QLagutBa4ETwoXBYsGpQbVCtYCWwmdBE0KJg2VDawF",
    "tgm6AlsKKwWVCsoG6Qr0AnYJtgJWCcoKpAvSC9kF3AJtCU0FpQpSC6ULtAW2CVcFlwJLBaMGUgdlC2oFqworBZUM",
    "Sg2lDcoF1gpXCasESwmlClILagt1BXYCtwhbBFUFqQW0BdoJ3QRuAjYJqgpUDbIN1QXaAlsJqwRVCkkLZAtxC7QF",
    "tQpVCiUNkg7JDtQG6QprCasEkwpJDaQNsg25CroEWworBZUKKgtVC1wFvQQ9Ah0JlQpKC1oLbQW2AjsJmwRVBqkG",
    "VAdqC2wFrQpVBSkLkgupC9QF2gpaBasKlQVJB2QHqgu1BbYCVgpNDiULUgtqC60FrgIvCZcESwalBqwG1gpdBZ0E",
    "TQoWDZUNqgW1BdoCWwmtBJUFygbkBuoK9QS2AlYJqgpUC9IL2QXqAm0JrQSVCkoLpQuyBbUJ1gSXCkcFkwZJB1UL",
    "agVrCisFiwpGDaMNygXWCtsEawJLCaUKUgtpC3UFdgG3CFsCKwVlBbQF2gntBG0BtgimClINqQ3UBdoKWwmrBFMG",
    "KQdiB6kLsgW1ClUFJQuSDckO0gbpCmsFqwRVCikNVA2qDbUJugQ7CpsETQqqCtUK2gJdCV4ELgqaDFUNsga5BroE",
    "XQotBZUKUguoC7QLuQXaAloJSgukDdEO6AZqC20FNQWVBkoNqA3UDdoGWwWdAisGFQtKC5ULqgWuCi4JjwwnBZUG",
    "qgbWCl0FnQI=",
);

/// The packed Umm al-Qura asset, decoded once by
/// [`UmalquraTable::shared`](super::umalqura::UmalquraTable::shared).
pub const UMALQURA_DATA: PackedTable<'static> = PackedTable {
    first_year: FIRST_YEAR,
    last_year: LAST_YEAR,
    start_days: START_DAYS,
    payload: PAYLOAD,
};
