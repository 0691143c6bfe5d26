//! Integration tests for the Umm al-Qura calendar and its lookup table.

use hj_calendar::islamic::arithmetic::CIVIL_EPOCH;
use hj_calendar::islamic::umalqura_data::{FIRST_YEAR, LAST_YEAR, START_DAYS, UMALQURA_DATA};
use hj_calendar::islamic::PackedTable;
use hj_calendar::{Calendar, CalendarDate, CalendarIdentifier, IslamicCalendar, UmalquraTable};
use hj_core::settings::{ScopedYearSearch, YearSearch};
use hj_core::Error;

fn umalqura() -> IslamicCalendar {
    IslamicCalendar::umalqura().unwrap()
}

fn table() -> &'static UmalquraTable {
    UmalquraTable::shared().unwrap()
}

fn ymd(d: CalendarDate) -> (i32, u8, u8) {
    (d.year(), d.month(), d.day())
}

// ─── Table store ──────────────────────────────────────────────────────────────

#[test]
fn table_covers_1300_to_1600() {
    let t = table();
    assert_eq!(t.first_year(), 1300);
    assert_eq!(t.last_year(), 1600);
    assert_eq!((FIRST_YEAR, LAST_YEAR), (1300, 1600));
    assert_eq!(UMALQURA_DATA.year_count(), 301);
    assert_eq!(t.year_start(1300), START_DAYS);
    assert_eq!(t.total_days(), 106_665);
}

#[test]
fn every_year_is_354_or_355_days() {
    let t = table();
    for year in 1300..=1600 {
        let sum: u16 = t.month_lengths(year).iter().map(|&m| u16::from(m)).sum();
        assert_eq!(sum, t.year_length(year), "year {year}");
        assert!(sum == 354 || sum == 355, "year {year} has {sum} days");
        for month in 1..=12 {
            assert!(matches!(t.month_length(year, month), 29 | 30));
        }
    }
}

#[test]
fn year_starts_strictly_increase() {
    let t = table();
    for year in 1300..1600 {
        assert_eq!(
            t.year_start(year + 1) - t.year_start(year),
            i64::from(t.year_length(year)),
            "year {year}"
        );
    }
    assert_eq!(
        t.end_day() - t.year_start(1600),
        i64::from(t.year_length(1600))
    );
}

#[test]
fn known_month_lengths() {
    let t = table();
    assert_eq!(
        t.month_lengths(1300),
        [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]
    );
    assert_eq!(
        t.month_lengths(1445),
        [29, 30, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30]
    );
    assert_eq!(t.year_length(1302), 355);
    assert_eq!(t.year_length(1445), 354);
}

#[test]
fn corrupt_asset_is_rejected() {
    let truncated = PackedTable {
        payload: &UMALQURA_DATA.payload[..UMALQURA_DATA.payload.len() - 4],
        ..UMALQURA_DATA
    };
    assert!(matches!(
        UmalquraTable::decode(&truncated),
        Err(Error::CorruptTable(_))
    ));

    let shifted = PackedTable {
        last_year: LAST_YEAR + 1,
        ..UMALQURA_DATA
    };
    assert!(UmalquraTable::decode(&shifted).is_err());
}

#[test]
fn decode_is_deterministic() {
    let fresh = UmalquraTable::decode(&UMALQURA_DATA).unwrap();
    assert_eq!(&fresh, table());
}

// ─── Conversions ──────────────────────────────────────────────────────────────

#[test]
fn first_day_of_table() {
    let cal = umalqura();
    let d = cal.date(1300, 1, 1).unwrap();
    assert_eq!(cal.to_julian_day(&d), 1_948_440 + 460_322);
    assert_eq!(cal.from_julian_day(1_948_440 + 460_322), d);
}

#[test]
fn known_dates() {
    let cal = umalqura();
    // 1 Muharram 1445 = 2023-07-19
    assert_eq!(ymd(cal.from_julian_day(2_460_145)), (1445, 1, 1));
    // 1 Ramadan 1445 = 2024-03-11
    let ramadan = cal.date(1445, 9, 1).unwrap();
    assert_eq!(cal.to_julian_day(&ramadan), 2_460_381);
    // 10 Dhu al-Hijjah 1443 = 2022-07-09
    let eid = cal.date(1443, 12, 10).unwrap();
    assert_eq!(cal.to_julian_day(&eid), 2_459_770);
    // 1 Muharram 1446 = 2024-07-07, one day before civil
    let d = cal.date(1446, 1, 1).unwrap();
    assert_eq!(cal.to_julian_day(&d), 2_460_499);
    assert_eq!(IslamicCalendar::civil().to_julian_day(&d), 2_460_500);
}

#[test]
fn leap_day_of_355_day_year() {
    let cal = umalqura();
    let last = cal.date(1302, 12, 30).unwrap();
    assert_eq!(cal.to_julian_day(&last), 2_409_824);
    assert_eq!(cal.from_julian_day(2_409_824), last);
    assert_eq!(ymd(cal.from_julian_day(2_409_825)), (1303, 1, 1));
}

#[test]
fn every_day_of_the_table_round_trips() {
    let cal = umalqura();
    let t = table();
    let first = CIVIL_EPOCH + t.first_day();
    let end = CIVIL_EPOCH + t.end_day();
    for jd in first..end {
        let d = cal.from_julian_day(jd);
        assert!((1300..=1600).contains(&d.year()), "jd {jd} -> {d}");
        assert!(d.day() >= 1 && d.day() <= cal.days_in_month(&d), "jd {jd} -> {d}");
        assert_eq!(cal.to_julian_day(&d), jd, "jd {jd} -> {d}");
    }
}

#[test]
fn every_date_of_the_table_round_trips() {
    let cal = umalqura();
    for year in 1300..=1600 {
        for month in 1..=12 {
            let first = cal.date(year, month, 1).unwrap();
            for day in 1..=cal.days_in_month(&first) {
                let d = cal.date(year, month, day).unwrap();
                assert_eq!(cal.from_julian_day(cal.to_julian_day(&d)), d);
            }
        }
    }
}

#[test]
fn last_day_of_each_year_is_in_twelfth_month() {
    let cal = umalqura();
    let t = table();
    for year in 1300..=1600 {
        let jd = CIVIL_EPOCH + t.year_start(year) + i64::from(t.year_length(year)) - 1;
        let d = cal.from_julian_day(jd);
        assert_eq!(ymd(d), (year, 12, t.month_length(year, 12)));
    }
}

#[test]
fn linear_and_binary_search_agree() {
    let cal = umalqura();
    let t = table();
    let days: Vec<i64> = (t.first_day()..t.end_day()).collect();

    let linear: Vec<_> = {
        let _guard = ScopedYearSearch::new(YearSearch::Linear);
        days.iter()
            .map(|&d| cal.from_julian_day(CIVIL_EPOCH + d))
            .collect()
    };
    let binary: Vec<_> = {
        let _guard = ScopedYearSearch::new(YearSearch::Binary);
        days.iter()
            .map(|&d| cal.from_julian_day(CIVIL_EPOCH + d))
            .collect()
    };
    assert_eq!(linear, binary);
}

// ─── Fallback to civil arithmetic ─────────────────────────────────────────────

#[test]
fn day_after_table_falls_back_to_civil() {
    let cal = umalqura();
    let civil = IslamicCalendar::civil();
    let t = table();
    let last = cal.date(1600, 12, t.month_length(1600, 12)).unwrap();
    let after = cal.to_julian_day(&last) + 1;
    assert_eq!(after, CIVIL_EPOCH + t.end_day());
    assert_eq!(ymd(cal.from_julian_day(after)), ymd(civil.from_julian_day(after)));
    assert_eq!(ymd(cal.from_julian_day(after)), (1601, 1, 1));
}

#[test]
fn day_before_table_falls_back_to_civil() {
    let cal = umalqura();
    let civil = IslamicCalendar::civil();
    let before = CIVIL_EPOCH + table().first_day() - 1;
    assert_eq!(ymd(cal.from_julian_day(before)), ymd(civil.from_julian_day(before)));
    assert_eq!(ymd(cal.from_julian_day(before)), (1299, 12, 29));
}

#[test]
fn outside_table_matches_civil() {
    let cal = umalqura();
    let civil = IslamicCalendar::civil();
    let t = table();
    let ranges = [
        CIVIL_EPOCH..CIVIL_EPOCH + 20_000,
        CIVIL_EPOCH + t.first_day() - 20_000..CIVIL_EPOCH + t.first_day(),
        CIVIL_EPOCH + t.end_day()..CIVIL_EPOCH + t.end_day() + 20_000,
    ];
    for jd in ranges.into_iter().flatten() {
        let u = cal.from_julian_day(jd);
        let c = civil.from_julian_day(jd);
        assert_eq!(ymd(u), ymd(c), "jd {jd}");
        assert_eq!(u.calendar(), CalendarIdentifier::IslamicUmalqura);
        assert_eq!(cal.to_julian_day(&u), jd);
        assert_eq!(cal.days_in_month(&u), civil.days_in_month(&c));
        assert_eq!(cal.days_in_year(&u), civil.days_in_year(&c));
    }
}
