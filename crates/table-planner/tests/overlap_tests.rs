//! Tests for half-open interval overlap and pairwise conflict detection.

use chrono::NaiveDate;
use table_planner::overlap::{covers, find_blocking};
use table_planner::{find_conflicts, overlaps, Reservation, ReservationId, TableId, TimeOfDay};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn booking(id: &str, table: &str, date: NaiveDate, start: &str, end: &str) -> Reservation {
    Reservation {
        id: ReservationId::new(id),
        customer_name: format!("Guest {id}"),
        number_of_persons: 2,
        table_id: TableId::new(table),
        date,
        start_time: t(start),
        end_time: t(end),
    }
}

// ── overlaps ────────────────────────────────────────────────────────────────

#[test]
fn partially_overlapping_ranges_overlap() {
    assert!(overlaps(t("09:00"), t("10:00"), t("09:30"), t("10:30")));
}

#[test]
fn disjoint_ranges_do_not_overlap() {
    assert!(!overlaps(t("09:00"), t("10:00"), t("11:00"), t("12:00")));
}

#[test]
fn touching_ranges_do_not_overlap() {
    // 09:00-10:00 and 10:00-11:00 can share a table.
    assert!(!overlaps(t("09:00"), t("10:00"), t("10:00"), t("11:00")));
    assert!(!overlaps(t("10:00"), t("11:00"), t("09:00"), t("10:00")));
}

#[test]
fn contained_range_overlaps() {
    assert!(overlaps(t("09:00"), t("12:00"), t("10:00"), t("11:00")));
    assert!(overlaps(t("10:00"), t("11:00"), t("09:00"), t("12:00")));
}

#[test]
fn identical_ranges_overlap() {
    assert!(overlaps(t("09:00"), t("10:00"), t("09:00"), t("10:00")));
}

#[test]
fn overlap_is_symmetric_on_sample_ranges() {
    let ranges = [
        ("08:00", "10:00"),
        ("09:00", "10:00"),
        ("09:30", "09:45"),
        ("10:00", "11:00"),
        ("23:00", "24:00"),
    ];
    for (a_start, a_end) in ranges {
        for (b_start, b_end) in ranges {
            assert_eq!(
                overlaps(t(a_start), t(a_end), t(b_start), t(b_end)),
                overlaps(t(b_start), t(b_end), t(a_start), t(a_end)),
                "{a_start}-{a_end} vs {b_start}-{b_end}"
            );
        }
    }
}

// ── covers ──────────────────────────────────────────────────────────────────

#[test]
fn covers_includes_start_and_excludes_end() {
    let r = booking("1", "1", day(16), "09:00", "10:00");
    assert!(covers(&r, t("09:00")));
    assert!(covers(&r, t("09:59")));
    assert!(!covers(&r, t("10:00")));
    assert!(!covers(&r, t("08:59")));
}

// ── find_blocking ───────────────────────────────────────────────────────────

#[test]
fn blocking_search_is_scoped_to_table_and_date() {
    let ledger = vec![
        booking("1", "1", day(16), "09:00", "10:00"),
        booking("2", "2", day(16), "09:00", "10:00"),
        booking("3", "1", day(17), "09:00", "10:00"),
    ];

    let hit = find_blocking(&ledger, &TableId::new("1"), day(16), t("09:30"), t("10:30"), None);
    assert_eq!(hit.map(|r| r.id.as_str()), Some("1"));

    let miss = find_blocking(&ledger, &TableId::new("3"), day(16), t("09:30"), t("10:30"), None);
    assert!(miss.is_none(), "no bookings on table 3");
}

#[test]
fn blocking_search_skips_excluded_reservation() {
    let ledger = vec![booking("1", "1", day(16), "09:00", "10:00")];
    let own = ReservationId::new("1");

    let hit = find_blocking(&ledger, &TableId::new("1"), day(16), t("09:00"), t("11:00"), Some(&own));
    assert!(hit.is_none(), "a reservation never blocks itself");
}

// ── find_conflicts ──────────────────────────────────────────────────────────

#[test]
fn overlapping_pair_on_same_table_is_reported_with_minutes() {
    let ledger = vec![
        booking("1", "1", day(16), "09:00", "10:00"),
        booking("2", "1", day(16), "09:30", "10:30"),
    ];

    let conflicts = find_conflicts(&ledger);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].first.id.as_str(), "1");
    assert_eq!(conflicts[0].second.id.as_str(), "2");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn same_time_on_different_tables_is_not_a_conflict() {
    let ledger = vec![
        booking("1", "1", day(16), "09:00", "10:00"),
        booking("2", "2", day(16), "09:00", "10:00"),
    ];
    assert!(find_conflicts(&ledger).is_empty());
}

#[test]
fn same_table_on_different_dates_is_not_a_conflict() {
    let ledger = vec![
        booking("1", "1", day(16), "09:00", "10:00"),
        booking("2", "1", day(17), "09:00", "10:00"),
    ];
    assert!(find_conflicts(&ledger).is_empty());
}

#[test]
fn contained_booking_overlap_is_its_own_length() {
    let ledger = vec![
        booking("1", "4", day(16), "09:00", "12:00"),
        booking("2", "4", day(16), "10:00", "11:00"),
    ];

    let conflicts = find_conflicts(&ledger);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn every_overlapping_pair_is_reported_once() {
    let ledger = vec![
        booking("1", "1", day(16), "09:00", "12:00"),
        booking("2", "1", day(16), "10:00", "11:00"),
        booking("3", "1", day(16), "10:30", "13:00"),
    ];

    let conflicts = find_conflicts(&ledger);
    let pairs: Vec<(&str, &str)> = conflicts
        .iter()
        .map(|c| (c.first.id.as_str(), c.second.id.as_str()))
        .collect();

    assert_eq!(pairs, vec![("1", "2"), ("1", "3"), ("2", "3")]);
}

#[test]
fn empty_ledger_has_no_conflicts() {
    assert!(find_conflicts(&[]).is_empty());
}
