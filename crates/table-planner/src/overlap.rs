//! Interval overlap checks over reservations.
//!
//! All ranges are half-open `[start, end)`. A reservation ending at 10:00 does
//! not conflict with one starting at 10:00.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Reservation, ReservationId, TableId};
use crate::time::TimeOfDay;

/// Whether `[a_start, a_end)` and `[b_start, b_end)` share at least one minute.
///
/// Symmetric in its two ranges.
pub fn overlaps(a_start: TimeOfDay, a_end: TimeOfDay, b_start: TimeOfDay, b_end: TimeOfDay) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whether `time` falls inside the reservation's `[start, end)` range.
pub fn covers(reservation: &Reservation, time: TimeOfDay) -> bool {
    reservation.start_time <= time && time < reservation.end_time
}

/// First reservation on `table_id`/`date` whose range overlaps `[start, end)`.
///
/// `exclude` skips one reservation, used when re-validating an edit of that
/// reservation against its neighbours.
pub fn find_blocking<'a>(
    reservations: &'a [Reservation],
    table_id: &TableId,
    date: NaiveDate,
    start: TimeOfDay,
    end: TimeOfDay,
    exclude: Option<&ReservationId>,
) -> Option<&'a Reservation> {
    reservations.iter().find(|r| {
        &r.table_id == table_id
            && r.date == date
            && exclude != Some(&r.id)
            && overlaps(start, end, r.start_time, r.end_time)
    })
}

/// A pair of reservations double-booking the same table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub first: Reservation,
    pub second: Reservation,
    pub overlap_minutes: i64,
}

/// Find every pair of reservations that overlap on the same table and date.
///
/// Pairs are reported once, in ledger order. The overlap duration is
/// `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(reservations: &[Reservation]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in reservations.iter().enumerate() {
        for b in &reservations[i + 1..] {
            if !a.shares_table_and_date(b)
                || !overlaps(a.start_time, a.end_time, b.start_time, b.end_time)
            {
                continue;
            }

            let overlap_start = a.start_time.max(b.start_time);
            let overlap_end = a.end_time.min(b.end_time);

            conflicts.push(Conflict {
                first: a.clone(),
                second: b.clone(),
                overlap_minutes: overlap_start.minutes_until(overlap_end),
            });
        }
    }

    conflicts
}
