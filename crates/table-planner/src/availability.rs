//! Slot availability and free windows per table.
//!
//! A slot is a clock-aligned start time from the planner's grid. A slot is
//! open on a table when it is not already past (on today's date) and no
//! reservation on that table covers it. Free windows are the gaps between a
//! table's merged bookings within a time window.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::model::{Reservation, TableId};
use crate::overlap::covers;
use crate::time::TimeOfDay;

/// A gap in a table's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_minutes: i64,
}

/// One row of the slot grid for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub time: TimeOfDay,
    /// At least one table can take a booking starting at `time`.
    pub available: bool,
    /// Tables open at `time`, in registry order.
    pub free_tables: Vec<TableId>,
}

/// Whether `time` on `date` has already started, relative to `now`.
///
/// Only today's slots can be past; any other date (earlier ones included) is
/// judged on bookings alone. The current minute counts as past.
pub fn is_past(time: TimeOfDay, date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date() && time <= TimeOfDay::from_naive(now.time())
}

/// Whether no reservation on `table_id`/`date` covers `time`.
pub fn is_unbooked(reservations: &[Reservation], table_id: &TableId, date: NaiveDate, time: TimeOfDay) -> bool {
    !reservations
        .iter()
        .any(|r| &r.table_id == table_id && r.date == date && covers(r, time))
}

/// Merge overlapping or touching bookings, clipped to the window.
///
/// Returns a sorted, non-overlapping list of (start, end) ranges.
fn merge_booked_ranges<'a>(
    bookings: impl Iterator<Item = &'a Reservation>,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
) -> Vec<(TimeOfDay, TimeOfDay)> {
    let mut ranges: Vec<(TimeOfDay, TimeOfDay)> = bookings
        .filter(|r| r.start_time < window_end && r.end_time > window_start)
        .map(|r| (r.start_time.max(window_start), r.end_time.min(window_end)))
        .collect();

    ranges.sort();

    let mut merged: Vec<(TimeOfDay, TimeOfDay)> = Vec::new();
    for (start, end) in ranges {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Free windows on `table_id`/`date` between `window_start` and `window_end`.
pub fn free_windows(
    reservations: &[Reservation],
    table_id: &TableId,
    date: NaiveDate,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
) -> Vec<FreeWindow> {
    if window_start >= window_end {
        return Vec::new();
    }

    let bookings = reservations
        .iter()
        .filter(|r| &r.table_id == table_id && r.date == date);
    let merged = merge_booked_ranges(bookings, window_start, window_end);

    let mut windows = Vec::new();
    let mut cursor = window_start;

    for (busy_start, busy_end) in merged {
        if cursor < busy_start {
            windows.push(FreeWindow {
                start: cursor,
                end: busy_start,
                duration_minutes: cursor.minutes_until(busy_start),
            });
        }
        cursor = cursor.max(busy_end);
    }

    if cursor < window_end {
        windows.push(FreeWindow {
            start: cursor,
            end: window_end,
            duration_minutes: cursor.minutes_until(window_end),
        });
    }

    windows
}
