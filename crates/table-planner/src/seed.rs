//! Sample floor plan and bookings a fresh planner starts with.
//!
//! Loaded straight into the stores, bypassing the engine: the Johnson Family
//! booking seats six at a four-seat table, as the demo data always has.

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::model::{Reservation, ReservationId, Table, TableId};
use crate::time::TimeOfDay;

const TABLES: [(&str, &str, u32); 8] = [
    ("1", "Table 1", 4),
    ("2", "Table 2", 2),
    ("3", "Table 3", 6),
    ("4", "Table 4", 8),
    ("5", "Table 5", 2),
    ("6", "Table 6", 4),
    ("7", "Table 7", 6),
    ("8", "Table 8", 4),
];

// (id, customer, start hour, end hour, persons, table)
const RESERVATIONS: [(&str, &str, u16, u16, u32, &str); 9] = [
    ("1", "Smith Party", 9, 10, 4, "1"),
    ("2", "Davis", 10, 11, 2, "2"),
    ("3", "Wilson", 8, 10, 3, "3"),
    ("4", "Anderson Group", 9, 12, 8, "4"),
    ("5", "Johnson Family", 12, 14, 6, "1"),
    ("6", "Miller", 11, 12, 2, "5"),
    ("7", "Taylor Party", 14, 16, 4, "7"),
    ("8", "Garcia", 9, 10, 2, "8"),
    ("9", "Lee", 12, 13, 3, "8"),
];

pub fn sample_tables() -> Vec<Table> {
    TABLES
        .iter()
        .filter_map(|&(id, name, capacity)| {
            Some(Table {
                id: TableId::new(id),
                name: name.to_string(),
                capacity: NonZeroU32::new(capacity)?,
            })
        })
        .collect()
}

/// The sample bookings, all on `date`.
pub fn sample_reservations(date: NaiveDate) -> Vec<Reservation> {
    RESERVATIONS
        .iter()
        .filter_map(|&(id, customer, start, end, persons, table)| {
            Some(Reservation {
                id: ReservationId::new(id),
                customer_name: customer.to_string(),
                number_of_persons: persons,
                table_id: TableId::new(table),
                date,
                start_time: TimeOfDay::from_hm(start, 0)?,
                end_time: TimeOfDay::from_hm(end, 0)?,
            })
        })
        .collect()
}
