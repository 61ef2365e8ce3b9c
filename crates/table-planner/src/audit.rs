//! Integrity report over the two stores.
//!
//! Nothing here repairs state. Double bookings can only appear through direct
//! ledger edits; orphans appear whenever a table with bookings is deleted.

use serde::Serialize;

use crate::model::{Reservation, Table};
use crate::overlap::{find_conflicts, Conflict};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Reservations double-booking a table.
    pub conflicts: Vec<Conflict>,
    /// Reservations whose table no longer exists.
    pub orphans: Vec<Reservation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.orphans.is_empty()
    }
}

pub fn audit(tables: &[Table], reservations: &[Reservation]) -> AuditReport {
    let orphans = reservations
        .iter()
        .filter(|r| !tables.iter().any(|t| t.id == r.table_id))
        .cloned()
        .collect();

    AuditReport {
        conflicts: find_conflicts(reservations),
        orphans,
    }
}
