//! Error types for table-planner operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Reservation, ReservationId, TableId};
use crate::time::TimeOfDay;

/// Input that was rejected before any store was touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: i64,
    },

    #[error("Invalid time '{0}': expected HH:mm")]
    MalformedTime(String),

    #[error("Reservation starting at {start} would end after midnight")]
    PastMidnight { start: TimeOfDay },

    #[error("Start time {start} must be before end time {end}")]
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },

    #[error("A party of {party_size} does not fit at a table for {capacity}")]
    ExceedsCapacity { party_size: u32, capacity: u32 },
}

/// Errors returned by the scheduling engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No available table for {party_size} guests at {start} on {date}")]
    NoAvailableTable {
        party_size: u32,
        start: TimeOfDay,
        date: NaiveDate,
    },

    /// A specific table/time conflict. Carries the reservation that is in the way.
    #[error("Table {table_id} is already booked by {} from {} to {}",
        .conflicting.customer_name, .conflicting.start_time, .conflicting.end_time)]
    SchedulingConflict {
        table_id: TableId,
        conflicting: Box<Reservation>,
    },

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Table not found: {0}")]
    TableNotFound(TableId),
}

impl PlannerError {
    /// Stable machine-readable tag used by the command interface.
    pub fn kind(&self) -> &'static str {
        match self {
            PlannerError::Validation(_) => "validation",
            PlannerError::NoAvailableTable { .. } => "no_available_table",
            PlannerError::SchedulingConflict { .. } => "scheduling_conflict",
            PlannerError::ReservationNotFound(_) | PlannerError::TableNotFound(_) => "not_found",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
