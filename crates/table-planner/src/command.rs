//! Serializable command/response interface over [`Planner`].
//!
//! Clients that cannot call Rust directly (a web front-end, the `planner`
//! CLI) send [`Command`]s as JSON and get [`Response`]s back. Failures are
//! ordinary responses; `execute` never panics on bad input.
//!
//! ```rust
//! use table_planner::{Command, Planner, PlannerConfig, Response};
//!
//! let mut planner = Planner::new(PlannerConfig::default());
//! let command: Command =
//!     serde_json::from_str(r#"{"op":"create_table","name":"Patio","capacity":4}"#).unwrap();
//!
//! match planner.execute(command) {
//!     Response::Table { table: Some(table) } => assert_eq!(table.name, "Patio"),
//!     other => panic!("unexpected response: {other:?}"),
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::audit::AuditReport;
use crate::availability::{FreeWindow, SlotAvailability};
use crate::clock::Clock;
use crate::engine::Planner;
use crate::error::PlannerError;
use crate::model::{Reservation, ReservationId, ReservationRequest, ReservationUpdate, Table, TableId, TableUpdate};
use crate::time::TimeOfDay;
use crate::validation::validate_time;

/// One operation against the planner, tagged by `"op"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    ListTables,
    GetTable {
        id: TableId,
    },
    CreateTable {
        name: String,
        capacity: i64,
    },
    UpdateTable {
        id: TableId,
        #[serde(default)]
        fields: TableUpdate,
    },
    DeleteTable {
        id: TableId,
    },
    ListReservations {
        #[serde(default)]
        date: Option<NaiveDate>,
    },
    ListReservationsForTable {
        table_id: TableId,
        date: NaiveDate,
    },
    CreateReservation(ReservationRequest),
    UpdateReservation {
        id: ReservationId,
        #[serde(default)]
        fields: ReservationUpdate,
    },
    ExtendDuration {
        id: ReservationId,
        end_time: String,
    },
    MaxEndTime {
        id: ReservationId,
    },
    DeleteReservation {
        id: ReservationId,
    },
    IsSlotAvailable {
        table_id: TableId,
        time: String,
        date: NaiveDate,
    },
    Slots {
        date: NaiveDate,
    },
    FreeWindows {
        table_id: TableId,
        date: NaiveDate,
    },
    Audit,
}

/// The outcome of one [`Command`], tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Response {
    Tables { tables: Vec<Table> },
    Table { table: Option<Table> },
    Reservations { reservations: Vec<Reservation> },
    Reservation { reservation: Reservation },
    /// Outcome of an update or delete; `false` means nothing matched, or a
    /// duration edit was clamped down to nothing.
    Done { success: bool },
    Available { available: bool },
    MaxEndTime { end_time: Option<TimeOfDay> },
    Slots { slots: Vec<SlotAvailability> },
    FreeWindows { windows: Vec<FreeWindow> },
    Audit { report: AuditReport },
    Failure(Failure),
}

/// A rejected command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// One of `validation`, `no_available_table`, `scheduling_conflict`, `not_found`.
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<TableId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_reservation: Option<Reservation>,
}

impl From<PlannerError> for Failure {
    fn from(err: PlannerError) -> Self {
        let message = err.to_string();
        let kind = err.kind();
        match err {
            PlannerError::SchedulingConflict {
                table_id,
                conflicting,
            } => Failure {
                kind,
                message,
                table_id: Some(table_id),
                conflicting_reservation: Some(*conflicting),
            },
            _ => Failure {
                kind,
                message,
                table_id: None,
                conflicting_reservation: None,
            },
        }
    }
}

impl From<PlannerError> for Response {
    fn from(err: PlannerError) -> Self {
        Response::Failure(err.into())
    }
}

fn parse_time(raw: &str) -> Result<TimeOfDay, PlannerError> {
    Ok(validate_time(raw)?)
}

impl<C: Clock> Planner<C> {
    /// Run one command and describe its outcome.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::ListTables => Response::Tables {
                tables: self.list_tables().to_vec(),
            },
            Command::GetTable { id } => Response::Table {
                table: self.get_table(&id).cloned(),
            },
            Command::CreateTable { name, capacity } => match self.create_table(&name, capacity) {
                Ok(table) => Response::Table { table: Some(table) },
                Err(err) => err.into(),
            },
            Command::UpdateTable { id, fields } => Response::Done {
                success: self.update_table(&id, fields),
            },
            Command::DeleteTable { id } => Response::Done {
                success: self.delete_table(&id),
            },
            Command::ListReservations { date } => Response::Reservations {
                reservations: self.list_reservations(date),
            },
            Command::ListReservationsForTable { table_id, date } => Response::Reservations {
                reservations: self.list_reservations_for_table(&table_id, date),
            },
            Command::CreateReservation(request) => match self.create_reservation(&request) {
                Ok(reservation) => Response::Reservation { reservation },
                Err(err) => err.into(),
            },
            Command::UpdateReservation { id, fields } => match self.update_reservation(&id, fields) {
                Ok(success) => Response::Done { success },
                Err(err) => err.into(),
            },
            Command::ExtendDuration { id, end_time } => {
                let outcome = parse_time(&end_time).and_then(|end| self.extend_duration(&id, end));
                match outcome {
                    Ok(Some(reservation)) => Response::Reservation { reservation },
                    Ok(None) => Response::Done { success: false },
                    Err(err) => err.into(),
                }
            }
            Command::MaxEndTime { id } => Response::MaxEndTime {
                end_time: self.max_end_time(&id),
            },
            Command::DeleteReservation { id } => Response::Done {
                success: self.delete_reservation(&id),
            },
            Command::IsSlotAvailable {
                table_id,
                time,
                date,
            } => match parse_time(&time) {
                Ok(time) => Response::Available {
                    available: self.is_slot_available(&table_id, time, date),
                },
                Err(err) => err.into(),
            },
            Command::Slots { date } => Response::Slots {
                slots: self.slots(date),
            },
            Command::FreeWindows { table_id, date } => Response::FreeWindows {
                windows: self.free_windows(&table_id, date),
            },
            Command::Audit => Response::Audit {
                report: self.audit(),
            },
        }
    }
}
