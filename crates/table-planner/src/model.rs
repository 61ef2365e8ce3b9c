//! Tables, reservations and the partial updates applied to them.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TimeOfDay;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// A fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`Table`].
    TableId
);

opaque_id!(
    /// Identifier of a [`Reservation`].
    ReservationId
);

/// A bookable table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: NonZeroU32,
}

/// Fields of a [`Table`] to overwrite. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableUpdate {
    pub name: Option<String>,
    pub capacity: Option<NonZeroU32>,
}

impl Table {
    pub(crate) fn apply(&mut self, update: TableUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
    }

    /// Whether a party of `party_size` fits at this table.
    pub fn seats(&self, party_size: u32) -> bool {
        self.capacity.get() >= party_size
    }
}

/// A booking of one table for a half-open `[start_time, end_time)` range on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    pub number_of_persons: u32,
    /// Weak reference: the table may have been deleted since.
    pub table_id: TableId,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Reservation {
    pub fn duration_minutes(&self) -> i64 {
        self.start_time.minutes_until(self.end_time)
    }

    /// Whether this reservation competes with `other` for the same table on the same date.
    pub fn shares_table_and_date(&self, other: &Reservation) -> bool {
        self.table_id == other.table_id && self.date == other.date
    }

    pub(crate) fn apply(&mut self, update: ReservationUpdate) {
        let ReservationUpdate {
            customer_name,
            number_of_persons,
            table_id,
            date,
            start_time,
            end_time,
        } = update;

        if let Some(v) = customer_name {
            self.customer_name = v;
        }
        if let Some(v) = number_of_persons {
            self.number_of_persons = v;
        }
        if let Some(v) = table_id {
            self.table_id = v;
        }
        if let Some(v) = date {
            self.date = v;
        }
        if let Some(v) = start_time {
            self.start_time = v;
        }
        if let Some(v) = end_time {
            self.end_time = v;
        }
    }
}

/// Fields of a [`Reservation`] to overwrite. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationUpdate {
    pub customer_name: Option<String>,
    pub number_of_persons: Option<u32>,
    pub table_id: Option<TableId>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

impl ReservationUpdate {
    /// An update that only moves the end time, as duration edits do.
    pub fn end_time(end_time: TimeOfDay) -> Self {
        Self {
            end_time: Some(end_time),
            ..Self::default()
        }
    }
}

/// A booking request as submitted by a client. The engine picks the table
/// and the end time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub customer_name: String,
    pub number_of_persons: u32,
    /// Raw `HH:mm`; validated by the engine.
    pub start_time: String,
    pub date: NaiveDate,
}
