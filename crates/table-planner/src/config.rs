//! Booking policy knobs.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Tunable booking policy. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Length of a new booking. Clients can only change it afterwards.
    pub default_duration_minutes: u32,
    /// First slot shown in the availability grid.
    pub opening_time: TimeOfDay,
    /// Last slot shown in the grid, and the latest end a duration edit can reach.
    pub closing_time: TimeOfDay,
    pub slot_interval_minutes: u32,
    pub max_party_size: u32,
    pub max_table_capacity: u32,
}

const OPENING_TIME: TimeOfDay = TimeOfDay::at(6, 0);
const CLOSING_TIME: TimeOfDay = TimeOfDay::at(23, 0);

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: 60,
            opening_time: OPENING_TIME,
            closing_time: CLOSING_TIME,
            slot_interval_minutes: 60,
            max_party_size: 20,
            max_table_capacity: 20,
        }
    }
}

impl PlannerConfig {
    /// Parse a JSON configuration document (camelCase keys).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The slot grid: `opening_time`, then every `slot_interval_minutes`, up
    /// to and including `closing_time`.
    pub fn slot_times(&self) -> Vec<TimeOfDay> {
        let step = self.slot_interval_minutes.max(1);
        let mut slots = Vec::new();
        let mut cursor = Some(self.opening_time);

        while let Some(time) = cursor {
            if time > self.closing_time {
                break;
            }
            slots.push(time);
            cursor = time.checked_add_minutes(step);
        }

        slots
    }
}
