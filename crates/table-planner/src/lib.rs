//! # table-planner
//!
//! Reservation allocation and conflict detection for a restaurant floor.
//!
//! Given a party size, a start time and a date, the planner books the
//! smallest free table that seats the party and guarantees that no table is
//! ever double-booked. Everything is in memory and synchronous: a
//! [`Planner`] owns its table registry and reservation ledger, and clients
//! talk to it either through its methods or through serializable
//! [`Command`]s.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use table_planner::{FixedClock, Planner, PlannerConfig, ReservationRequest};
//!
//! let now = NaiveDate::from_ymd_opt(2026, 3, 16)
//!     .unwrap()
//!     .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
//! let mut planner = Planner::with_clock(PlannerConfig::default(), FixedClock(now));
//! planner.create_table("Window", 2).unwrap();
//! planner.create_table("Booth", 6).unwrap();
//!
//! let booking = planner
//!     .create_reservation(&ReservationRequest {
//!         customer_name: "Okafor".to_string(),
//!         number_of_persons: 2,
//!         start_time: "19:00".to_string(),
//!         date: now.date(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(booking.end_time.to_string(), "20:00");
//! assert_eq!(planner.get_table(&booking.table_id).unwrap().name, "Window");
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: [`Planner`] with table selection, overlap enforcement, duration edits
//! - [`registry`]: table store
//! - [`ledger`]: reservation store (no conflict checks of its own)
//! - [`overlap`]: half-open interval overlap and pairwise conflict detection
//! - [`availability`]: slot grid and free windows
//! - [`audit`]: double-booking and orphan report
//! - [`command`]: JSON command/response interface
//! - [`time`]: `HH:mm` time-of-day arithmetic
//! - [`validation`]: input checks applied before any store is touched
//! - [`config`], [`clock`], [`seed`], [`observe`], [`error`]

pub mod audit;
pub mod availability;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod observe;
pub mod overlap;
pub mod registry;
pub mod seed;
pub mod time;
pub mod validation;

pub use audit::AuditReport;
pub use availability::{FreeWindow, SlotAvailability};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Command, Failure, Response};
pub use config::PlannerConfig;
pub use engine::Planner;
pub use error::{PlannerError, ValidationError};
pub use ledger::ReservationLedger;
pub use model::{
    Reservation, ReservationId, ReservationRequest, ReservationUpdate, Table, TableId, TableUpdate,
};
pub use observe::Subscription;
pub use overlap::{find_conflicts, overlaps, Conflict};
pub use registry::TableRegistry;
pub use time::{minutes_to_time, time_to_minutes, TimeOfDay};
