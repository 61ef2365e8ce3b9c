//! The reservation ledger: owns reservation records.
//!
//! The ledger is a plain store. It never checks for overlaps; callers that go
//! through [`crate::Planner`] get that guarantee, callers that mutate the
//! ledger directly do not.

use chrono::NaiveDate;
use tracing::info;

use crate::model::{Reservation, ReservationId, ReservationUpdate, TableId};
use crate::observe::{Subscribers, Subscription};

#[derive(Debug)]
pub struct ReservationLedger {
    reservations: Vec<Reservation>,
    subscribers: Subscribers<Reservation>,
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations,
            subscribers: Subscribers::new(),
        }
    }

    /// Every reservation, in insertion order.
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect()
    }

    pub fn list_for_table(&self, table_id: &TableId, date: NaiveDate) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| &r.table_id == table_id && r.date == date)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    /// Append a reservation built by the engine.
    pub(crate) fn insert(&mut self, reservation: Reservation) {
        info!(
            reservation_id = %reservation.id,
            table_id = %reservation.table_id,
            date = %reservation.date,
            start = %reservation.start_time,
            end = %reservation.end_time,
            "reservation added"
        );
        self.reservations.push(reservation);
        self.publish();
    }

    /// Merge `update` into the reservation without any validation.
    /// `false` if no reservation has that id.
    pub fn update(&mut self, id: &ReservationId, update: ReservationUpdate) -> bool {
        let Some(reservation) = self.reservations.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        reservation.apply(update);
        info!(reservation_id = %id, "reservation updated");

        self.publish();
        true
    }

    pub fn delete(&mut self, id: &ReservationId) -> bool {
        let before = self.reservations.len();
        self.reservations.retain(|r| &r.id != id);
        if self.reservations.len() == before {
            return false;
        }
        info!(reservation_id = %id, "reservation deleted");

        self.publish();
        true
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&[Reservation]) + Send + 'static,
    {
        self.subscribers.subscribe(&self.reservations, callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.subscribers.unsubscribe(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self) {
        self.subscribers.publish(&self.reservations);
    }
}
