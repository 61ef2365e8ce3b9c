//! The scheduling engine: table allocation and the no-double-booking rule.
//!
//! [`Planner`] owns one [`TableRegistry`] and one [`ReservationLedger`]. Every
//! command is synchronous; subscribers of either store see the result before
//! the command returns. For a multi-threaded host, put the whole planner
//! behind one mutex: the select-then-insert sequence in
//! [`Planner::create_reservation`] is only safe while nothing else writes the
//! ledger in between.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::{self, AuditReport};
use crate::availability::{self, FreeWindow, SlotAvailability};
use crate::clock::{Clock, SystemClock};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result, ValidationError};
use crate::ledger::ReservationLedger;
use crate::model::{
    Reservation, ReservationId, ReservationRequest, ReservationUpdate, Table, TableId, TableUpdate,
};
use crate::observe::Subscription;
use crate::overlap::find_blocking;
use crate::registry::TableRegistry;
use crate::seed;
use crate::time::TimeOfDay;
use crate::validation::{validate_interval, validate_name, validate_range, validate_time};

#[derive(Debug)]
pub struct Planner<C: Clock = SystemClock> {
    config: PlannerConfig,
    registry: TableRegistry,
    ledger: ReservationLedger,
    clock: C,
}

impl Planner<SystemClock> {
    /// An empty planner on the system clock.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Planner<C> {
    pub fn with_clock(config: PlannerConfig, clock: C) -> Self {
        Self::from_parts(config, TableRegistry::new(), ReservationLedger::new(), clock)
    }

    /// A planner holding the sample floor plan and today's sample bookings.
    pub fn seeded(config: PlannerConfig, clock: C) -> Self {
        let today = clock.today();
        Self::from_parts(
            config,
            TableRegistry::with_tables(seed::sample_tables()),
            ReservationLedger::with_reservations(seed::sample_reservations(today)),
            clock,
        )
    }

    pub fn from_parts(
        config: PlannerConfig,
        registry: TableRegistry,
        ledger: ReservationLedger,
        clock: C,
    ) -> Self {
        Self {
            config,
            registry,
            ledger,
            clock,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Direct write access to the ledger, for edits that deliberately skip the
    /// engine's overlap checks. Prefer [`Planner::update_reservation`].
    pub fn ledger_mut(&mut self) -> &mut ReservationLedger {
        &mut self.ledger
    }

    // ── Tables ──────────────────────────────────────────────────────────────

    pub fn list_tables(&self) -> &[Table] {
        self.registry.list()
    }

    pub fn get_table(&self, id: &TableId) -> Option<&Table> {
        self.registry.get(id)
    }

    /// Create a table after checking the name and the capacity bounds.
    ///
    /// `capacity` is signed so that zero and negative input from clients is a
    /// validation error rather than a parse failure.
    pub fn create_table(&mut self, name: &str, capacity: i64) -> Result<Table> {
        let name = validate_name("name", name)?;
        let max = self.config.max_table_capacity;
        let seats = u32::try_from(capacity)
            .ok()
            .filter(|&seats| seats <= max)
            .and_then(NonZeroU32::new)
            .ok_or(ValidationError::OutOfRange {
                field: "capacity",
                min: 1,
                max,
                value: capacity,
            })?;

        Ok(self.registry.create(name, seats))
    }

    /// Merge fields into a table. Capacity upper bounds are not re-checked.
    pub fn update_table(&mut self, id: &TableId, update: TableUpdate) -> bool {
        self.registry.update(id, update)
    }

    /// Delete a table. Its reservations stay in the ledger and become orphans.
    pub fn delete_table(&mut self, id: &TableId) -> bool {
        if !self.registry.delete(id) {
            return false;
        }

        let orphaned = self.ledger.list().iter().filter(|r| &r.table_id == id).count();
        if orphaned > 0 {
            warn!(table_id = %id, orphaned, "deleted table still has reservations");
        }
        true
    }

    pub fn subscribe_tables<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&[Table]) + Send + 'static,
    {
        self.registry.subscribe(callback)
    }

    pub fn unsubscribe_tables(&mut self, subscription: Subscription) -> bool {
        self.registry.unsubscribe(subscription)
    }

    // ── Reservations ────────────────────────────────────────────────────────

    /// All reservations, or only those on `date`.
    pub fn list_reservations(&self, date: Option<NaiveDate>) -> Vec<Reservation> {
        match date {
            Some(date) => self.ledger.list_for_date(date),
            None => self.ledger.list().to_vec(),
        }
    }

    pub fn list_reservations_for_table(&self, table_id: &TableId, date: NaiveDate) -> Vec<Reservation> {
        self.ledger.list_for_table(table_id, date)
    }

    pub fn get_reservation(&self, id: &ReservationId) -> Option<&Reservation> {
        self.ledger.get(id)
    }

    /// Book the smallest free table that seats the party, for the default
    /// duration starting at the requested time.
    ///
    /// # Errors
    /// - [`PlannerError::Validation`] for a blank name, an out-of-range party
    ///   size, a malformed start time, or a booking that would run past midnight.
    /// - [`PlannerError::NoAvailableTable`] when no table fits and is free.
    /// - [`PlannerError::SchedulingConflict`] when the chosen table turns out
    ///   to be taken after all.
    pub fn create_reservation(&mut self, request: &ReservationRequest) -> Result<Reservation> {
        let customer_name = validate_name("customerName", &request.customer_name)?;
        let party_size = validate_range(
            "numberOfPersons",
            request.number_of_persons,
            1,
            self.config.max_party_size,
        )?;
        let start = validate_time(&request.start_time)?;
        let end = start
            .checked_add_minutes(self.config.default_duration_minutes)
            .ok_or(ValidationError::PastMidnight { start })?;
        validate_interval(start, end)?;
        let date = request.date;

        let Some(table) = self.find_optimal_table(party_size, date, start, end) else {
            warn!(party_size, %date, %start, "no table available");
            return Err(PlannerError::NoAvailableTable {
                party_size,
                start,
                date,
            });
        };
        let table_id = table.id.clone();

        // Selection already skipped busy tables; this only fires if the
        // ledger changed between the two reads.
        if let Some(conflicting) = find_blocking(self.ledger.list(), &table_id, date, start, end, None) {
            warn!(table_id = %table_id, conflicting = %conflicting.id, "chosen table is already booked");
            return Err(PlannerError::SchedulingConflict {
                table_id,
                conflicting: Box::new(conflicting.clone()),
            });
        }

        let reservation = Reservation {
            id: ReservationId::generate(),
            customer_name,
            number_of_persons: party_size,
            table_id,
            date,
            start_time: start,
            end_time: end,
        };
        self.ledger.insert(reservation.clone());

        Ok(reservation)
    }

    /// The smallest table that seats `party_size` and is free for
    /// `[start, end)` on `date`. Ties go to the table listed first.
    pub fn find_optimal_table(
        &self,
        party_size: u32,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Option<&Table> {
        let reservations = self.ledger.list();

        let chosen = self
            .registry
            .list()
            .iter()
            .filter(|t| t.seats(party_size))
            .filter(|t| find_blocking(reservations, &t.id, date, start, end, None).is_none())
            .min_by_key(|t| t.capacity);

        debug!(
            party_size,
            %date,
            %start,
            %end,
            table_id = chosen.map(|t| t.id.as_str()),
            "table selection"
        );
        chosen
    }

    /// Merge fields into a reservation, refusing edits that would double-book.
    ///
    /// Returns `Ok(false)` if no reservation has that id. The merged record
    /// must keep `start < end`, and its range must not overlap any other
    /// reservation on its table and date. An edit that moves the booking to
    /// another table or changes the party size must name an existing table
    /// that seats the party.
    pub fn update_reservation(&mut self, id: &ReservationId, mut update: ReservationUpdate) -> Result<bool> {
        let Some(current) = self.ledger.get(id) else {
            return Ok(false);
        };

        if let Some(name) = update.customer_name.take() {
            update.customer_name = Some(validate_name("customerName", &name)?);
        }
        if let Some(persons) = update.number_of_persons {
            validate_range("numberOfPersons", persons, 1, self.config.max_party_size)?;
        }

        let seating_changed = update.table_id.is_some() || update.number_of_persons.is_some();
        let mut candidate = current.clone();
        candidate.apply(update.clone());
        validate_interval(candidate.start_time, candidate.end_time)?;

        if seating_changed {
            let table = self
                .registry
                .get(&candidate.table_id)
                .ok_or_else(|| PlannerError::TableNotFound(candidate.table_id.clone()))?;
            if !table.seats(candidate.number_of_persons) {
                warn!(reservation_id = %id, table_id = %table.id, "party does not fit the table");
                return Err(ValidationError::ExceedsCapacity {
                    party_size: candidate.number_of_persons,
                    capacity: table.capacity.get(),
                }
                .into());
            }
        }

        if let Some(conflicting) = find_blocking(
            self.ledger.list(),
            &candidate.table_id,
            candidate.date,
            candidate.start_time,
            candidate.end_time,
            Some(id),
        ) {
            warn!(reservation_id = %id, conflicting = %conflicting.id, "update would double-book");
            return Err(PlannerError::SchedulingConflict {
                table_id: candidate.table_id,
                conflicting: Box::new(conflicting.clone()),
            });
        }

        Ok(self.ledger.update(id, update))
    }

    pub fn delete_reservation(&mut self, id: &ReservationId) -> bool {
        self.ledger.delete(id)
    }

    /// The latest end time a duration edit of this reservation may reach: the
    /// start of the next booking on the same table and date, capped at the
    /// closing time.
    pub fn max_end_time(&self, id: &ReservationId) -> Option<TimeOfDay> {
        self.ledger.get(id).map(|r| self.max_end_for(r))
    }

    fn max_end_for(&self, reservation: &Reservation) -> TimeOfDay {
        self.ledger
            .list()
            .iter()
            .filter(|r| r.shares_table_and_date(reservation) && r.id != reservation.id)
            .map(|r| r.start_time)
            .filter(|&start| start > reservation.start_time)
            .min()
            .map_or(self.config.closing_time, |next| next.min(self.config.closing_time))
    }

    /// Move a reservation's end time, clamped to [`Planner::max_end_time`].
    ///
    /// Returns `Ok(None)` without touching anything when the clamped end would
    /// not be after the start. The edit itself still goes through
    /// [`Planner::update_reservation`], so the clamp is never the only guard.
    pub fn extend_duration(&mut self, id: &ReservationId, requested_end: TimeOfDay) -> Result<Option<Reservation>> {
        let reservation = self
            .ledger
            .get(id)
            .ok_or_else(|| PlannerError::ReservationNotFound(id.clone()))?;

        let max_end = self.max_end_for(reservation);
        let end = requested_end.min(max_end);
        if end <= reservation.start_time {
            debug!(reservation_id = %id, %requested_end, %max_end, "duration edit rejected");
            return Ok(None);
        }

        if !self.update_reservation(id, ReservationUpdate::end_time(end))? {
            return Err(PlannerError::ReservationNotFound(id.clone()));
        }
        Ok(self.ledger.get(id).cloned())
    }

    pub fn subscribe_reservations<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&[Reservation]) + Send + 'static,
    {
        self.ledger.subscribe(callback)
    }

    pub fn unsubscribe_reservations(&mut self, subscription: Subscription) -> bool {
        self.ledger.unsubscribe(subscription)
    }

    // ── Availability ────────────────────────────────────────────────────────

    /// Whether a booking on `table_id` could start at `time` on `date`.
    ///
    /// False for a time that has already come on today's date, and for a time
    /// inside an existing booking on that table.
    pub fn is_slot_available(&self, table_id: &TableId, time: TimeOfDay, date: NaiveDate) -> bool {
        if availability::is_past(time, date, self.clock.now()) {
            return false;
        }
        availability::is_unbooked(self.ledger.list(), table_id, date, time)
    }

    /// The slot grid for `date`, with the tables open at each slot.
    pub fn slots(&self, date: NaiveDate) -> Vec<SlotAvailability> {
        self.config
            .slot_times()
            .into_iter()
            .map(|time| {
                let free_tables: Vec<TableId> = self
                    .registry
                    .list()
                    .iter()
                    .filter(|t| self.is_slot_available(&t.id, time, date))
                    .map(|t| t.id.clone())
                    .collect();

                SlotAvailability {
                    time,
                    available: !free_tables.is_empty(),
                    free_tables,
                }
            })
            .collect()
    }

    /// Gaps between bookings on one table, from opening to closing time.
    pub fn free_windows(&self, table_id: &TableId, date: NaiveDate) -> Vec<FreeWindow> {
        availability::free_windows(
            self.ledger.list(),
            table_id,
            date,
            self.config.opening_time,
            self.config.closing_time,
        )
    }

    /// Double bookings and orphaned reservations currently in the stores.
    pub fn audit(&self) -> AuditReport {
        let report = audit::audit(self.registry.list(), self.ledger.list());
        if !report.is_clean() {
            info!(
                conflicts = report.conflicts.len(),
                orphans = report.orphans.len(),
                "audit found issues"
            );
        }
        report
    }
}
