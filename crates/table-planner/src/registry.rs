//! The table registry: owns table definitions.
//!
//! The registry accepts any positive capacity. Upper bounds on capacity are a
//! booking policy enforced by the engine's validation layer, not here.

use std::num::NonZeroU32;

use tracing::info;

use crate::model::{Table, TableId, TableUpdate};
use crate::observe::{Subscribers, Subscription};

#[derive(Debug)]
pub struct TableRegistry {
    tables: Vec<Table>,
    subscribers: Subscribers<Table>,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Start from a fixed set of tables, e.g. seed data.
    pub fn with_tables(tables: Vec<Table>) -> Self {
        Self {
            tables,
            subscribers: Subscribers::new(),
        }
    }

    /// Synchronous snapshot of the current tables, in insertion order.
    pub fn list(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|t| &t.id == id)
    }

    pub fn create(&mut self, name: impl Into<String>, capacity: NonZeroU32) -> Table {
        let table = Table {
            id: TableId::generate(),
            name: name.into(),
            capacity,
        };
        info!(table_id = %table.id, name = %table.name, capacity = capacity.get(), "table created");

        self.tables.push(table.clone());
        self.publish();
        table
    }

    /// Merge `update` into the table. `false` if no table has that id.
    pub fn update(&mut self, id: &TableId, update: TableUpdate) -> bool {
        let Some(table) = self.tables.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        table.apply(update);
        info!(table_id = %id, "table updated");

        self.publish();
        true
    }

    /// Remove the table. Reservations pointing at it are left alone.
    pub fn delete(&mut self, id: &TableId) -> bool {
        let before = self.tables.len();
        self.tables.retain(|t| &t.id != id);
        if self.tables.len() == before {
            return false;
        }
        info!(table_id = %id, "table deleted");

        self.publish();
        true
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&[Table]) + Send + 'static,
    {
        self.subscribers.subscribe(&self.tables, callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.subscribers.unsubscribe(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self) {
        self.subscribers.publish(&self.tables);
    }
}
