//! Explicit subscriber lists for the two stores.
//!
//! A store pushes its whole collection to every live subscriber after each
//! mutation, synchronously, before the mutating call returns. Subscribing
//! delivers the current collection once straight away.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<T> = Box<dyn FnMut(&[T]) + Send>;

pub(crate) struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(Subscription, Callback<T>)>,
}

impl<T> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe<F>(&mut self, current: &[T], mut callback: F) -> Subscription
    where
        F: FnMut(&[T]) + Send + 'static,
    {
        let handle = Subscription(self.next_id);
        self.next_id += 1;

        callback(current);
        self.entries.push((handle, Box::new(callback)));
        handle
    }

    pub(crate) fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    pub(crate) fn publish(&mut self, items: &[T]) {
        for (_, callback) in &mut self.entries {
            callback(items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
