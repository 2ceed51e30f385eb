// events/mod.rs
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::models::{Notification, Source};

type Subscriber = Arc<dyn Fn(&Notification) + Send + Sync>;

/// Fan-out point for every notification the home produces.
///
/// Subscribers registered for a [`Source`] run first, then the catch-all
/// subscribers, each group in subscription order. Delivery is synchronous:
/// `publish` returns after every subscriber has seen the notification.
/// Callbacks may subscribe further callbacks; those first hear the next
/// notification.
pub struct NotificationBus {
    // `None` holds the catch-all subscribers.
    subscribers: DashMap<Option<Source>, Vec<Subscriber>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
        }
    }

    pub fn publish(&self, source: Source, message: impl Into<String>) {
        let notification = Notification::new(source, message);
        debug!(?source, message = %notification.message, "notification");

        // Snapshot first so no map guard is held while callbacks run.
        let callbacks: Vec<Subscriber> = [Some(source), None]
            .iter()
            .filter_map(|key| self.subscribers.get(key).map(|s| s.value().clone()))
            .flatten()
            .collect();

        for callback in callbacks {
            (callback)(&notification);
        }
    }

    pub fn subscribe<F: Fn(&Notification) + Send + Sync + 'static>(
        &self,
        source: Source,
        callback: F,
    ) {
        self.subscribers
            .entry(Some(source))
            .or_default()
            .push(Arc::new(callback));
    }

    pub fn subscribe_all<F: Fn(&Notification) + Send + Sync + 'static>(&self, callback: F) {
        self.subscribers
            .entry(None)
            .or_default()
            .push(Arc::new(callback));
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
