// registry/mod.rs
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::{events::NotificationBus, models::Source};

/// The smart home hub: an append-only list of registered device names.
///
/// [`Registry::instance`] hands out the single process-wide hub. Callers that
/// want to avoid the global can build their own with [`Registry::new`] and pass
/// it down explicitly.
#[derive(Debug, Default)]
pub struct Registry {
    devices: Mutex<Vec<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance() -> &'static Registry {
        static HUB: OnceLock<Registry> = OnceLock::new();
        HUB.get_or_init(Registry::new)
    }

    pub fn add_device(&self, name: impl Into<String>, bus: &NotificationBus) {
        let name = name.into();
        let message = format!("{name} added to the Smart Home Hub.");
        self.lock().push(name);
        bus.publish(Source::Hub, message);
    }

    pub fn devices(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().iter().any(|d| d == name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn same_instance(a: &Registry, b: &Registry) -> bool {
        std::ptr::eq(a, b)
    }

    // A push cannot leave the list half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::recording_bus;

    #[test]
    fn instance_is_the_same_every_time() {
        let hub = Registry::instance();
        let another = Registry::instance();
        assert!(Registry::same_instance(hub, another));
    }

    #[test]
    fn explicit_registries_are_distinct_from_the_global() {
        let local = Registry::new();
        assert!(!Registry::same_instance(&local, Registry::instance()));
    }

    #[test]
    fn added_device_appears_exactly_once() {
        let (bus, recorded) = recording_bus();
        let hub = Registry::new();

        hub.add_device("Smart Light", &bus);

        assert_eq!(hub.devices(), ["Smart Light"]);
        assert_eq!(recorded.lines(), ["Smart Light added to the Smart Home Hub."]);
    }

    #[test]
    fn device_is_registered_before_subscribers_hear_about_it() {
        let (bus, _) = recording_bus();
        let hub: &'static Registry = Box::leak(Box::new(Registry::new()));
        let seen = std::sync::Arc::new(Mutex::new(None));
        let sink = seen.clone();
        bus.subscribe(Source::Hub, move |_| {
            *sink.lock().unwrap() = Some(hub.contains("Smart Light"));
        });

        hub.add_device("Smart Light", &bus);

        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[test]
    fn devices_keep_insertion_order_and_duplicates() {
        let (bus, _) = recording_bus();
        let hub = Registry::new();
        assert!(hub.is_empty());

        hub.add_device("Smart Light", &bus);
        hub.add_device("Smart Thermostat", &bus);
        hub.add_device("Smart Light", &bus);

        assert_eq!(hub.devices(), ["Smart Light", "Smart Thermostat", "Smart Light"]);
        assert_eq!(hub.len(), 3);
        assert!(hub.contains("Smart Thermostat"));
        assert!(!hub.contains("Smart Door Lock"));
    }

    #[test]
    fn global_hub_records_additions() {
        let (bus, _) = recording_bus();
        let name = "Registry Test Sensor";

        Registry::instance().add_device(name, &bus);

        let count = Registry::instance()
            .devices()
            .iter()
            .filter(|d| d.as_str() == name)
            .count();
        assert_eq!(count, 1);
    }
}
