// devices/mod.rs
mod iterator;
mod proxy;

pub use iterator::DeviceIterator;
pub use proxy::{ADMIN_ROLE, DeviceAccess, DeviceProxy, RealDevice};

use crate::{events::NotificationBus, models::Source};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    name: String,
}

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on(&self, bus: &NotificationBus) {
        bus.publish(Source::Device, format!("{} is ON", self.name));
    }

    pub fn off(&self, bus: &NotificationBus) {
        bus.publish(Source::Device, format!("{} is OFF", self.name));
    }
}
