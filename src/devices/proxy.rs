// proxy.rs
use tracing::info;

use crate::{events::NotificationBus, models::Source};

/// The only role allowed through a [`DeviceProxy`]. Compared exactly.
pub const ADMIN_ROLE: &str = "Admin";

pub trait DeviceAccess {
    fn request(&self, role: &str, bus: &NotificationBus);
}

#[derive(Debug, Default)]
pub struct RealDevice;

impl DeviceAccess for RealDevice {
    fn request(&self, _role: &str, bus: &NotificationBus) {
        bus.publish(Source::Device, "Device: Executing operation");
    }
}

/// Guards a [`RealDevice`], forwarding only admin requests.
#[derive(Debug, Default)]
pub struct DeviceProxy {
    real: RealDevice,
}

impl DeviceProxy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceAccess for DeviceProxy {
    fn request(&self, role: &str, bus: &NotificationBus) {
        if role == ADMIN_ROLE {
            bus.publish(Source::Proxy, "DeviceProxy: Access granted");
            self.real.request(role, bus);
        } else {
            info!(%role, "Request denied");
            bus.publish(Source::Proxy, "DeviceProxy: Access denied");
        }
    }
}
