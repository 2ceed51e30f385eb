// commands/mod.rs
use crate::{devices::Device, events::NotificationBus};

pub trait Command {
    fn execute(&self, bus: &NotificationBus);
}

pub struct TurnOnCommand<'a> {
    device: &'a Device,
}

impl<'a> TurnOnCommand<'a> {
    pub fn new(device: &'a Device) -> Self {
        Self { device }
    }
}

impl Command for TurnOnCommand<'_> {
    fn execute(&self, bus: &NotificationBus) {
        self.device.on(bus);
    }
}

pub struct TurnOffCommand<'a> {
    device: &'a Device,
}

impl<'a> TurnOffCommand<'a> {
    pub fn new(device: &'a Device) -> Self {
        Self { device }
    }
}

impl Command for TurnOffCommand<'_> {
    fn execute(&self, bus: &NotificationBus) {
        self.device.off(bus);
    }
}
