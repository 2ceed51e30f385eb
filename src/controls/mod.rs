// controls/mod.rs
use crate::{events::NotificationBus, models::Source};

/// A way of driving a device, swappable underneath [`DeviceControl`].
pub trait Control {
    fn operate(&self, bus: &NotificationBus);
}

#[derive(Debug, Default)]
pub struct RemoteControl;

impl Control for RemoteControl {
    fn operate(&self, bus: &NotificationBus) {
        bus.publish(Source::Control, "Remote Control: Operating device");
    }
}

#[derive(Debug, Default)]
pub struct VoiceControl;

impl Control for VoiceControl {
    fn operate(&self, bus: &NotificationBus) {
        bus.publish(Source::Control, "Voice Control: Operating device");
    }
}

pub struct DeviceControl {
    control: Box<dyn Control>,
}

impl DeviceControl {
    pub fn new(control: impl Control + 'static) -> Self {
        Self {
            control: Box::new(control),
        }
    }

    pub fn set_control(&mut self, control: impl Control + 'static) {
        self.control = Box::new(control);
    }

    pub fn operate(&self, bus: &NotificationBus) {
        self.control.operate(bus);
    }
}
