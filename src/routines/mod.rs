// routines/mod.rs
use crate::{events::NotificationBus, models::Source};

/// Wake up, run the lighting step, start the coffee machine. Only the
/// lighting step varies between routines.
pub fn run_routine<F>(bus: &NotificationBus, turn_on_lights: F)
where
    F: FnOnce(&NotificationBus),
{
    bus.publish(Source::Routine, "Wake up");
    turn_on_lights(bus);
    bus.publish(Source::Routine, "Start coffee machine");
}

pub trait Routine {
    fn turn_on_lights(&self, bus: &NotificationBus);

    fn execute(&self, bus: &NotificationBus) {
        run_routine(bus, |bus| self.turn_on_lights(bus));
    }
}

#[derive(Debug, Default)]
pub struct MorningRoutine;

impl Routine for MorningRoutine {
    fn turn_on_lights(&self, bus: &NotificationBus) {
        bus.publish(Source::Routine, "Turn on bedroom lights");
    }
}
