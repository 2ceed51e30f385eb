// scenario.rs
use tracing::info;

use crate::{
    commands::{Command, TurnOffCommand, TurnOnCommand},
    config::ScenarioSettings,
    controls::{DeviceControl, RemoteControl, VoiceControl},
    devices::{Device, DeviceAccess, DeviceIterator, DeviceProxy},
    events::NotificationBus,
    groups::{DeviceGroup, DeviceLeaf},
    models::Source,
    registry::Registry,
    routines::{MorningRoutine, Routine},
};

/// Walks every pattern once, in a fixed order, publishing to `bus`.
pub fn run(bus: &NotificationBus, scenario: &ScenarioSettings) {
    info!("Running smart home scenario");

    let hub = Registry::instance();
    hub.add_device(scenario.hub_device.as_str(), bus);
    let another_hub = Registry::instance();
    bus.publish(
        Source::Driver,
        Registry::same_instance(hub, another_hub).to_string(),
    );

    let smart_light = Device::new(scenario.hub_device.as_str());
    let turn_on_light = TurnOnCommand::new(&smart_light);
    let turn_off_light = TurnOffCommand::new(&smart_light);
    turn_on_light.execute(bus);
    turn_off_light.execute(bus);

    let proxy_device = DeviceProxy::new();
    for role in &scenario.roles {
        proxy_device.request(role, bus);
    }

    let remote_control = DeviceControl::new(RemoteControl);
    let voice_control = DeviceControl::new(VoiceControl);
    remote_control.operate(bus);
    voice_control.operate(bus);

    MorningRoutine.execute(bus);

    let mut group = DeviceGroup::new();
    for leaf in &scenario.group_leaves {
        group.add(DeviceLeaf::new(leaf.as_str()));
    }
    group.operation(bus);

    let mut iterator = DeviceIterator::new(&scenario.iterator_devices);
    while iterator.has_next() {
        if let Some(device) = iterator.next() {
            bus.publish(Source::Iterator, device);
        }
    }

    info!(registered = hub.len(), "Scenario finished");
}
