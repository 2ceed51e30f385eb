// groups/mod.rs
use crate::{events::NotificationBus, models::Source};

/// A node in a device tree. Groups own their children, so a tree can never
/// contain itself.
#[derive(Debug, Clone)]
pub enum DeviceComponent {
    Leaf(DeviceLeaf),
    Group(DeviceGroup),
}

impl DeviceComponent {
    pub fn operation(&self, bus: &NotificationBus) {
        match self {
            DeviceComponent::Leaf(leaf) => leaf.operation(bus),
            DeviceComponent::Group(group) => group.operation(bus),
        }
    }
}

impl From<DeviceLeaf> for DeviceComponent {
    fn from(leaf: DeviceLeaf) -> Self {
        DeviceComponent::Leaf(leaf)
    }
}

impl From<DeviceGroup> for DeviceComponent {
    fn from(group: DeviceGroup) -> Self {
        DeviceComponent::Group(group)
    }
}

#[derive(Debug, Clone)]
pub struct DeviceLeaf {
    name: String,
}

impl DeviceLeaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn operation(&self, bus: &NotificationBus) {
        bus.publish(Source::Group, format!("{} operation", self.name));
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceGroup {
    children: Vec<DeviceComponent>,
}

impl DeviceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: impl Into<DeviceComponent>) {
        self.children.push(component.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn operation(&self, bus: &NotificationBus) {
        bus.publish(Source::Group, "Device Group operation");
        for child in &self.children {
            child.operation(bus);
        }
    }
}
