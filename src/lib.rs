//! Smart home vocabulary for a set of classic design patterns.
//!
//! Every component reports what it does by publishing a human-readable
//! [`models::Notification`] on an [`events::NotificationBus`], which callers
//! pass in explicitly. [`scenario::run`] drives all of them in order.

pub mod commands;
pub mod config;
pub mod controls;
pub mod devices;
pub mod error;
pub mod events;
pub mod groups;
pub mod models;
pub mod registry;
pub mod routines;
pub mod scenario;
pub mod utils;
