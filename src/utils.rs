// utils.rs
use std::io::Write;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, events::NotificationBus, models::OutputFormat};

/// Logs go to stderr; stdout is reserved for notifications.
pub fn init_logging(default_level: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| AppError::Logging(format!("invalid level {default_level:?}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn attach_stdout(bus: &NotificationBus, format: OutputFormat) {
    bus.subscribe_all(move |notification| {
        let line = match format {
            OutputFormat::Text => notification.message.clone(),
            OutputFormat::Json => match serde_json::to_string(notification) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to encode notification: {}", e);
                    return;
                }
            },
        };

        if let Err(e) = writeln!(std::io::stdout().lock(), "{line}") {
            warn!("Failed to write notification: {}", e);
        }
    });
}
