use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which part of the home emitted a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Hub,
    Device,
    Proxy,
    Control,
    Routine,
    Group,
    Iterator,
    Driver,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub source: Source,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(source: Source, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
