// config/mod.rs
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;
use validator::Validate;

use crate::{error::AppError, models::OutputFormat};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub output: OutputSettings,
    #[validate(nested)]
    pub scenario: ScenarioSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Names and roles the driver feeds through each pattern.
#[derive(Debug, Deserialize, Validate)]
#[serde(default)]
pub struct ScenarioSettings {
    #[validate(length(min = 1))]
    pub hub_device: String,
    #[validate(length(min = 1))]
    pub roles: Vec<String>,
    pub group_leaves: Vec<String>,
    #[validate(length(min = 1))]
    pub iterator_devices: Vec<String>,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            hub_device: "Smart Light".to_string(),
            roles: vec!["Admin".to_string(), "Guest".to_string()],
            group_leaves: vec!["Light 1".to_string(), "Light 2".to_string()],
            iterator_devices: vec![
                "Smart Light".to_string(),
                "Smart Thermostat".to_string(),
                "Smart Door Lock".to_string(),
            ],
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, AppError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/config").required(false))
            .add_source(
                config::Environment::with_prefix("SMARTHOME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scenario.roles")
                    .with_list_parse_key("scenario.group_leaves")
                    .with_list_parse_key("scenario.iterator_devices"),
            );

        Self::load(builder)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Settings, AppError> {
        Settings::load(Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn empty_source_yields_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.scenario.hub_device, "Smart Light");
        assert_eq!(settings.scenario.roles, ["Admin", "Guest"]);
        assert_eq!(settings.scenario.group_leaves, ["Light 1", "Light 2"]);
        assert_eq!(settings.scenario.iterator_devices.len(), 3);
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let settings = from_toml(
            r#"
            [output]
            format = "json"

            [scenario]
            roles = ["Guest"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.scenario.roles, ["Guest"]);
        assert_eq!(settings.scenario.hub_device, "Smart Light");
    }

    #[test]
    fn empty_hub_device_is_rejected() {
        let err = from_toml("[scenario]\nhub_device = \"\"").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn empty_group_is_allowed() {
        let settings = from_toml("[scenario]\ngroup_leaves = []").unwrap();
        assert!(settings.scenario.group_leaves.is_empty());
    }

    #[test]
    fn unknown_output_format_is_a_config_error() {
        let err = from_toml("[output]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {err:?}");
    }
}
