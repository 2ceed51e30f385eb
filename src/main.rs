// main.rs
use anyhow::Context;
use smart_home_patterns::{config::Settings, events::NotificationBus, scenario, utils};

fn load_settings() -> anyhow::Result<Settings> {
    Settings::new().context("Failed to load config")
}

// Nothing here may stop the scenario: bad settings fall back to defaults.
fn main() {
    let (settings, load_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    if let Err(e) = utils::init_logging(&settings.log.level) {
        eprintln!("Failed to set up logging: {e}");
        let _ = utils::init_logging("info");
    }

    if let Some(e) = load_error {
        tracing::warn!("{:#}; falling back to default settings", e);
    }

    let bus = NotificationBus::new();
    utils::attach_stdout(&bus, settings.output.format);

    tracing::info!(format = ?settings.output.format, "Smart home started");
    scenario::run(&bus, &settings.scenario);
}
