//! Rendering of the final home state.

use smarthome_domain::home::SmartHome;

use crate::config::OutputFormat;

/// Render `home` in the requested format, without a trailing newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(home: &SmartHome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format!(
            "light: {}\nthermostat: {}\ndoor_lock: {}",
            home.light, home.thermostat, home.door_lock
        )),
        OutputFormat::Json => serde_json::to_string(home),
        OutputFormat::Pretty => serde_json::to_string_pretty(home),
    }
}
