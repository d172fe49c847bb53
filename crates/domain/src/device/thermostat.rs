//! Thermostat — integer temperature setting with a derived heating flag.

use serde::Serialize;

/// Temperature a freshly created thermostat is set to.
pub const DEFAULT_TEMPERATURE: i64 = 68;

/// Heating is on strictly above this setting; the threshold itself is idle.
pub const HEATING_THRESHOLD: i64 = 68;

/// A thermostat whose heating flag always equals
/// `temperature > HEATING_THRESHOLD`.
///
/// The flag is recomputed eagerly in [`set_temperature`](Self::set_temperature),
/// which is the only way to mutate a thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thermostat {
    temperature: i64,
    heating: bool,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            heating: false,
        }
    }
}

impl Thermostat {
    /// Create a thermostat set to [`DEFAULT_TEMPERATURE`], not heating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target temperature. Any value is accepted, including negative
    /// and extreme ones.
    pub fn set_temperature(&mut self, value: i64) {
        self.temperature = value;
        self.heating = value > HEATING_THRESHOLD;
    }

    /// Current temperature setting.
    #[must_use]
    pub fn temperature(&self) -> i64 {
        self.temperature
    }

    /// Whether the setting is above [`HEATING_THRESHOLD`].
    #[must_use]
    pub fn is_heating(&self) -> bool {
        self.heating
    }
}

impl std::fmt::Display for Thermostat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = if self.heating { "heating" } else { "idle" };
        write!(f, "{} ({mode})", self.temperature)
    }
}
