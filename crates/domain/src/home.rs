//! Home — one of each device, side by side.
//!
//! The devices share nothing: a call only ever touches the device it names.

use serde::Serialize;

use crate::device::{DoorLock, Light, Thermostat};
use crate::service::{DoorLockService, LightService, ServiceCall, ThermostatService};

/// A home holding one light, one thermostat and one door lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SmartHome {
    pub light: Light,
    pub thermostat: Thermostat,
    pub door_lock: DoorLock,
}

impl SmartHome {
    /// Create a home with every device in its default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a call to the device it targets.
    pub fn apply(&mut self, call: ServiceCall) {
        match call {
            ServiceCall::Light(LightService::TurnOn) => self.light.turn_on(),
            ServiceCall::Light(LightService::TurnOff) => self.light.turn_off(),
            ServiceCall::Thermostat(ThermostatService::SetTemperature(value)) => {
                self.thermostat.set_temperature(value);
            }
            ServiceCall::DoorLock(DoorLockService::Lock) => self.door_lock.lock(),
            ServiceCall::DoorLock(DoorLockService::Unlock) => self.door_lock.unlock(),
        }
    }
}
