//! Service — a callable command addressed to one device of the home.
//!
//! Calls are written `<device>.<service>[=<value>]`, for example
//! `light.turn_on`, `door_lock.unlock` or `thermostat.set_temperature=72`.
//! [`FromStr`] and [`Display`](std::fmt::Display) are inverse of each other.

use std::str::FromStr;

use crate::error::ValidationError;

/// Services exposed by the [`Light`](crate::device::Light).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightService {
    TurnOn,
    TurnOff,
}

/// Services exposed by the [`Thermostat`](crate::device::Thermostat).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermostatService {
    SetTemperature(i64),
}

/// Services exposed by the [`DoorLock`](crate::device::DoorLock).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorLockService {
    Lock,
    Unlock,
}

/// A fully validated call targeting exactly one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCall {
    Light(LightService),
    Thermostat(ThermostatService),
    DoorLock(DoorLockService),
}

impl ServiceCall {
    /// Name of the targeted device as written in a call.
    #[must_use]
    pub fn device(&self) -> &'static str {
        match self {
            Self::Light(_) => "light",
            Self::Thermostat(_) => "thermostat",
            Self::DoorLock(_) => "door_lock",
        }
    }

    /// Fully qualified service name, without any value.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light(LightService::TurnOn) => "light.turn_on",
            Self::Light(LightService::TurnOff) => "light.turn_off",
            Self::Thermostat(ThermostatService::SetTemperature(_)) => "thermostat.set_temperature",
            Self::DoorLock(DoorLockService::Lock) => "door_lock.lock",
            Self::DoorLock(DoorLockService::Unlock) => "door_lock.unlock",
        }
    }
}

impl std::fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        if let Self::Thermostat(ThermostatService::SetTemperature(value)) = self {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

impl FromStr for ServiceCall {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (target, value) = match raw.split_once('=') {
            Some((target, value)) => (target.trim(), Some(value.trim())),
            None => (raw, None),
        };
        let (device, service) = target
            .split_once('.')
            .filter(|(device, service)| !device.is_empty() && !service.is_empty())
            .ok_or_else(|| ValidationError::Malformed(raw.to_string()))?;

        let call = match (device, service) {
            ("light", "turn_on") => Self::Light(LightService::TurnOn),
            ("light", "turn_off") => Self::Light(LightService::TurnOff),
            ("door_lock", "lock") => Self::DoorLock(DoorLockService::Lock),
            ("door_lock", "unlock") => Self::DoorLock(DoorLockService::Unlock),
            ("thermostat", "set_temperature") => {
                let value =
                    value.ok_or(ValidationError::MissingValue("thermostat.set_temperature"))?;
                let temperature = parse_temperature(value)?;
                return Ok(Self::Thermostat(ThermostatService::SetTemperature(
                    temperature,
                )));
            }
            ("light", other) => return Err(unknown_service("light", other)),
            ("thermostat", other) => return Err(unknown_service("thermostat", other)),
            ("door_lock", other) => return Err(unknown_service("door_lock", other)),
            (other, _) => return Err(ValidationError::UnknownDevice(other.to_string())),
        };

        if value.is_some() {
            return Err(ValidationError::UnexpectedValue(call.name()));
        }
        Ok(call)
    }
}

fn parse_temperature(value: &str) -> Result<i64, ValidationError> {
    value
        .parse()
        .map_err(|source| ValidationError::InvalidTemperature {
            value: value.to_string(),
            source,
        })
}

fn unknown_service(device: &'static str, service: &str) -> ValidationError {
    ValidationError::UnknownService {
        device,
        service: service.to_string(),
    }
}
