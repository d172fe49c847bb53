//! Property-based tests for the device models and service calls.
//!
//! These tests use proptest to verify the device laws hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use smarthome_domain::device::{DoorLock, HEATING_THRESHOLD, Light, Thermostat};
use smarthome_domain::home::SmartHome;
use smarthome_domain::service::{DoorLockService, LightService, ServiceCall, ThermostatService};

prop_compose! {
    fn arbitrary_call()(variant in 0..5u8, temperature in any::<i64>()) -> ServiceCall {
        match variant {
            0 => ServiceCall::Light(LightService::TurnOn),
            1 => ServiceCall::Light(LightService::TurnOff),
            2 => ServiceCall::Thermostat(ThermostatService::SetTemperature(temperature)),
            3 => ServiceCall::DoorLock(DoorLockService::Lock),
            _ => ServiceCall::DoorLock(DoorLockService::Unlock),
        }
    }
}

proptest! {
    #[test]
    fn heating_follows_threshold(t in any::<i64>()) {
        let mut thermostat = Thermostat::new();
        thermostat.set_temperature(t);
        prop_assert_eq!(thermostat.temperature(), t);
        prop_assert_eq!(thermostat.is_heating(), t > HEATING_THRESHOLD);
    }

    #[test]
    fn heating_depends_only_on_last_setting(history in prop::collection::vec(any::<i64>(), 1..20)) {
        let mut thermostat = Thermostat::new();
        for t in &history {
            thermostat.set_temperature(*t);
        }
        let last = *history.last().unwrap();
        let mut fresh = Thermostat::new();
        fresh.set_temperature(last);
        prop_assert_eq!(thermostat, fresh);
    }

    #[test]
    fn every_call_is_idempotent(call in arbitrary_call()) {
        let mut once = SmartHome::new();
        once.apply(call);
        let mut twice = SmartHome::new();
        twice.apply(call);
        twice.apply(call);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn calls_only_touch_their_device(calls in prop::collection::vec(arbitrary_call(), 0..30)) {
        let mut home = SmartHome::new();
        for call in &calls {
            home.apply(*call);
        }

        let mut light = Light::new();
        let mut thermostat = Thermostat::new();
        let mut door_lock = DoorLock::new();
        for call in &calls {
            match call {
                ServiceCall::Light(LightService::TurnOn) => light.turn_on(),
                ServiceCall::Light(LightService::TurnOff) => light.turn_off(),
                ServiceCall::Thermostat(ThermostatService::SetTemperature(t)) => {
                    thermostat.set_temperature(*t);
                }
                ServiceCall::DoorLock(DoorLockService::Lock) => door_lock.lock(),
                ServiceCall::DoorLock(DoorLockService::Unlock) => door_lock.unlock(),
            }
        }

        prop_assert_eq!(home.light, light);
        prop_assert_eq!(home.thermostat, thermostat);
        prop_assert_eq!(home.door_lock, door_lock);
    }

    #[test]
    fn displayed_call_parses_back(call in arbitrary_call()) {
        let parsed: ServiceCall = call.to_string().parse().unwrap();
        prop_assert_eq!(parsed, call);
    }

    #[test]
    fn any_integer_text_is_accepted_as_temperature(t in any::<i64>()) {
        let raw = format!("thermostat.set_temperature={t}");
        let parsed = raw.parse::<ServiceCall>();
        prop_assert_eq!(
            parsed,
            Ok(ServiceCall::Thermostat(ThermostatService::SetTemperature(t)))
        );
    }
}

#[test]
fn light_round_trip_returns_to_off() {
    let mut light = Light::new();
    light.turn_on();
    light.turn_off();
    assert_eq!(light, Light::default());
}

#[test]
fn door_lock_round_trip_returns_to_locked() {
    let mut lock = DoorLock::new();
    lock.unlock();
    lock.lock();
    assert_eq!(lock, DoorLock::default());
}
