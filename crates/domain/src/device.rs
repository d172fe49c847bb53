//! Device — a single controllable thing in the home.
//!
//! Every device is a plain value: it owns its state, exposes one or two
//! mutating operations and a boolean predicate, and never references another
//! device.

mod door_lock;
mod light;
mod thermostat;

pub use door_lock::DoorLock;
pub use light::Light;
pub use thermostat::{DEFAULT_TEMPERATURE, HEATING_THRESHOLD, Thermostat};
