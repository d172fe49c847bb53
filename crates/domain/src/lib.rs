//! # smarthome-domain
//!
//! Pure domain model for the smarthome device models.
//!
//! ## Responsibilities
//! - Define the **devices**: [`Light`](device::Light), [`Thermostat`](device::Thermostat)
//!   and [`DoorLock`](device::DoorLock), each a plain state holder with
//!   mutating operations and a boolean predicate
//! - Define the **home** ([`SmartHome`](home::SmartHome)): one of each device,
//!   composed side by side with no shared state
//! - Define **service calls** (`light.turn_on`, `thermostat.set_temperature=72`, …)
//!   and the validation errors raised while parsing them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or IO crates.

pub mod error;

pub mod device;
pub mod home;
pub mod service;
