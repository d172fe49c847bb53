//! # smarthome-app
//!
//! Application layer — use-cases over the domain model.
//!
//! ## Responsibilities
//! - Own the [`SmartHome`](smarthome_domain::home::SmartHome) for the caller
//! - Parse and apply scripts of service calls
//! - Emit structured logs for every call applied or rejected
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only (plus `tracing`).
//! The binary depends on *this* crate, not the reverse.

pub mod services;
