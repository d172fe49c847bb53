//! Common error types used across the workspace.
//!
//! Device operations never fail. The only failures are raised while turning
//! text into a [`ServiceCall`](crate::service::ServiceCall).

use std::num::ParseIntError;

/// Top-level error for the smarthome workspace.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// A service call was rejected before reaching any device.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Invalid-argument failures raised while parsing a service call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The call is not of the form `<device>.<service>[=<value>]`.
    #[error("malformed service call {0:?}, expected <device>.<service>[=<value>]")]
    Malformed(String),

    /// The device part does not name a known device.
    #[error("unknown device {0:?}")]
    UnknownDevice(String),

    /// The device exists but does not expose this service.
    #[error("device {device} has no service {service:?}")]
    UnknownService {
        device: &'static str,
        service: String,
    },

    /// The service needs a value and none was given.
    #[error("service {0} requires a value")]
    MissingValue(&'static str),

    /// The service takes no value but one was given.
    #[error("service {0} does not take a value")]
    UnexpectedValue(&'static str),

    /// The temperature could not be read as an integer.
    #[error("invalid temperature {value:?}")]
    InvalidTemperature {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
