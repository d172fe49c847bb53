//! Light — on/off toggle, off by default.

use serde::Serialize;

/// A light that can be turned on and off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Light {
    on: bool,
}

impl Light {
    /// Create a light in the off state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the light on. Idempotent.
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    /// Switch the light off. Idempotent.
    pub fn turn_off(&mut self) {
        self.on = false;
    }

    /// Whether the light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl std::fmt::Display for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.on {
            f.write_str("on")
        } else {
            f.write_str("off")
        }
    }
}
