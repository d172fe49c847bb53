//! Door lock — locked/unlocked toggle, locked by default.

use serde::Serialize;

/// A door lock. Unlike the other devices it starts in its engaged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorLock {
    locked: bool,
}

impl Default for DoorLock {
    fn default() -> Self {
        Self { locked: true }
    }
}

impl DoorLock {
    /// Create a lock in the locked state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage the lock. Idempotent.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the lock. Idempotent.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the lock is engaged.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl std::fmt::Display for DoorLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.locked {
            f.write_str("locked")
        } else {
            f.write_str("unlocked")
        }
    }
}
