//! Stored-joystick latch.
//!
//! Pressing the momentary button captures the working command value of that
//! tick. While the latch is active, a later reading inside the neutral
//! deadband is replaced by the stored value, so the operator can hold an
//! assist or regen setpoint without holding the stick. Braking, a toggle
//! switch change, or the ECM leaving its driving states clears the latch.

use crate::command_band::within_neutral_deadband;
use crate::vehicle::JOYSTICK_NEUTRAL_NOM_PERCENT;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StoredJoystick {
    stored_percent: u8,
    active: bool,
}

impl StoredJoystick {
    pub const fn new() -> Self {
        StoredJoystick {
            stored_percent: JOYSTICK_NEUTRAL_NOM_PERCENT,
            active: false,
        }
    }

    /// Capture a setpoint (button pressed this tick).
    pub fn store(&mut self, percent: u8) {
        self.stored_percent = percent;
        self.active = true;
    }

    /// Drop the setpoint and return to neutral.
    pub fn clear(&mut self) {
        self.stored_percent = JOYSTICK_NEUTRAL_NOM_PERCENT;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replace a neutral-deadband reading with the stored setpoint.
    ///
    /// Any reading outside the deadband wins over the latch, so manual
    /// requests stay available while a setpoint is held.
    pub fn substitute(&self, percent: u8) -> u8 {
        if self.active && within_neutral_deadband(percent) {
            self.stored_percent
        } else {
            percent
        }
    }
}

impl Default for StoredJoystick {
    fn default() -> Self {
        StoredJoystick::new()
    }
}
