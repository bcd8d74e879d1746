//! Engine-speed guard: redline cutoff, low-RPM derate, ramp-up.
//!
//! The derate is an edge transition, not a continuous check: the commanded
//! value is scaled exactly once per falling crossing of the threshold, and
//! a rising crossing hands off to the ramp so the command climbs back to
//! full value instead of stepping.

use crate::ms_timer::Millis;
use crate::vehicle::{
    DERATE_PERCENT, DERATE_UNDER_RPM, JOYSTICK_NEUTRAL_NOM_PERCENT, MAX_RPM, RAMP_UP_DURATION_MS,
};

/// Low-RPM derate latch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DerateState {
    pub active: bool,
    pub since: Millis,
}

/// Post-derate ramp-up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RampState {
    pub active: bool,
    pub since: Millis,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RpmGuard {
    pub derate: DerateState,
    pub ramp: RampState,
}

impl RpmGuard {
    pub const fn new() -> Self {
        RpmGuard {
            derate: DerateState {
                active: false,
                since: Millis::new(0),
            },
            ramp: RampState {
                active: false,
                since: Millis::new(0),
            },
        }
    }

    /// Apply the redline cutoff and derate edge logic to the working value.
    ///
    /// At or above `MAX_RPM` the command is forced to neutral. A falling
    /// crossing of `DERATE_UNDER_RPM` scales the value by `DERATE_PERCENT`
    /// once; a rising crossing clears the derate and starts the ramp.
    pub fn limit(&mut self, rpm: u16, working_percent: u8, now: Millis) -> u8 {
        if rpm >= MAX_RPM {
            return JOYSTICK_NEUTRAL_NOM_PERCENT;
        }

        if rpm < DERATE_UNDER_RPM && !self.derate.active {
            self.derate.active = true;
            self.derate.since = now;
            return derate_scaled(working_percent);
        }

        if rpm >= DERATE_UNDER_RPM && self.derate.active {
            self.derate.active = false;
            self.ramp.active = true;
            self.ramp.since = now;
        }

        working_percent
    }

    /// Scale an above-neutral command linearly while the ramp is running.
    ///
    /// Suppressed while the clutch is engaged. Once the configured duration
    /// has elapsed the ramp deactivates and the full value passes through;
    /// a zero duration never enters the scaling branch.
    pub fn ramp(&mut self, working_percent: u8, clutch_engaged: bool, now: Millis) -> u8 {
        if clutch_engaged || !self.ramp.active || working_percent <= JOYSTICK_NEUTRAL_NOM_PERCENT {
            return working_percent;
        }

        let elapsed = now.duration_since(self.ramp.since);
        if elapsed < RAMP_UP_DURATION_MS {
            ((u32::from(working_percent) * elapsed) / RAMP_UP_DURATION_MS) as u8
        } else {
            self.ramp.active = false;
            working_percent
        }
    }

    pub fn reset(&mut self) {
        *self = RpmGuard::new();
    }
}

fn derate_scaled(percent: u8) -> u8 {
    ((u16::from(percent) * u16::from(DERATE_PERCENT)) / 100) as u8
}
