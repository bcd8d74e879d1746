//! Clutch debounce.
//!
//! Assist must drop out the moment the clutch pedal goes down and stay out
//! for a hold-off after release, so the command does not chatter during a
//! gear change. While the pedal reads pressed the release timestamp is
//! refreshed every tick; the hold-off is measured from the last tick the
//! pedal was seen down.

use crate::ms_timer::Millis;
use crate::vehicle::CLUTCH_DELAY_MS;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClutchDebounce {
    engaged: bool,
    released_at: Millis,
}

impl ClutchDebounce {
    pub const fn new() -> Self {
        ClutchDebounce {
            engaged: false,
            released_at: Millis::new(0),
        }
    }

    /// Feed this tick's pedal sample.
    pub fn update(&mut self, pedal_pressed: bool, now: Millis) {
        if pedal_pressed {
            self.engaged = true;
            self.released_at = now;
        } else if self.engaged && now.duration_since(self.released_at) > CLUTCH_DELAY_MS {
            self.engaged = false;
        }
    }

    /// Whether assist is still suppressed.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn reset(&mut self) {
        self.engaged = false;
        self.released_at = Millis::new(0);
    }
}

impl Default for ClutchDebounce {
    fn default() -> Self {
        ClutchDebounce::new()
    }
}
