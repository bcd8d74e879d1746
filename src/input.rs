//! Per-tick hardware input snapshot.
//!
//! All inputs are sampled once, up front, before any policy branches. Two
//! checks of the "same" input within one tick must never observe different
//! hardware values, so the policies only ever see this struct.
//!
//! Raw ADC scaling and GPIO debouncing of the individual switches happen
//! outside the core; the embedding firmware fills this in each scan.

use crate::ms_timer::Millis;
use crate::types::ImaState;
use crate::vehicle::JOYSTICK_NEUTRAL_NOM_PERCENT;

/// One control tick's worth of sampled inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Operator joystick position, 0..=100.
    pub joystick_percent: u8,
    /// ECM-commanded power, 0..=100.
    pub ecm_command_percent: u8,
    /// ECM-reported MA MODE state.
    pub ecm_state: ImaState,
    /// Momentary button sampled pressed this tick.
    pub button_pressed: bool,
    /// Brake light switch is on.
    pub brake_on: bool,
    /// Clutch pedal sampled pressed this tick.
    pub clutch_pressed: bool,
    /// Latest engine speed. \[RPM\]
    pub engine_rpm: u16,
    /// Current time.
    pub now: Millis,
    /// Time of the most recent key-on event.
    pub latest_key_on: Millis,
}

impl Default for InputSnapshot {
    /// A quiescent tick: joystick centered, ECM idle, nothing pressed.
    fn default() -> Self {
        InputSnapshot {
            joystick_percent: JOYSTICK_NEUTRAL_NOM_PERCENT,
            ecm_command_percent: JOYSTICK_NEUTRAL_NOM_PERCENT,
            ecm_state: ImaState::Idle,
            button_pressed: false,
            brake_on: false,
            clutch_pressed: false,
            engine_rpm: 0,
            now: Millis::default(),
            latest_key_on: Millis::default(),
        }
    }
}
