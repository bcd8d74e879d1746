//! Mode policies.
//!
//! Each policy is one pure pass over the tick's [`InputSnapshot`] plus the
//! persistent [`ArbitrationState`], producing exactly one [`TickOutput`].
//! Which policy runs is a build-time binding on the toggle switch (see the
//! vehicle configuration); the mode selector owns the dispatch.

use log::debug;

use crate::clutch::ClutchDebounce;
use crate::command_band::{band_command, within_neutral_deadband};
use crate::input::InputSnapshot;
use crate::joystick_latch::StoredJoystick;
use crate::mcm_output::{OutputCommand, TickOutput};
use crate::rpm_guard::RpmGuard;
use crate::types::{BrakeLightMode, ImaState};
use crate::vehicle::{
    JOYSTICK_MAX_ALLOWED_PERCENT, JOYSTICK_NEUTRAL_MAX_PERCENT, JOYSTICK_NEUTRAL_MIN_PERCENT,
    JOYSTICK_NEUTRAL_NOM_PERCENT, PRESTART_GRACE_AFTER_KEYON_MS,
};

/// Persistent arbitration state, owned by the mode selector and mutated
/// only by the policies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArbitrationState {
    pub stored_joystick: StoredJoystick,
    pub clutch: ClutchDebounce,
    pub rpm_guard: RpmGuard,
}

impl ArbitrationState {
    pub const fn new() -> Self {
        ArbitrationState {
            stored_joystick: StoredJoystick::new(),
            clutch: ClutchDebounce::new(),
            rpm_guard: RpmGuard::new(),
        }
    }

    /// Back to power-on values.
    pub fn reset(&mut self) {
        self.stored_joystick.clear();
        self.clutch.reset();
        self.rpm_guard.reset();
    }
}

/// The closed set of selectable mode policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModePolicy {
    /// Forward the ECM unmodified; stock vehicle behavior.
    Oem,
    /// Joystick only; every ECM signal is ignored.
    ManualIgnoreEcm,
    /// Joystick with stored setpoint, honoring ECM auto start/stop.
    ManualAutoStartStop,
    /// Strongest of joystick and ECM request wins.
    BlendedMaxRequest,
    /// Blended, plus redline cutoff, low-RPM derate, and ramp-up.
    BlendedRpmGuarded,
    /// ECM in control, but its regen requests are discarded.
    AutoAssistEcmRegenRejected,
}

impl ModePolicy {
    /// Run one tick of this policy.
    pub fn run(self, state: &mut ArbitrationState, inputs: &InputSnapshot) -> TickOutput {
        match self {
            ModePolicy::Oem => oem(),
            ModePolicy::ManualIgnoreEcm => manual_ignore_ecm(inputs),
            ModePolicy::ManualAutoStartStop => manual_auto_start_stop(state, inputs),
            ModePolicy::BlendedMaxRequest => blended_max_request(state, inputs),
            ModePolicy::BlendedRpmGuarded => blended_rpm_guarded(state, inputs),
            ModePolicy::AutoAssistEcmRegenRejected => auto_assist_reject_ecm_regen(inputs),
        }
    }
}

fn oem() -> TickOutput {
    TickOutput {
        brake_lights: BrakeLightMode::Oem,
        command: OutputCommand::PassThrough,
    }
}

/// Joystick only. No persistent state, and deliberately no prestart branch:
/// with the ECM fully ignored there is no request to honor during
/// precharge.
fn manual_ignore_ecm(inputs: &InputSnapshot) -> TickOutput {
    TickOutput {
        brake_lights: BrakeLightMode::Automatic,
        command: band_command(inputs.joystick_percent),
    }
}

fn manual_auto_start_stop(state: &mut ArbitrationState, inputs: &InputSnapshot) -> TickOutput {
    let command = if inputs.ecm_state.is_drive() {
        let mut percent = inputs.joystick_percent;

        if inputs.button_pressed {
            state.stored_joystick.store(percent);
        }
        if inputs.brake_on {
            state.stored_joystick.clear();
        }
        percent = state.stored_joystick.substitute(percent);

        band_command(percent)
    } else {
        non_drive_command(state, inputs)
    };

    TickOutput {
        brake_lights: BrakeLightMode::Automatic,
        command,
    }
}

fn blended_max_request(state: &mut ArbitrationState, inputs: &InputSnapshot) -> TickOutput {
    let command = if inputs.ecm_state.is_drive() {
        // whichever axis asks for more assist wins
        let mut working = inputs.joystick_percent.max(inputs.ecm_command_percent);

        if inputs.button_pressed {
            state.stored_joystick.store(working);
        }
        if inputs.brake_on {
            state.stored_joystick.clear();
        }

        // manual neutral does not refuse regen while braking: honor the
        // ECM's request
        if within_neutral_deadband(working) && inputs.brake_on {
            working = inputs.ecm_command_percent;
        }

        // a held setpoint still wins over a neutral reading
        working = state.stored_joystick.substitute(working);

        band_command(working)
    } else {
        non_drive_command(state, inputs)
    };

    TickOutput {
        brake_lights: BrakeLightMode::MonitorOnly,
        command,
    }
}

fn blended_rpm_guarded(state: &mut ArbitrationState, inputs: &InputSnapshot) -> TickOutput {
    let command = if inputs.ecm_state.is_drive() {
        let mut working = inputs.joystick_percent.max(inputs.ecm_command_percent);

        state.clutch.update(inputs.clutch_pressed, inputs.now);
        if state.clutch.is_engaged() {
            working = JOYSTICK_NEUTRAL_NOM_PERCENT;
        }

        working = state.rpm_guard.limit(inputs.engine_rpm, working, inputs.now);
        working = state
            .rpm_guard
            .ramp(working, state.clutch.is_engaged(), inputs.now);

        if within_neutral_deadband(working) && inputs.brake_on {
            working = inputs.ecm_command_percent;
        }

        brake_priority_command(working, inputs.brake_on)
    } else {
        non_drive_command(state, inputs)
    };

    TickOutput {
        brake_lights: BrakeLightMode::MonitorOnly,
        command,
    }
}

/// ECM keeps control of assist and auto start/stop, but its regen requests
/// are replaced with an idle command.
fn auto_assist_reject_ecm_regen(inputs: &InputSnapshot) -> TickOutput {
    let command = if inputs.ecm_state == ImaState::Regen {
        OutputCommand::set(ImaState::Idle, JOYSTICK_NEUTRAL_NOM_PERCENT)
    } else {
        OutputCommand::PassThrough
    };

    TickOutput {
        brake_lights: BrakeLightMode::Oem,
        command,
    }
}

/// Final emission rule for the RPM-guarded policy.
///
/// Not the shared band ladder: an active brake forces a regen emission even
/// when the working value sits in the neutral band, and there is no
/// too-low collapse. Braking must always yield a regen command.
fn brake_priority_command(working_percent: u8, brake_on: bool) -> OutputCommand {
    if working_percent < JOYSTICK_NEUTRAL_MIN_PERCENT || brake_on {
        OutputCommand::set(ImaState::Regen, working_percent)
    } else if working_percent < JOYSTICK_NEUTRAL_MAX_PERCENT {
        OutputCommand::set(ImaState::Idle, working_percent)
    } else if working_percent < JOYSTICK_MAX_ALLOWED_PERCENT {
        OutputCommand::set(ImaState::Assist, working_percent)
    } else {
        OutputCommand::set(ImaState::Idle, JOYSTICK_NEUTRAL_NOM_PERCENT)
    }
}

/// Shared prestart/otherwise handling for the stateful policies.
///
/// Within the key-on grace window a prestart request passes through so the
/// DC-DC converter stays disabled while the high-voltage bus precharges;
/// afterwards it is converted to an autostop command. Autostop, start, and
/// undefined states always pass through so auto stop works properly. The
/// stored setpoint is cleared in every branch; clutch, derate, and ramp
/// state deliberately survive.
fn non_drive_command(state: &mut ArbitrationState, inputs: &InputSnapshot) -> OutputCommand {
    let command = if inputs.ecm_state == ImaState::Prestart {
        if inputs.now.duration_since(inputs.latest_key_on) < PRESTART_GRACE_AFTER_KEYON_MS {
            OutputCommand::PassThrough
        } else {
            debug!("prestart grace window elapsed, commanding autostop");
            OutputCommand::set(ImaState::Autostop, JOYSTICK_NEUTRAL_NOM_PERCENT)
        }
    } else {
        OutputCommand::PassThrough
    };

    state.stored_joystick.clear();
    command
}
