//! Output seam toward the MCM and the brake lights.
//!
//! The physical signal transport is external; the core only decides what to
//! send. Exactly one MCM call is made per tick, preceded by exactly one
//! brake-light mode selection.

use crate::types::{BrakeLightMode, ImaState};

/// The arbitrated MCM command for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputCommand {
    /// Forward the ECM's own signals unmodified.
    PassThrough,
    /// Drive all MCM signals with the given state and power percentage.
    SetAllSignals { state: ImaState, percent: u8 },
}

impl OutputCommand {
    pub const fn set(state: ImaState, percent: u8) -> Self {
        OutputCommand::SetAllSignals { state, percent }
    }
}

/// Everything a policy decides in one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickOutput {
    pub brake_lights: BrakeLightMode,
    pub command: OutputCommand,
}

impl TickOutput {
    /// Apply this tick's decision to the sink, brake lights first.
    ///
    /// The commanded percentage is clamped to the wire range on the way
    /// out; the band ladders keep in-contract inputs inside it already.
    pub fn apply<S: McmOutput>(&self, sink: &mut S) {
        sink.set_brake_light_mode(self.brake_lights);
        match self.command {
            OutputCommand::PassThrough => sink.pass_through_ecm_signals(),
            OutputCommand::SetAllSignals { state, percent } => {
                sink.set_all_signals(state, num::clamp(percent, 0, 100));
            }
        }
    }
}

/// Sink for the arbitrated signals.
///
/// `set_all_signals` and `pass_through_ecm_signals` are mutually exclusive
/// within a tick; the mode selector guarantees exactly one of them is
/// called, after `set_brake_light_mode`.
pub trait McmOutput {
    fn set_brake_light_mode(&mut self, mode: BrakeLightMode);
    fn set_all_signals(&mut self, state: ImaState, percent: u8);
    fn pass_through_ecm_signals(&mut self);
}
