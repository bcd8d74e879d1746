//! Toggle-switch dispatch and arbitration state lifecycle.
//!
//! One pass per control tick: read the toggle, run the bound policy over
//! the input snapshot, apply the result to the sink. The selector owns the
//! persistent arbitration state and resets it whenever the switch moves,
//! so a stale setpoint or derate latch never leaks into a freshly selected
//! policy.

use log::info;

use crate::input::InputSnapshot;
use crate::mcm_output::{McmOutput, TickOutput};
use crate::policies::{ArbitrationState, ModePolicy};
use crate::types::ToggleState;
use crate::vehicle::{MODE0_POLICY, MODE1_POLICY, MODE2_POLICY};

pub struct ModeSelector {
    bindings: [ModePolicy; 3],
    previous_toggle: Option<ToggleState>,
    state: ArbitrationState,
}

impl ModeSelector {
    /// Selector with the vehicle's build-time policy bindings.
    pub const fn new() -> Self {
        ModeSelector::with_bindings([MODE0_POLICY, MODE1_POLICY, MODE2_POLICY])
    }

    /// Selector with explicit bindings for positions 0/1/2.
    pub const fn with_bindings(bindings: [ModePolicy; 3]) -> Self {
        ModeSelector {
            bindings,
            previous_toggle: None,
            state: ArbitrationState::new(),
        }
    }

    /// Policy bound to a toggle position. The hidden fourth position maps
    /// to position 0's policy.
    pub fn policy_for(&self, toggle: ToggleState) -> ModePolicy {
        match toggle {
            ToggleState::Position0 | ToggleState::Undefined => self.bindings[0],
            ToggleState::Position1 => self.bindings[1],
            ToggleState::Position2 => self.bindings[2],
        }
    }

    /// Run one control tick: exactly one policy, exactly one sink command.
    ///
    /// Returns the decision that was applied, mostly for inspection.
    pub fn run_tick<S: McmOutput>(
        &mut self,
        toggle: ToggleState,
        inputs: &InputSnapshot,
        sink: &mut S,
    ) -> TickOutput {
        if self.previous_toggle != Some(toggle) {
            if self.previous_toggle.is_some() {
                info!("mode toggle moved to {toggle:?}, clearing arbitration state");
            }
            self.state.reset();
        }
        self.previous_toggle = Some(toggle);

        let output = self.policy_for(toggle).run(&mut self.state, inputs);
        output.apply(sink);
        output
    }

    pub fn state(&self) -> &ArbitrationState {
        &self.state
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        ModeSelector::new()
    }
}
