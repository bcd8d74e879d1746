//! Shared signal types for the ECM/MCM arbitration core.

/// State carried by the MA MODE signal pair.
///
/// The ECM reports its request with one of these states each tick, and the
/// arbitrated MCM command uses the same namespace. `Undefined` covers any
/// line state that decodes to none of the known values; it always takes the
/// fail-safe pass-through branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImaState {
    Idle,
    Assist,
    Regen,
    Prestart,
    Autostop,
    Start,
    Undefined,
}

impl ImaState {
    /// Whether the ECM is in a normal driving state (idle, assist, regen).
    ///
    /// The manual policies only substitute their own command while the ECM
    /// is in one of these states.
    pub fn is_drive(self) -> bool {
        matches!(self, ImaState::Idle | ImaState::Assist | ImaState::Regen)
    }
}

/// Who drives the brake lights.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BrakeLightMode {
    /// Stock behavior, lights follow the brake pedal switch only.
    Oem,
    /// Lights also driven by manual regen commands.
    Automatic,
    /// Lights report actual braking but are not driven by the active policy.
    MonitorOnly,
}

/// Position of the 3-position mode toggle switch.
///
/// `Undefined` is the hidden fourth state the switch can report between
/// detents; it maps to position 0's behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleState {
    Position0,
    Position1,
    Position2,
    Undefined,
}
