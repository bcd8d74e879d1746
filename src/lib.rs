//! Motor assist/regen signal arbitration between a vehicle's ECM and a
//! manual operator input.
//!
//! Each control tick the embedding firmware samples every input into an
//! [`InputSnapshot`], hands it to the [`ModeSelector`] along with the
//! 3-position toggle reading, and the selected mode policy emits exactly
//! one command to the [`McmOutput`] sink: either a pass-through of the
//! ECM's own request or an explicit (state, percent) pair.
//!
//! The core is single-threaded and total: no blocking, no panics,
//! out-of-range inputs collapse to a safe idle command, and unknown ECM
//! states take the fail-safe pass-through branch. Hardware concerns (ADC
//! scaling, switch debouncing, the ECM/MCM transport, timekeeping) live
//! outside this crate, behind the snapshot and sink seams.

#![cfg_attr(not(test), no_std)]

pub mod clutch;
pub mod command_band;
pub mod input;
pub mod joystick_latch;
pub mod mcm_output;
pub mod mode_selector;
pub mod ms_timer;
pub mod policies;
pub mod rpm_guard;
pub mod types;
pub mod vehicle;
pub mod vehicles;

pub use crate::input::InputSnapshot;
pub use crate::mcm_output::{McmOutput, OutputCommand, TickOutput};
pub use crate::mode_selector::ModeSelector;
pub use crate::ms_timer::Millis;
pub use crate::policies::{ArbitrationState, ModePolicy};
pub use crate::types::{BrakeLightMode, ImaState, ToggleState};
