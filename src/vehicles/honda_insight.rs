//! Honda Insight (1st gen) vehicle configuration data
//!
//! **WARNING**
//!
//! The values listed here are carefully tested to ensure that the vehicle's
//! components are not actuated outside of the range of what they can handle.
//! By changing any of these values you risk attempting to actuate outside of
//! the vehicle's valid range. This can cause damage to the hardware and/or a
//! vehicle fault.
//!
//! It is NOT recommended to modify any of these values without expert
//! knowledge.

use crate::policies::ModePolicy;

// ****************************************************************************
// JOYSTICK COMMAND BANDS
// ****************************************************************************

/// Lowest joystick percentage treated as a valid command. Anything below is
/// collapsed to an idle command at the neutral nominal value. \[percent\]
pub const JOYSTICK_MIN_ALLOWED_PERCENT: u8 = 20;

/// Exclusive upper bound of the regen band / lower edge of the neutral
/// deadband. \[percent\]
pub const JOYSTICK_NEUTRAL_MIN_PERCENT: u8 = 45;

/// Nominal joystick center position. Used whenever a policy forces a
/// neutral command. \[percent\]
pub const JOYSTICK_NEUTRAL_NOM_PERCENT: u8 = 50;

/// Exclusive upper bound of the neutral deadband / lower edge of the assist
/// band. \[percent\]
pub const JOYSTICK_NEUTRAL_MAX_PERCENT: u8 = 55;

/// Exclusive upper bound of the assist band. Anything at or above is
/// collapsed to an idle command at the neutral nominal value. \[percent\]
pub const JOYSTICK_MAX_ALLOWED_PERCENT: u8 = 80;

// ****************************************************************************
// ENGINE SPEED GUARD
// ****************************************************************************

/// Engine speed at or above which assist is disabled entirely. \[RPM\]
pub const MAX_RPM: u16 = 5500;

/// Engine speed below which commanded power is derated once per crossing,
/// to avoid IMA fault conditions at low crank speed. \[RPM\]
pub const DERATE_UNDER_RPM: u16 = 2000;

/// Output scale applied on a falling crossing of `DERATE_UNDER_RPM`.
/// \[percent of commanded value\]
pub const DERATE_PERCENT: u8 = 75;

/// Time to ramp the commanded value linearly from zero back to full after
/// the derate condition clears. Zero disables ramp-up. \[ms\]
pub const RAMP_UP_DURATION_MS: u32 = 1000;

// ****************************************************************************
// PEDAL TIMING
// ****************************************************************************

/// Hold-off after clutch release before assist is allowed again, so a gear
/// change does not chatter the assist command. \[ms\]
pub const CLUTCH_DELAY_MS: u32 = 500;

/// Window after the latest key-on event in which an ECM prestart request is
/// passed through unmodified. The DC-DC converter must stay disabled this
/// long so the high-voltage capacitors can precharge through the
/// current-limiting resistor; forcing autostop earlier causes an
/// intermittent P1445. \[ms\]
pub const PRESTART_GRACE_AFTER_KEYON_MS: u32 = 3000;

// ****************************************************************************
// TOGGLE SWITCH BINDINGS
// ****************************************************************************

/// Policy bound to toggle position 0 (also the hidden fourth position).
pub const MODE0_POLICY: ModePolicy = ModePolicy::Oem;

/// Policy bound to toggle position 1.
pub const MODE1_POLICY: ModePolicy = ModePolicy::BlendedRpmGuarded;

/// Policy bound to toggle position 2.
pub const MODE2_POLICY: ModePolicy = ModePolicy::ManualIgnoreEcm;
