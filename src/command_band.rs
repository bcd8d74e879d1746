//! Command percentage bands.
//!
//! Every percentage falls in exactly one of five ordered bands; thresholds
//! are exclusive upper bounds of the band below them, so a value exactly on
//! a threshold belongs to the higher band. The same ladder appears in every
//! manual policy, so it lives here once.

use crate::mcm_output::OutputCommand;
use crate::types::ImaState;
use crate::vehicle::{
    JOYSTICK_MAX_ALLOWED_PERCENT, JOYSTICK_MIN_ALLOWED_PERCENT, JOYSTICK_NEUTRAL_MAX_PERCENT,
    JOYSTICK_NEUTRAL_MIN_PERCENT, JOYSTICK_NEUTRAL_NOM_PERCENT,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandBand {
    /// Below the minimum allowed command; treated as a broken signal.
    TooLow,
    Regen,
    Neutral,
    Assist,
    /// At or above the maximum allowed command; treated as a broken signal.
    TooHigh,
}

/// Classify a command percentage into its band. Total over all of `u8`.
pub fn classify(percent: u8) -> CommandBand {
    if percent < JOYSTICK_MIN_ALLOWED_PERCENT {
        CommandBand::TooLow
    } else if percent < JOYSTICK_NEUTRAL_MIN_PERCENT {
        CommandBand::Regen
    } else if percent < JOYSTICK_NEUTRAL_MAX_PERCENT {
        CommandBand::Neutral
    } else if percent < JOYSTICK_MAX_ALLOWED_PERCENT {
        CommandBand::Assist
    } else {
        CommandBand::TooHigh
    }
}

/// Map a command percentage to the MCM command its band calls for.
///
/// The too-low and too-high bands collapse to a safe idle command at the
/// neutral nominal value instead of signaling an error.
pub fn band_command(percent: u8) -> OutputCommand {
    match classify(percent) {
        CommandBand::TooLow | CommandBand::TooHigh => {
            OutputCommand::set(ImaState::Idle, JOYSTICK_NEUTRAL_NOM_PERCENT)
        }
        CommandBand::Regen => OutputCommand::set(ImaState::Regen, percent),
        CommandBand::Neutral => OutputCommand::set(ImaState::Idle, percent),
        CommandBand::Assist => OutputCommand::set(ImaState::Assist, percent),
    }
}

/// Whether a percentage sits strictly inside the neutral deadband.
///
/// Deliberately narrower than the `Neutral` band: the latch substitution
/// and brake-regen override both exclude the exact band edges.
pub fn within_neutral_deadband(percent: u8) -> bool {
    percent > JOYSTICK_NEUTRAL_MIN_PERCENT && percent < JOYSTICK_NEUTRAL_MAX_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_full_range() {
        let mut previous = classify(0);
        let mut transitions = 0;
        for p in 0..=u8::MAX {
            let band = classify(p);
            if band != previous {
                transitions += 1;
                previous = band;
            }
        }
        // four threshold crossings, five bands, no gaps
        assert_eq!(transitions, 4);
        assert_eq!(classify(0), CommandBand::TooLow);
        assert_eq!(classify(u8::MAX), CommandBand::TooHigh);
    }

    #[test]
    fn threshold_values_belong_to_the_higher_band() {
        assert_eq!(classify(JOYSTICK_MIN_ALLOWED_PERCENT), CommandBand::Regen);
        assert_eq!(classify(JOYSTICK_NEUTRAL_MIN_PERCENT), CommandBand::Neutral);
        assert_eq!(classify(JOYSTICK_NEUTRAL_MAX_PERCENT), CommandBand::Assist);
        assert_eq!(classify(JOYSTICK_MAX_ALLOWED_PERCENT), CommandBand::TooHigh);
    }

    #[test]
    fn band_commands_follow_the_ladder() {
        assert_eq!(
            band_command(5),
            OutputCommand::set(ImaState::Idle, JOYSTICK_NEUTRAL_NOM_PERCENT)
        );
        assert_eq!(band_command(30), OutputCommand::set(ImaState::Regen, 30));
        assert_eq!(band_command(50), OutputCommand::set(ImaState::Idle, 50));
        assert_eq!(band_command(70), OutputCommand::set(ImaState::Assist, 70));
        assert_eq!(
            band_command(95),
            OutputCommand::set(ImaState::Idle, JOYSTICK_NEUTRAL_NOM_PERCENT)
        );
    }

    #[test]
    fn neutral_deadband_excludes_edges() {
        assert!(!within_neutral_deadband(JOYSTICK_NEUTRAL_MIN_PERCENT));
        assert!(within_neutral_deadband(JOYSTICK_NEUTRAL_NOM_PERCENT));
        assert!(!within_neutral_deadband(JOYSTICK_NEUTRAL_MAX_PERCENT));
    }
}
