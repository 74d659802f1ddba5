//! Logical teleop inputs.
//!
//! [`TeleopKey`] names what an input does rather than which physical key
//! produced it, so keyboards, scripted replays, and remote controllers all
//! feed the same mapper.

use std::fmt;

/// A held teleop input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeleopKey {
    Forward,
    TurnLeft,
    Backward,
    TurnRight,
    TiltUp,
    TiltDown,
    PanLeft,
    PanRight,
    OpenGripper,
    CloseGripper,
}

impl TeleopKey {
    /// All inputs, in command-code order.
    pub const ALL: [Self; 10] = [
        Self::Forward,
        Self::TurnLeft,
        Self::Backward,
        Self::TurnRight,
        Self::TiltUp,
        Self::TiltDown,
        Self::PanLeft,
        Self::PanRight,
        Self::OpenGripper,
        Self::CloseGripper,
    ];

    /// Wire code used by the remote keyboard controller (1-based).
    ///
    /// W=1, A=2, S=3, D=4, Up=5, Down=6, Left=7, Right=8, O=9, P=10.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn command_code(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`command_code`](Self::command_code).
    #[must_use]
    pub fn from_command_code(code: u8) -> Option<Self> {
        let index = usize::from(code.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::TurnLeft => "turn-left",
            Self::Backward => "backward",
            Self::TurnRight => "turn-right",
            Self::TiltUp => "tilt-up",
            Self::TiltDown => "tilt-down",
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::OpenGripper => "open-gripper",
            Self::CloseGripper => "close-gripper",
        }
    }
}

impl fmt::Display for TeleopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_codes_match_controller_layout() {
        assert_eq!(TeleopKey::Forward.command_code(), 1);
        assert_eq!(TeleopKey::TurnLeft.command_code(), 2);
        assert_eq!(TeleopKey::Backward.command_code(), 3);
        assert_eq!(TeleopKey::TurnRight.command_code(), 4);
        assert_eq!(TeleopKey::TiltUp.command_code(), 5);
        assert_eq!(TeleopKey::TiltDown.command_code(), 6);
        assert_eq!(TeleopKey::PanLeft.command_code(), 7);
        assert_eq!(TeleopKey::PanRight.command_code(), 8);
        assert_eq!(TeleopKey::OpenGripper.command_code(), 9);
        assert_eq!(TeleopKey::CloseGripper.command_code(), 10);
    }

    #[test]
    fn command_codes_are_bijective() {
        for key in TeleopKey::ALL {
            assert_eq!(TeleopKey::from_command_code(key.command_code()), Some(key));
        }
    }

    #[test]
    fn unknown_command_codes_rejected() {
        assert_eq!(TeleopKey::from_command_code(0), None);
        assert_eq!(TeleopKey::from_command_code(11), None);
        assert_eq!(TeleopKey::from_command_code(u8::MAX), None);
    }
}
