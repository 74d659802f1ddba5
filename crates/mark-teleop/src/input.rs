//! Keyboard-to-teleop input mapping.
//!
//! Maps held keyboard keys to [`TeleopKey`]s in the [`TeleopCommander`] so
//! that holding a key drives joints.

use bevy::prelude::*;

use crate::commander::TeleopCommander;
use crate::keys::TeleopKey;

/// A single key-to-input binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardBinding {
    pub key: KeyCode,
    pub input: TeleopKey,
}

/// Resource mapping keyboard keys to teleop inputs.
#[derive(Resource, Clone, Debug)]
pub struct KeyboardTeleopMap {
    pub bindings: Vec<KeyboardBinding>,
}

impl Default for KeyboardTeleopMap {
    fn default() -> Self {
        Self::mark_default()
    }
}

impl KeyboardTeleopMap {
    /// W/S drive, A/D turn, arrows tilt and pan, O/P open and close.
    #[must_use]
    pub fn mark_default() -> Self {
        let pairs = [
            (KeyCode::KeyW, TeleopKey::Forward),
            (KeyCode::KeyA, TeleopKey::TurnLeft),
            (KeyCode::KeyS, TeleopKey::Backward),
            (KeyCode::KeyD, TeleopKey::TurnRight),
            (KeyCode::ArrowUp, TeleopKey::TiltUp),
            (KeyCode::ArrowDown, TeleopKey::TiltDown),
            (KeyCode::ArrowLeft, TeleopKey::PanLeft),
            (KeyCode::ArrowRight, TeleopKey::PanRight),
            (KeyCode::KeyO, TeleopKey::OpenGripper),
            (KeyCode::KeyP, TeleopKey::CloseGripper),
        ];

        Self {
            bindings: pairs
                .into_iter()
                .map(|(key, input)| KeyboardBinding { key, input })
                .collect(),
        }
    }

    /// Keyboard key bound to an input, if any.
    #[must_use]
    pub fn key_for(&self, input: TeleopKey) -> Option<KeyCode> {
        self.bindings
            .iter()
            .find(|b| b.input == input)
            .map(|b| b.key)
    }
}

/// System that writes the keyboard's held inputs into [`TeleopCommander`].
///
/// Reads the level state of every bound key each frame, so an input is held
/// exactly while its key is down. Inputs held by other sources are left
/// alone.
#[allow(clippy::needless_pass_by_value)]
pub fn keyboard_teleop_system(
    keys: Res<ButtonInput<KeyCode>>,
    map: Res<KeyboardTeleopMap>,
    mut commander: ResMut<TeleopCommander>,
) {
    commander.set_keyboard_held(
        map.bindings
            .iter()
            .filter(|binding| keys.pressed(binding.key))
            .map(|binding| binding.input),
    );
}
