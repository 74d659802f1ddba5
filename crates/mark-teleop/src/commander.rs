//! Teleop input buffer.
//!
//! [`TeleopCommander`] is a Bevy resource that records which logical inputs
//! are currently held. The keyboard and remote sources are kept apart and an
//! input counts as held while either source holds it. The drive system reads
//! it each frame and applies the mapped increments to joint drives.

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::keys::TeleopKey;

// ---------------------------------------------------------------------------
// TeleopCommander
// ---------------------------------------------------------------------------

/// Resource holding the set of held [`TeleopKey`]s.
///
/// Remote controller feeds and other external code write here using
/// [`set`](Self::set) or [`apply_key_states`](Self::apply_key_states); that
/// state persists across frames until overwritten. The keyboard system
/// replaces its own set every frame through
/// [`set_keyboard_held`](Self::set_keyboard_held). Neither source can
/// release an input the other one holds.
///
/// # Example
///
/// ```
/// use mark_teleop::{TeleopCommander, TeleopKey};
///
/// let mut commander = TeleopCommander::new();
/// commander.set(TeleopKey::Forward, true);
///
/// assert!(commander.is_held(TeleopKey::Forward));
/// assert!(!commander.is_held(TeleopKey::Backward));
/// ```
#[derive(Resource, Clone, Debug, Default)]
pub struct TeleopCommander {
    remote: BTreeSet<TeleopKey>,
    keyboard: BTreeSet<TeleopKey>,
}

impl TeleopCommander {
    /// Create a commander with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an input as held or released by the remote source.
    pub fn set(&mut self, key: TeleopKey, held: bool) {
        if held {
            self.remote.insert(key);
        } else {
            self.remote.remove(&key);
        }
    }

    /// Replace the keyboard's held inputs with `keys`.
    pub fn set_keyboard_held(&mut self, keys: impl IntoIterator<Item = TeleopKey>) {
        self.keyboard.clear();
        self.keyboard.extend(keys);
    }

    /// Whether either source holds the input.
    #[must_use]
    pub fn is_held(&self, key: TeleopKey) -> bool {
        self.remote.contains(&key) || self.keyboard.contains(&key)
    }

    /// Release every input from both sources.
    pub fn clear(&mut self) {
        self.remote.clear();
        self.keyboard.clear();
    }

    /// Number of held inputs.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.iter().count()
    }

    /// Iterator over held inputs, in command-code order.
    pub fn iter(&self) -> impl Iterator<Item = TeleopKey> + '_ {
        self.remote.union(&self.keyboard).copied()
    }

    /// Apply a remote controller feed of `(command_code, held)` pairs.
    ///
    /// Unknown codes are skipped. Returns the number of pairs applied.
    pub fn apply_key_states(&mut self, states: impl IntoIterator<Item = (u8, bool)>) -> usize {
        let mut applied = 0;
        for (code, held) in states {
            if let Some(key) = TeleopKey::from_command_code(code) {
                self.set(key, held);
                applied += 1;
            } else {
                debug!("ignoring unknown teleop command code {code}");
            }
        }
        applied
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
