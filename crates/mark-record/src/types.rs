//! Serializable rows written to a session's `data.csv`.
//!
//! One row per frame: the frame index, one 0/1 column per teleop input in
//! command-code order (`key_1` .. `key_10`), then one column per joint
//! target.

use mark_core::types::JointRole;
use mark_teleop::{TeleopCommander, TeleopKey};
use serde::Serialize;

/// Number of input columns in a sample.
pub const KEY_COLUMNS: usize = TeleopKey::ALL.len();

// ---------------------------------------------------------------------------
// TeleopSample
// ---------------------------------------------------------------------------

/// Input and joint-target snapshot for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeleopSample {
    /// Zero-based frame index.
    pub frame: u64,
    /// 1 if the input with command code `i + 1` was held, else 0.
    pub keys: [u8; KEY_COLUMNS],
    /// Joint drive targets in [`JointRole::ALL`] order.
    pub targets: [f32; JointRole::COUNT],
}

impl TeleopSample {
    /// Snapshot the commander's held inputs alongside `targets`.
    #[must_use]
    pub fn capture(
        frame: u64,
        commander: &TeleopCommander,
        targets: [f32; JointRole::COUNT],
    ) -> Self {
        let mut keys = [0; KEY_COLUMNS];
        for (slot, key) in keys.iter_mut().zip(TeleopKey::ALL) {
            *slot = u8::from(commander.is_held(key));
        }
        Self {
            frame,
            keys,
            targets,
        }
    }

    /// Column names matching the serialized field order.
    #[must_use]
    pub fn header() -> Vec<String> {
        std::iter::once("frame".to_owned())
            .chain(
                TeleopKey::ALL
                    .into_iter()
                    .map(|key| format!("key_{}", key.command_code())),
            )
            .chain(JointRole::ALL.into_iter().map(|role| role.name().to_owned()))
            .collect()
    }
}
