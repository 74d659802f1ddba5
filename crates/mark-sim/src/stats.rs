//! Teleop session statistics.
//!
//! [`SessionStats`] records how long each input was held and how often the
//! camera view changed.

use std::collections::BTreeMap;

use bevy::prelude::*;
use mark_core::types::CameraSlot;
use mark_teleop::{TeleopCommander, TeleopConfig, TeleopKey};
use mark_viz::ActiveCamera;

// ---------------------------------------------------------------------------
// SessionStats
// ---------------------------------------------------------------------------

/// Bevy resource that tracks cumulative teleop activity.
#[derive(Resource, Clone, Debug, Default)]
pub struct SessionStats {
    /// Frames in which at least one input drove the rig.
    pub frames_driven: u64,
    /// Frames each input was held while teleop was enabled.
    pub held_frames: BTreeMap<TeleopKey, u64>,
    /// Number of camera view changes.
    pub camera_switches: u32,
    /// Slot seen last frame (for edge detection).
    last_slot: Option<CameraSlot>,
}

impl SessionStats {
    /// Frames `key` was held.
    #[must_use]
    pub fn held(&self, key: TeleopKey) -> u64 {
        self.held_frames.get(&key).copied().unwrap_or(0)
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// System that records held inputs and camera view changes.
#[allow(clippy::needless_pass_by_value)]
pub fn session_stats_system(
    commander: Res<TeleopCommander>,
    config: Res<TeleopConfig>,
    active: Res<ActiveCamera>,
    mut stats: ResMut<SessionStats>,
) {
    if config.enabled && commander.held_count() > 0 {
        stats.frames_driven += 1;
        for key in commander.iter() {
            *stats.held_frames.entry(key).or_insert(0) += 1;
        }
    }

    if stats.last_slot.is_some_and(|last| last != active.0) {
        stats.camera_switches += 1;
    }
    stats.last_slot = Some(active.0);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
