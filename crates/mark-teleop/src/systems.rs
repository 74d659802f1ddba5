//! Bevy systems for applying teleop input to joint drives.

use bevy::prelude::*;
use mark_core::types::{JointDrive, JointRole, MarkRig};

use crate::commander::TeleopCommander;
use crate::config::TeleopConfig;

// ---------------------------------------------------------------------------
// apply_teleop_commands
// ---------------------------------------------------------------------------

/// System that adds the increments of every held input to joint drive targets.
///
/// Deltas from all held inputs are summed per joint first, so simultaneous
/// inputs compose additively regardless of order. Targets are accumulated
/// without bounds. Joints no held input touches are not written.
///
/// Skips application when [`TeleopConfig::enabled`] is `false` or no
/// [`MarkRig`] has been inserted yet.
#[allow(clippy::needless_pass_by_value)]
pub fn apply_teleop_commands(
    config: Res<TeleopConfig>,
    commander: Res<TeleopCommander>,
    rig: Option<Res<MarkRig>>,
    mut drives: Query<&mut JointDrive>,
) {
    if !config.enabled || commander.held_count() == 0 {
        return;
    }
    let Some(rig) = rig else {
        return;
    };

    let mut deltas: [Option<f32>; JointRole::COUNT] = [None; JointRole::COUNT];
    for key in commander.iter() {
        for (role, delta) in config.deltas(key) {
            let slot = &mut deltas[role.index()];
            *slot = Some(slot.unwrap_or(0.0) + delta);
        }
    }

    for (role, entity) in rig.iter() {
        let Some(delta) = deltas[role.index()] else {
            continue;
        };
        if let Ok(mut drive) = drives.get_mut(entity) {
            drive.target += delta;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
