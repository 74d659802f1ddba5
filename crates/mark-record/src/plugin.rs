//! [`MarkRecordPlugin`]: registers the per-frame sampling system.

use bevy::prelude::*;
use mark_core::MarkSet;
use mark_core::frame::FrameCount;
use mark_core::types::{JointDrive, JointRole, MarkRig};
use mark_teleop::TeleopCommander;

use crate::recorder::Recorder;
use crate::types::TeleopSample;

// ---------------------------------------------------------------------------
// MarkRecordPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that samples teleop input and joint targets every frame.
///
/// Sampling runs in `PostUpdate` after [`MarkSet::Follow`], only while a
/// [`Recorder`] resource exists. Add after
/// [`MarkCorePlugin`](mark_core::MarkCorePlugin) and
/// [`MarkTeleopPlugin`](mark_teleop::MarkTeleopPlugin).
pub struct MarkRecordPlugin;

impl Plugin for MarkRecordPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            record_sample_system
                .run_if(resource_exists::<Recorder>)
                .after(MarkSet::Follow),
        );
    }
}

/// Append this frame's [`TeleopSample`] to the open [`Recorder`].
///
/// Joints missing from the world are written as NaN. Frames before a
/// [`MarkRig`] exists are skipped.
#[allow(clippy::needless_pass_by_value)]
pub fn record_sample_system(
    frame: Res<FrameCount>,
    commander: Res<TeleopCommander>,
    rig: Option<Res<MarkRig>>,
    drives: Query<&JointDrive>,
    mut recorder: ResMut<Recorder>,
) {
    let Some(rig) = rig else {
        return;
    };

    let mut targets = [f32::NAN; JointRole::COUNT];
    for (role, entity) in rig.iter() {
        if let Ok(drive) = drives.get(entity) {
            targets[role.index()] = drive.target;
        }
    }

    let sample = TeleopSample::capture(frame.get(), &commander, targets);
    if let Err(e) = recorder.write_sample(&sample) {
        error!("failed to record frame {}: {e}", frame.get());
    }
}
