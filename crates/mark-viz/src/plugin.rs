//! The camera plugin.
//!
//! [`MarkVizPlugin`] adds the two-camera switcher to the `Update` phase and
//! the top-down follow camera to the late-update phase.

use bevy::prelude::*;
use mark_core::MarkSet;

use crate::camera::{self, ActiveCamera, CameraSwitchKeys};
use crate::follow;

/// Bevy plugin for the rover's camera views.
///
/// Adds:
/// - [`ActiveCamera`] and [`CameraSwitchKeys`] resources
/// - key "1"/"2" switching in [`MarkSet::Camera`] (when a
///   `ButtonInput<KeyCode>` resource exists)
/// - feed enable-flag sync in [`MarkSet::Camera`]
/// - top-down follow in [`MarkSet::Follow`] (`PostUpdate`)
///
/// Expects [`MarkCorePlugin`](mark_core::MarkCorePlugin) for set ordering.
pub struct MarkVizPlugin;

impl Plugin for MarkVizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveCamera>()
            .init_resource::<CameraSwitchKeys>()
            .add_systems(
                Update,
                (
                    camera::switch_camera_system.run_if(resource_exists::<ButtonInput<KeyCode>>),
                    camera::sync_camera_feeds,
                )
                    .chain()
                    .in_set(MarkSet::Camera),
            )
            .add_systems(
                PostUpdate,
                follow::follow_target_system.in_set(MarkSet::Follow),
            );
    }
}
