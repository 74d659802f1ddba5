//! Shared types, frame phases, configuration, and errors for the Mark rover rig.
//!
//! - [`types`]: joint roles, [`JointDrive`](types::JointDrive), camera slots,
//!   and the validated [`MarkRig`](types::MarkRig) joint table
//! - [`config`]: TOML-backed [`RigConfig`](config::RigConfig)
//! - [`frame`]: [`MarkSet`] ordering and [`FrameCount`](frame::FrameCount)
//! - [`error`]: configuration error taxonomy

pub mod config;
pub mod error;
pub mod frame;
pub mod types;

use bevy::prelude::*;
use bevy::transform::TransformSystem;

pub use frame::MarkSet;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// MarkCorePlugin
// ---------------------------------------------------------------------------

/// Configures [`MarkSet`] ordering and core resources.
///
/// The follow phase runs in `PostUpdate`, after every `Update` system has
/// moved its targets and before transform propagation.
///
/// Inserts a default [`RigConfig`](config::RigConfig) unless one is already
/// present.
pub struct MarkCorePlugin;

impl Plugin for MarkCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::RigConfig>()
            .init_resource::<frame::FrameCount>()
            .configure_sets(
                Update,
                (MarkSet::Input, MarkSet::Drive, MarkSet::Camera).chain(),
            )
            .configure_sets(
                PostUpdate,
                MarkSet::Follow.before(TransformSystem::TransformPropagate),
            )
            .add_systems(Last, frame::count_frames);
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::MarkCorePlugin;
    pub use crate::config::RigConfig;
    pub use crate::error::{ConfigError, MarkError, RecordError};
    pub use crate::frame::{FrameCount, MarkSet};
    pub use crate::types::{CameraSlot, JointDrive, JointRole, MarkRig, MarkRigBuilder, RigJoint};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(MarkCorePlugin);
        app.finish();
        app.cleanup();
        app.update();

        assert!(app.world().get_resource::<config::RigConfig>().is_some());
        assert_eq!(app.world().resource::<frame::FrameCount>().get(), 1);
    }

    #[test]
    fn plugin_keeps_existing_config() {
        let mut app = App::new();
        app.insert_resource(config::RigConfig {
            driving_speed: 4.0,
            ..config::RigConfig::default()
        });
        app.add_plugins(MarkCorePlugin);

        let cfg = app.world().resource::<config::RigConfig>();
        assert!((cfg.driving_speed - 4.0).abs() < f32::EPSILON);
    }
}
