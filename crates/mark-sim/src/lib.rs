//! Top-level Bevy plugin integrating the Mark rover modules.
//!
//! [`MarkSimPlugin`] is a convenience meta-plugin that adds the core, teleop,
//! camera and recording plugins in one call, plus session statistics tracking.
//! [`SceneBuilder`] spawns a validated rover scene on top of it.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use mark_sim::MarkSimPlugin;
//!
//! App::new()
//!     .add_plugins(MarkSimPlugin)
//!     .run();
//! ```

pub mod builder;
pub mod stats;

#[cfg(test)]
mod headless;

use bevy::prelude::*;
use mark_core::MarkSet;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use builder::{SceneBuilder, SpawnedScene};
pub use stats::SessionStats;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// MarkSimPlugin
// ---------------------------------------------------------------------------

/// Meta-plugin that adds the full rover stack.
///
/// Includes:
/// - [`MarkCorePlugin`](mark_core::MarkCorePlugin): frame phases and `RigConfig`
/// - [`MarkTeleopPlugin`](mark_teleop::MarkTeleopPlugin): keyboard teleop and joint drives
/// - [`MarkVizPlugin`](mark_viz::MarkVizPlugin): camera switching and follow
/// - [`MarkRecordPlugin`](mark_record::MarkRecordPlugin): CSV sampling while a
///   [`Recorder`](mark_record::Recorder) resource exists
/// - [`SessionStats`] resource and tracking system
pub struct MarkSimPlugin;

impl Plugin for MarkSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(mark_core::MarkCorePlugin)
            .add_plugins(mark_teleop::MarkTeleopPlugin)
            .add_plugins(mark_viz::MarkVizPlugin)
            .add_plugins(mark_record::MarkRecordPlugin)
            .init_resource::<SessionStats>()
            .add_systems(
                Update,
                stats::session_stats_system.after(MarkSet::Camera),
            );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
