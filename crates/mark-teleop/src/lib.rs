//! Keyboard and remote teleoperation of the Mark rover's joint drives.
//!
//! This crate provides input-source-agnostic teleop infrastructure:
//!
//! - [`TeleopKey`]: logical inputs (forward, tilt-up, open-gripper, ...)
//!   with the remote controller's command codes
//! - [`TeleopCommander`]: resource holding which inputs are held, written by
//!   any source
//! - [`TeleopConfig`]: drive table and per-group speeds
//! - [`KeyboardTeleopMap`]: W/A/S/D, arrows, and O/P bindings
//! - [`MarkTeleopPlugin`]: Bevy plugin that captures keyboard input and
//!   applies held inputs to [`JointDrive`](mark_core::types::JointDrive)
//!   targets each frame
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use mark_teleop::prelude::*;
//!
//! App::new()
//!     .add_plugins(mark_core::MarkCorePlugin)
//!     .add_plugins(MarkTeleopPlugin)
//!     .run();
//! ```

pub mod commander;
pub mod config;
pub mod input;
pub mod keys;
pub mod systems;

use bevy::prelude::*;
use mark_core::MarkSet;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use commander::TeleopCommander;
pub use config::{DriveTable, JointEffect, SpeedGroup, TeleopConfig, TeleopSpeeds};
pub use input::KeyboardTeleopMap;
pub use keys::TeleopKey;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// MarkTeleopPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that turns held inputs into joint drive increments.
///
/// Keyboard capture runs in [`MarkSet::Input`] when a
/// `ButtonInput<KeyCode>` resource exists; application runs in
/// [`MarkSet::Drive`]. Add after [`MarkCorePlugin`](mark_core::MarkCorePlugin)
/// so [`TeleopConfig`] picks up the loaded
/// [`RigConfig`](mark_core::config::RigConfig).
pub struct MarkTeleopPlugin;

impl Plugin for MarkTeleopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TeleopCommander>()
            .init_resource::<TeleopConfig>()
            .init_resource::<KeyboardTeleopMap>()
            .add_systems(
                Update,
                (
                    input::keyboard_teleop_system
                        .run_if(resource_exists::<ButtonInput<KeyCode>>)
                        .in_set(MarkSet::Input),
                    systems::apply_teleop_commands.in_set(MarkSet::Drive),
                ),
            );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DriveTable, KeyboardTeleopMap, MarkTeleopPlugin, TeleopCommander, TeleopConfig, TeleopKey,
        TeleopSpeeds,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
