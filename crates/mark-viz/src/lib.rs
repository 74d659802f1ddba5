//! Camera views for the Mark rover.
//!
//! `mark-viz` provides:
//! - A two-camera switcher ([`ActiveCamera`], [`CameraFeed`]) driven by
//!   keys "1" and "2"
//! - A top-down chase camera ([`TopDownFollow`]) that tracks a target's
//!   horizontal position at a fixed altitude
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use mark_viz::MarkVizPlugin;
//!
//! App::new()
//!     .add_plugins(mark_core::MarkCorePlugin)
//!     .add_plugins(MarkVizPlugin)
//!     .run();
//! ```

pub mod camera;
pub mod follow;
pub mod plugin;

pub use camera::{ActiveCamera, CameraFeed, CameraRig, CameraSwitchKeys};
pub use follow::TopDownFollow;
pub use plugin::MarkVizPlugin;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
