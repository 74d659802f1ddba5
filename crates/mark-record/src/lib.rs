//! Session recording for the Mark rover.
//!
//! Add [`MarkRecordPlugin`] and insert a [`Recorder`] resource to write one
//! CSV row per frame: held inputs by command code and every joint target.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use mark_record::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins((
//!     mark_core::MarkCorePlugin,
//!     mark_teleop::MarkTeleopPlugin,
//!     MarkRecordPlugin,
//! ));
//! app.insert_resource(Recorder::start("recordings").expect("recording dir"));
//! ```

pub mod plugin;
pub mod recorder;
pub mod types;

pub use plugin::MarkRecordPlugin;
pub use recorder::Recorder;
pub use types::TeleopSample;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::{MarkRecordPlugin, Recorder, TeleopSample};
}
