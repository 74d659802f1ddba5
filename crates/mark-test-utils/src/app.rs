//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;

/// Create a minimal test app with only the core plugin.
///
/// Provides `MarkSet` ordering and core resources but no teleop or camera
/// systems.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(mark_core::MarkCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a full-stack test app with core, teleop, and camera plugins.
///
/// Inserts a bare `ButtonInput<KeyCode>` without Bevy's input plugin, so
/// tests control key state directly (see [`crate::input`]).
pub fn full_test_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(mark_core::MarkCorePlugin);
    app.add_plugins(mark_teleop::MarkTeleopPlugin);
    app.add_plugins(mark_viz::MarkVizPlugin);
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
