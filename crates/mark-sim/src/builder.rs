//! Scene builder for constructing a fully wired rover [`App`].
//!
//! [`SceneBuilder`] spawns the rover base, its six joints, and both cameras,
//! then validates the joint and camera tables before handing back the app.
//!
//! # Example
//!
//! ```no_run
//! use mark_sim::SceneBuilder;
//!
//! let scene = SceneBuilder::new().build().expect("valid rig");
//! ```

use bevy::prelude::*;
use mark_core::config::RigConfig;
use mark_core::error::ConfigError;
use mark_core::types::{CameraSlot, JointDrive, JointRole, MarkRig, RigJoint};
use mark_viz::{CameraFeed, CameraRig, TopDownFollow};

use crate::MarkSimPlugin;

// ---------------------------------------------------------------------------
// SpawnedScene
// ---------------------------------------------------------------------------

/// Result of building a scene: the Bevy app plus entity handles.
pub struct SpawnedScene {
    /// The fully configured Bevy application.
    pub app: App,
    /// Rover body; the top-down camera follows it.
    pub base: Entity,
    /// Joint table, also inserted as a resource.
    pub rig: MarkRig,
    /// Camera table, also inserted as a resource.
    pub cameras: CameraRig,
}

impl SpawnedScene {
    /// Current drive target of a joint.
    #[must_use]
    pub fn target(&self, role: JointRole) -> Option<f32> {
        self.app
            .world()
            .get::<JointDrive>(self.rig.joint(role))
            .map(|drive| drive.target)
    }

    /// Whether the camera in `slot` is enabled.
    #[must_use]
    pub fn camera_enabled(&self, slot: CameraSlot) -> bool {
        self.app
            .world()
            .get::<CameraFeed>(self.cameras.entity(slot))
            .is_some_and(|feed| feed.enabled)
    }

    /// World position of the camera in `slot`.
    #[must_use]
    pub fn camera_position(&self, slot: CameraSlot) -> Option<Vec3> {
        self.app
            .world()
            .get::<Transform>(self.cameras.entity(slot))
            .map(|transform| transform.translation)
    }
}

// ---------------------------------------------------------------------------
// SceneBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a complete rover scene.
pub struct SceneBuilder {
    config: RigConfig,
    base_position: Vec3,
    follow_base: bool,
    keyboard: bool,
    logging: bool,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Create a new scene builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RigConfig::default(),
            base_position: Vec3::ZERO,
            follow_base: true,
            keyboard: true,
            logging: false,
        }
    }

    /// Set the rig configuration.
    #[must_use]
    pub fn with_config(mut self, config: RigConfig) -> Self {
        self.config = config;
        self
    }

    /// Initial position of the rover base.
    #[must_use]
    pub const fn with_base_position(mut self, position: Vec3) -> Self {
        self.base_position = position;
        self
    }

    /// Whether the top-down camera follows the base (default: true).
    #[must_use]
    pub const fn with_follow_base(mut self, follow: bool) -> Self {
        self.follow_base = follow;
        self
    }

    /// Whether to insert a bare `ButtonInput<KeyCode>` resource so keyboard
    /// systems run without a window (default: true).
    #[must_use]
    pub const fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Install Bevy's log subscriber (default: false).
    #[must_use]
    pub const fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Build the Bevy [`App`] with all plugins and spawned entities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the rig configuration fails
    /// validation.
    pub fn build(self) -> Result<SpawnedScene, ConfigError> {
        self.config.validate()?;

        let mut app = App::new();
        if self.logging {
            app.add_plugins(bevy::log::LogPlugin::default());
        }
        if self.keyboard {
            app.init_resource::<ButtonInput<KeyCode>>();
        }
        app.insert_resource(self.config.clone());
        app.add_plugins(MarkSimPlugin);

        // Finalize plugin setup before spawning entities.
        app.finish();
        app.cleanup();

        let world = app.world_mut();
        let base = world
            .spawn((Name::new("mark_base"), Transform::from_translation(self.base_position)))
            .id();

        let mut builder = MarkRig::builder();
        for role in JointRole::ALL {
            let joint = world
                .spawn((Name::new(role.name()), RigJoint(role), JointDrive::default()))
                .id();
            world.entity_mut(base).add_child(joint);
            builder = builder.with_joint(role, joint);
        }
        let rig = builder.build()?;

        let follow = if self.follow_base {
            TopDownFollow::new(base)
        } else {
            TopDownFollow::unassigned()
        };
        let top_down = world
            .spawn((
                Name::new("top_down_camera"),
                CameraFeed::new(CameraSlot::TopDown),
                follow,
                Transform::from_xyz(
                    self.base_position.x,
                    self.config.top_down_height,
                    self.base_position.z,
                ),
            ))
            .id();
        let mark = world
            .spawn((
                Name::new("mark_camera"),
                CameraFeed::new(CameraSlot::Mark),
                Transform::default(),
            ))
            .id();
        world
            .entity_mut(rig.joint(JointRole::CameraTilt))
            .add_child(mark);
        let cameras = CameraRig::new(Some(top_down), Some(mark))?;

        world.insert_resource(rig.clone());
        world.insert_resource(cameras);
        debug!("spawned rover scene with base {base}");

        Ok(SpawnedScene {
            app,
            base,
            rig,
            cameras,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
