//! Teleop configuration types.
//!
//! [`TeleopConfig`] defines how each [`TeleopKey`] maps onto joint drive
//! increments: a [`DriveTable`] of signed effects plus the per-group
//! [`TeleopSpeeds`].

use std::collections::HashMap;

use bevy::prelude::*;
use mark_core::config::RigConfig;
use mark_core::types::JointRole;

use crate::keys::TeleopKey;

// ---------------------------------------------------------------------------
// SpeedGroup / TeleopSpeeds
// ---------------------------------------------------------------------------

/// Which speed setting scales an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedGroup {
    Driving,
    Camera,
    Gripper,
}

/// Per-tick increments for each [`SpeedGroup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleopSpeeds {
    pub driving: f32,
    pub camera: f32,
    pub gripper: f32,
}

impl Default for TeleopSpeeds {
    fn default() -> Self {
        Self {
            driving: 1.0,
            camera: 1.0,
            gripper: 1.0,
        }
    }
}

impl TeleopSpeeds {
    #[must_use]
    pub const fn speed(&self, group: SpeedGroup) -> f32 {
        match group {
            SpeedGroup::Driving => self.driving,
            SpeedGroup::Camera => self.camera,
            SpeedGroup::Gripper => self.gripper,
        }
    }
}

impl From<&RigConfig> for TeleopSpeeds {
    fn from(cfg: &RigConfig) -> Self {
        Self {
            driving: cfg.driving_speed,
            camera: cfg.camera_speed,
            gripper: cfg.gripper_speed,
        }
    }
}

// ---------------------------------------------------------------------------
// JointEffect / DriveTable
// ---------------------------------------------------------------------------

/// One signed increment applied to a joint while a key is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointEffect {
    pub role: JointRole,
    /// `1.0` adds the group speed, `-1.0` subtracts it.
    pub sign: f32,
    pub group: SpeedGroup,
}

impl JointEffect {
    #[must_use]
    pub const fn raise(role: JointRole, group: SpeedGroup) -> Self {
        Self {
            role,
            sign: 1.0,
            group,
        }
    }

    #[must_use]
    pub const fn lower(role: JointRole, group: SpeedGroup) -> Self {
        Self {
            role,
            sign: -1.0,
            group,
        }
    }

    /// Signed increment for one tick at the given speeds.
    #[must_use]
    pub const fn delta(&self, speeds: &TeleopSpeeds) -> f32 {
        self.sign * speeds.speed(self.group)
    }
}

/// Map from held input to the joint effects it produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriveTable {
    rows: HashMap<TeleopKey, Vec<JointEffect>>,
}

impl DriveTable {
    /// Empty table; every key is inert.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rover's standard layout.
    ///
    /// Turning drives a single wheel forward; there is no reverse-turn.
    #[must_use]
    pub fn mark_default() -> Self {
        use JointEffect as E;
        use JointRole::{CameraPan, CameraTilt, GripperLeft, GripperRight, LeftWheel, RightWheel};
        use SpeedGroup::{Camera, Driving, Gripper};

        Self::empty()
            .with_row(
                TeleopKey::Forward,
                vec![E::raise(LeftWheel, Driving), E::raise(RightWheel, Driving)],
            )
            .with_row(
                TeleopKey::Backward,
                vec![E::lower(LeftWheel, Driving), E::lower(RightWheel, Driving)],
            )
            .with_row(TeleopKey::TurnLeft, vec![E::raise(LeftWheel, Driving)])
            .with_row(TeleopKey::TurnRight, vec![E::raise(RightWheel, Driving)])
            .with_row(TeleopKey::TiltUp, vec![E::lower(CameraTilt, Camera)])
            .with_row(TeleopKey::TiltDown, vec![E::raise(CameraTilt, Camera)])
            .with_row(TeleopKey::PanLeft, vec![E::raise(CameraPan, Camera)])
            .with_row(TeleopKey::PanRight, vec![E::lower(CameraPan, Camera)])
            .with_row(
                TeleopKey::OpenGripper,
                vec![E::lower(GripperLeft, Gripper), E::lower(GripperRight, Gripper)],
            )
            .with_row(
                TeleopKey::CloseGripper,
                vec![E::raise(GripperLeft, Gripper), E::raise(GripperRight, Gripper)],
            )
    }

    /// Set the effects for a key, replacing any existing row.
    #[must_use]
    pub fn with_row(mut self, key: TeleopKey, effects: Vec<JointEffect>) -> Self {
        self.rows.insert(key, effects);
        self
    }

    /// Effects for a key (empty if unmapped).
    #[must_use]
    pub fn effects(&self, key: TeleopKey) -> &[JointEffect] {
        self.rows.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// TeleopConfig
// ---------------------------------------------------------------------------

/// Configuration resource for the drive mapper.
///
/// Initialized from [`RigConfig`] when one is present in the world, so
/// speeds loaded from TOML reach the mapper without extra wiring.
#[derive(Resource, Clone, Debug)]
pub struct TeleopConfig {
    pub table: DriveTable,
    pub speeds: TeleopSpeeds,
    /// Whether teleop is active (increments are applied).
    pub enabled: bool,
}

#[allow(clippy::new_without_default)]
impl TeleopConfig {
    /// Enabled config with the standard layout and unit speeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: DriveTable::mark_default(),
            speeds: TeleopSpeeds::default(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn from_rig_config(cfg: &RigConfig) -> Self {
        Self {
            table: DriveTable::mark_default(),
            speeds: TeleopSpeeds::from(cfg),
            enabled: cfg.teleop_enabled,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: DriveTable) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub const fn with_speeds(mut self, speeds: TeleopSpeeds) -> Self {
        self.speeds = speeds;
        self
    }

    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Signed `(role, delta)` pairs produced by one tick of `key`.
    pub fn deltas(&self, key: TeleopKey) -> impl Iterator<Item = (JointRole, f32)> + '_ {
        self.table
            .effects(key)
            .iter()
            .map(|effect| (effect.role, effect.delta(&self.speeds)))
    }
}

impl FromWorld for TeleopConfig {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<RigConfig>()
            .map_or_else(Self::new, Self::from_rig_config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
