use std::fmt;

use bevy::prelude::{Component, Entity, Resource};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// JointRole
// ---------------------------------------------------------------------------

/// The six rotary joints of the rover that teleop can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointRole {
    LeftWheel,
    RightWheel,
    CameraTilt,
    CameraPan,
    GripperLeft,
    GripperRight,
}

impl JointRole {
    pub const COUNT: usize = 6;

    /// All roles, in rig order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LeftWheel,
        Self::RightWheel,
        Self::CameraTilt,
        Self::CameraPan,
        Self::GripperLeft,
        Self::GripperRight,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftWheel => "left_wheel",
            Self::RightWheel => "right_wheel",
            Self::CameraTilt => "camera_tilt",
            Self::CameraPan => "camera_pan",
            Self::GripperLeft => "gripper_left",
            Self::GripperRight => "gripper_right",
        }
    }

    /// Position of this role in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// JointDrive
// ---------------------------------------------------------------------------

/// Drive target of one rotary joint.
///
/// `target` is an accumulated angle that the physics layer servos toward.
/// It is never clamped here; joint limits belong to the drive controller.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct JointDrive {
    pub target: f32,
}

impl JointDrive {
    #[must_use]
    pub const fn new(target: f32) -> Self {
        Self { target }
    }
}

/// Tags a joint entity with the role it plays on the rig.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigJoint(pub JointRole);

// ---------------------------------------------------------------------------
// CameraSlot
// ---------------------------------------------------------------------------

/// Which of the two camera feeds is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSlot {
    /// Overhead chase camera.
    #[default]
    TopDown,
    /// Camera mounted on the rover's pan/tilt head.
    Mark,
}

impl CameraSlot {
    pub const ALL: [Self; 2] = [Self::TopDown, Self::Mark];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TopDown => "top_down",
            Self::Mark => "mark",
        }
    }
}

impl fmt::Display for CameraSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// MarkRig
// ---------------------------------------------------------------------------

/// Resource resolving each [`JointRole`] to its joint entity.
///
/// Only constructible through [`MarkRigBuilder`], which rejects a rig with
/// any role unassigned.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MarkRig {
    joints: [Entity; JointRole::COUNT],
}

impl MarkRig {
    #[must_use]
    pub const fn builder() -> MarkRigBuilder {
        MarkRigBuilder::new()
    }

    /// Entity driving the given joint.
    #[must_use]
    pub const fn joint(&self, role: JointRole) -> Entity {
        self.joints[role.index()]
    }

    /// Iterator over `(role, entity)` pairs in rig order.
    pub fn iter(&self) -> impl Iterator<Item = (JointRole, Entity)> + '_ {
        JointRole::ALL.into_iter().map(|role| (role, self.joint(role)))
    }
}

/// Collects joint entities and validates that every role is assigned.
#[derive(Debug, Clone, Default)]
pub struct MarkRigBuilder {
    joints: [Option<Entity>; JointRole::COUNT],
}

impl MarkRigBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            joints: [None; JointRole::COUNT],
        }
    }

    /// Assign the entity for a role, replacing any earlier assignment.
    #[must_use]
    pub fn with_joint(mut self, role: JointRole, entity: Entity) -> Self {
        self.joints[role.index()] = Some(entity);
        self
    }

    /// Finish the rig. Fails on the first role (in rig order) left unset.
    pub fn build(self) -> Result<MarkRig, ConfigError> {
        let mut joints = [Entity::PLACEHOLDER; JointRole::COUNT];
        for role in JointRole::ALL {
            joints[role.index()] = self.joints[role.index()]
                .ok_or(ConfigError::MissingJoint(role))?;
        }
        Ok(MarkRig { joints })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
