//! Entity spawn helpers for tests.

use bevy::prelude::*;
use mark_core::types::{JointDrive, JointRole, MarkRig, RigJoint};

/// Spawn a single joint entity for `role` with the given drive target.
pub fn spawn_joint(world: &mut World, role: JointRole, target: f32) -> Entity {
    world
        .spawn((RigJoint(role), JointDrive::new(target)))
        .id()
}

/// Spawn all six rig joints at target 0 and insert the resulting
/// [`MarkRig`] resource.
pub fn spawn_mark_rig(world: &mut World) -> MarkRig {
    let rig = JointRole::ALL
        .into_iter()
        .fold(MarkRig::builder(), |builder, role| {
            let entity = spawn_joint(world, role, 0.0);
            builder.with_joint(role, entity)
        })
        .build()
        .expect("every role is assigned");
    world.insert_resource(rig.clone());
    rig
}

/// Current drive target of a rig joint.
pub fn drive_target(world: &World, rig: &MarkRig, role: JointRole) -> f32 {
    world
        .get::<JointDrive>(rig.joint(role))
        .map_or(f32::NAN, |drive| drive.target)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
