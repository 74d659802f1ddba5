//! Top-down chase camera.

use bevy::prelude::*;

/// Keeps a camera above a target at a fixed altitude.
///
/// Each late-update the camera takes the target's X and Z and keeps its own
/// Y. An unassigned or despawned target leaves the camera where it is.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopDownFollow {
    pub target: Option<Entity>,
}

impl TopDownFollow {
    #[must_use]
    pub const fn new(target: Entity) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// A follower with no target; inert until one is assigned.
    #[must_use]
    pub const fn unassigned() -> Self {
        Self { target: None }
    }
}

/// Copies each follower's target X/Z onto the follower, preserving its Y.
pub fn follow_target_system(
    mut followers: Query<(&TopDownFollow, &mut Transform)>,
    targets: Query<&Transform, Without<TopDownFollow>>,
) {
    for (follow, mut transform) in &mut followers {
        let Some(target) = follow.target else {
            continue;
        };
        let Ok(target) = targets.get(target) else {
            continue;
        };

        let height = transform.translation.y;
        transform.translation = Vec3::new(target.translation.x, height, target.translation.z);
    }
}
