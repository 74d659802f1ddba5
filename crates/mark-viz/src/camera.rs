//! Two-camera view switching.
//!
//! Exactly one [`CameraSlot`] is active at a time. Key "1" selects the
//! top-down camera and key "2" the rover-mounted camera; both are
//! edge-triggered.

use bevy::prelude::*;
use mark_core::error::ConfigError;
use mark_core::types::CameraSlot;

// ---------------------------------------------------------------------------
// Components and resources
// ---------------------------------------------------------------------------

/// Tags a camera entity with its slot and carries its enabled flag.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraFeed {
    pub slot: CameraSlot,
    pub enabled: bool,
}

impl CameraFeed {
    /// A feed whose enabled flag matches the initial active slot.
    #[must_use]
    pub fn new(slot: CameraSlot) -> Self {
        Self {
            slot,
            enabled: slot == CameraSlot::default(),
        }
    }
}

/// The currently active camera slot. Starts at [`CameraSlot::TopDown`].
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveCamera(pub CameraSlot);

/// Edge-triggered keys selecting each slot.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraSwitchKeys {
    pub top_down: KeyCode,
    pub mark: KeyCode,
}

impl Default for CameraSwitchKeys {
    fn default() -> Self {
        Self {
            top_down: KeyCode::Digit1,
            mark: KeyCode::Digit2,
        }
    }
}

/// The two camera entities of the rig.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraRig {
    top_down: Entity,
    mark: Entity,
}

impl CameraRig {
    /// Fails if either camera is unassigned.
    pub fn new(top_down: Option<Entity>, mark: Option<Entity>) -> Result<Self, ConfigError> {
        Ok(Self {
            top_down: top_down.ok_or(ConfigError::MissingCamera(CameraSlot::TopDown))?,
            mark: mark.ok_or(ConfigError::MissingCamera(CameraSlot::Mark))?,
        })
    }

    #[must_use]
    pub const fn entity(&self, slot: CameraSlot) -> Entity {
        match slot {
            CameraSlot::TopDown => self.top_down,
            CameraSlot::Mark => self.mark,
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Selects the active slot from this frame's key presses.
///
/// When both keys fire in the same frame the rover camera wins.
#[allow(clippy::needless_pass_by_value)]
pub fn switch_camera_system(
    keys: Res<ButtonInput<KeyCode>>,
    switch_keys: Res<CameraSwitchKeys>,
    mut active: ResMut<ActiveCamera>,
) {
    let mut requested = None;
    if keys.just_pressed(switch_keys.top_down) {
        requested = Some(CameraSlot::TopDown);
    }
    if keys.just_pressed(switch_keys.mark) {
        requested = Some(CameraSlot::Mark);
    }

    let Some(slot) = requested else {
        return;
    };
    if active.set_if_neq(ActiveCamera(slot)) {
        info!("switched to {slot} camera");
    }
}

/// Writes each feed's enabled flag from [`ActiveCamera`].
///
/// Only the rig's camera for the active slot is enabled; every other feed,
/// including any not registered in [`CameraRig`], is disabled. Entities that
/// also carry a Bevy [`Camera`] get `is_active` mirrored so only the active
/// feed renders. Does nothing until a rig is inserted.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_camera_feeds(
    active: Res<ActiveCamera>,
    rig: Option<Res<CameraRig>>,
    mut feeds: Query<(Entity, &mut CameraFeed, Option<&mut Camera>)>,
) {
    let Some(rig) = rig else {
        return;
    };
    let active_entity = rig.entity(active.0);

    for (entity, mut feed, camera) in &mut feeds {
        let enabled = entity == active_entity;
        if feed.enabled != enabled {
            feed.enabled = enabled;
        }
        if let Some(mut camera) = camera {
            camera.is_active = enabled;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
