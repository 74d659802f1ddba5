//! Frame-by-frame keyboard drivers.
//!
//! Test apps have no input plugin clearing edge state, so these helpers call
//! `clear` after each frame themselves.

use bevy::prelude::*;

/// Press `keys`, run one frame, and leave them held.
pub fn hold_keys(app: &mut App, keys: &[KeyCode]) {
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        for &key in keys {
            input.press(key);
        }
    }
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

/// Release `keys` and run one frame.
pub fn release_keys(app: &mut App, keys: &[KeyCode]) {
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        for &key in keys {
            input.release(key);
        }
    }
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

/// Press and release `key` within a single frame.
pub fn tap_key(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}
