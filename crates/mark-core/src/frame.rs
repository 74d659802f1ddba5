//! Frame phases and frame counting.
//!
//! One frame runs the ordinary update phase in `Update`
//! ([`MarkSet::Input`] → [`MarkSet::Drive`] → [`MarkSet::Camera`]) and then
//! the late-update phase in `PostUpdate` ([`MarkSet::Follow`]).

use bevy::prelude::*;

/// Ordered per-frame phases for rig systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkSet {
    /// Capture input from any source into buffers.
    Input,
    /// Apply buffered input to joint drive targets.
    Drive,
    /// Camera view switching.
    Camera,
    /// Late-update camera tracking. Runs in `PostUpdate`.
    Follow,
}

/// Number of frames the app has completed.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCount(pub u64);

impl FrameCount {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Advance [`FrameCount`] at the end of each frame.
pub fn count_frames(mut frames: ResMut<FrameCount>) {
    frames.0 = frames.0.wrapping_add(1);
}
