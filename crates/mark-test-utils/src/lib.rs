//! Shared test fixtures and utilities for the Mark rover crates.
//!
//! Provides reusable helpers for building Bevy test apps, spawning rig
//! joints, and driving keyboard input frame by frame.

pub mod app;
pub mod input;
pub mod spawn;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{full_test_app, minimal_test_app};
pub use input::{hold_keys, release_keys, tap_key};
pub use spawn::{drive_target, spawn_joint, spawn_mark_rig};
