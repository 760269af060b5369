//! Elastic2D - a fixed-capacity 2D elastic-collision particle sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity store, collisions, interaction)
//! - `config`: Host-settable simulation parameters
//!
//! The host application owns the window, renderer, and raw input events. It
//! drives this core by calling [`sim::step`] once per frame with a delta-time
//! and an [`sim::InputSnapshot`], then reads the returned [`sim::FrameResult`]
//! (entity views, colliding pairs, mean frame time) for drawing.

pub mod config;
pub mod sim;

pub use config::{GrabMode, SimConfig};

/// Simulation tuning defaults
pub mod consts {
    /// Hard ceiling on the number of live entities
    pub const MAX_ENTITIES: usize = 512;

    /// Delta-time samples per diagnostic frame-time average
    pub const MAX_FRAME_SAMPLES: usize = 8;

    /// Initial velocity is uniform in [-MAX_SPEED, MAX_SPEED] per axis
    pub const MAX_SPEED: f32 = 200.0;

    /// Spawn radius range (floored to a whole number)
    pub const MIN_RADIUS: f32 = 5.0;
    pub const MAX_RADIUS: f32 = 16.0;

    /// Squared speed below which velocity snaps to exactly zero
    pub const VELOCITY_DEADZONE: f32 = 0.01;

    /// Linear drag coefficient at startup and its adjustment step (0..=1)
    pub const DEFAULT_DRAG: f32 = 0.05;
    pub const DRAG_STEP: f32 = 0.05;

    /// Minimum center distance when normalizing a contact axis.
    /// Coincident centers fall back to a +X axis clamped to this distance.
    pub const MIN_CONTACT_DISTANCE: f32 = 1e-6;

    /// Default entity color, packed 0xRRGGBB
    pub const DEFAULT_COLOR: u32 = 0xffffff;
}
