//! Simulation parameters
//!
//! Set by the host at initialization. Drag, pause, and the grab mode are the
//! only values that change mid-run, and only through the input snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How a held entity responds to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GrabMode {
    /// Pointer drags the entity directly; physics is suspended for it
    #[default]
    Drag,
    /// Entity keeps simulating; releasing flicks it away from the pointer
    Pool,
}

impl GrabMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrabMode::Drag => "drag",
            GrabMode::Pool => "pool",
        }
    }

    /// The other mode (used by the mode-toggle action)
    pub fn toggled(&self) -> Self {
        match self {
            GrabMode::Drag => GrabMode::Pool,
            GrabMode::Pool => GrabMode::Drag,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Entity capacity ceiling
    pub max_entities: usize,
    /// Initial per-axis velocity is uniform in [-initial_speed, initial_speed]
    pub initial_speed: f32,
    /// Spawn radius is drawn uniformly from [min_radius, max_radius) and floored
    pub min_radius: f32,
    pub max_radius: f32,
    /// Linear drag coefficient at startup (0..=1)
    pub drag: f32,
    /// Increment applied per drag-adjust press
    pub drag_step: f32,
    /// Squared-speed threshold for the velocity deadzone
    pub deadzone: f32,
    /// Delta-time samples per diagnostic frame-time average
    pub frame_samples: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
            initial_speed: MAX_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            drag: DEFAULT_DRAG,
            drag_step: DRAG_STEP,
            deadzone: VELOCITY_DEADZONE,
            frame_samples: MAX_FRAME_SAMPLES,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<SimConfig>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    log::warn!("Bad config {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp loaded values into the ranges the simulation assumes.
    /// Radii must stay positive so derived masses stay positive.
    pub fn sanitized(mut self) -> Self {
        self.drag = self.drag.clamp(0.0, 1.0);
        self.drag_step = self.drag_step.clamp(0.0, 1.0);
        self.min_radius = self.min_radius.max(1.0);
        self.max_radius = self.max_radius.max(self.min_radius + 1.0);
        self.deadzone = self.deadzone.max(0.0);
        self.frame_samples = self.frame_samples.max(1);
        self
    }
}
