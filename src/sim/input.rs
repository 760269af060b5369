//! Input snapshot and edge detection
//!
//! The host flattens its raw pointer/key events into one snapshot per frame;
//! the core never sees event callbacks. Edge detection is a pure function of
//! the previous and current snapshots.

use glam::Vec2;

/// Normalized input state for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Pointer position in simulation coordinates
    pub pointer: Vec2,
    /// Primary pointer button held down
    pub primary_down: bool,
    /// Secondary pointer button held down
    pub secondary_down: bool,
    /// Spawn mode: a primary press spawns at the pointer instead of selecting
    pub spawn_mode: bool,
    /// Delete the held entity
    pub delete: bool,
    /// Switch the grab mode (drag/pool)
    pub toggle_mode: bool,
    /// Toggle the pause flag
    pub toggle_pause: bool,
    /// Step the drag coefficient up/down
    pub drag_up: bool,
    pub drag_down: bool,
    /// Zero every entity's velocity
    pub reset_velocities: bool,
    /// Remove every entity
    pub delete_all: bool,
}

/// Button/key transitions between two consecutive snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct InputEdges {
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub secondary_pressed: bool,
    pub secondary_released: bool,
    pub delete_pressed: bool,
    pub mode_toggled: bool,
    pub pause_toggled: bool,
    pub drag_up_pressed: bool,
    pub drag_down_pressed: bool,
    pub reset_pressed: bool,
    pub delete_all_pressed: bool,
}

impl InputEdges {
    /// Down-edges (and up-edges for the pointer buttons) between `prev` and
    /// `current`. A flag held across both frames produces no edge.
    pub fn between(prev: &InputSnapshot, current: &InputSnapshot) -> Self {
        let pressed = |was: bool, is: bool| is && !was;
        let released = |was: bool, is: bool| was && !is;
        Self {
            primary_pressed: pressed(prev.primary_down, current.primary_down),
            primary_released: released(prev.primary_down, current.primary_down),
            secondary_pressed: pressed(prev.secondary_down, current.secondary_down),
            secondary_released: released(prev.secondary_down, current.secondary_down),
            delete_pressed: pressed(prev.delete, current.delete),
            mode_toggled: pressed(prev.toggle_mode, current.toggle_mode),
            pause_toggled: pressed(prev.toggle_pause, current.toggle_pause),
            drag_up_pressed: pressed(prev.drag_up, current.drag_up),
            drag_down_pressed: pressed(prev.drag_down, current.drag_down),
            reset_pressed: pressed(prev.reset_velocities, current.reset_velocities),
            delete_all_pressed: pressed(prev.delete_all, current.delete_all),
        }
    }
}
