//! Per-frame simulation step
//!
//! Advances the whole simulation by one frame: input edge detection, runtime
//! toggles, spawn/delete/select, motion integration with boundary wraparound,
//! the all-pairs collision scan with positional correction, elastic velocity
//! resolution, and finally the pointer-manipulation override.

use glam::Vec2;

use super::collision::{detect_and_separate, resolve_pairs};
use super::input::{InputEdges, InputSnapshot};
use super::state::{FrameResult, SimState};

/// Advance the simulation by one frame.
///
/// Total over every reachable entity count, including zero. While paused the
/// integration pass is skipped; collision correction and interaction keep
/// running.
pub fn step<'a>(state: &'a mut SimState, input: &InputSnapshot, dt: f32) -> FrameResult<'a> {
    let edges = InputEdges::between(&state.prev_input, input);

    apply_toggles(state, &edges);
    apply_lifecycle_actions(state, input, &edges);

    if !state.paused {
        integrate(state, dt);
    }

    detect_and_separate(&mut state.store, &mut state.pairs);
    resolve_pairs(&mut state.store, &state.pairs);

    // Manual-manipulation override for the held entity, after physics so a
    // dragged entity ends the frame exactly under the pointer.
    state.selection.hold_override(&mut state.store, input.pointer);
    if edges.primary_released {
        state.selection.release(&mut state.store, input.pointer);
    }

    state.frame_timer.record(dt);
    state.prev_input = *input;

    state.frame_result()
}

/// Pause, grab-mode, drag-coefficient, and whole-store actions
fn apply_toggles(state: &mut SimState, edges: &InputEdges) {
    if edges.pause_toggled {
        state.paused = !state.paused;
        log::info!("Simulation {}", if state.paused { "paused" } else { "running" });
    }

    if edges.mode_toggled {
        state.grab_mode = state.grab_mode.toggled();
        // drop any in-flight hold so the old mode cannot leak into the new one
        state.selection.drop_hold();
        log::info!("Grab mode: {}", state.grab_mode.as_str());
    }

    if edges.drag_up_pressed {
        state.drag = (state.drag + state.config.drag_step).clamp(0.0, 1.0);
    }
    if edges.drag_down_pressed {
        state.drag = (state.drag - state.config.drag_step).clamp(0.0, 1.0);
    }

    if edges.reset_pressed {
        for i in 0..state.store.len() {
            state.store.set_velocity(i, Vec2::ZERO);
        }
    }

    if edges.delete_all_pressed {
        state.store.clear();
        state.selection.drop_hold();
        log::info!("Cleared all entities");
    }
}

/// Spawn, delete, and selection on this frame's button edges
fn apply_lifecycle_actions(state: &mut SimState, input: &InputSnapshot, edges: &InputEdges) {
    if edges.primary_pressed {
        if input.spawn_mode {
            state.store.spawn(input.pointer, &mut state.rng, &state.config);
        } else {
            state
                .selection
                .begin_hold(&state.store, input.pointer, state.grab_mode);
        }
    }

    if edges.delete_pressed {
        if let Some(index) = state.selection.held_index() {
            state.store.remove(index);
            state.selection.drop_hold();
        }
    }
}

/// Integration pass: linear drag, semi-implicit Euler, boundary wraparound,
/// velocity deadzone.
fn integrate(state: &mut SimState, dt: f32) {
    let bounds = state.bounds;
    let deadzone = state.config.deadzone;

    for i in 0..state.store.len() {
        let mut velocity = state.store.velocity(i);
        let acceleration = -state.drag * velocity;
        velocity += acceleration * dt;

        let mut position = state.store.position(i) + velocity * dt;

        // Wraparound teleport: an entity whose edge crosses a side reappears
        // flush against the opposite edge, offset by its own radius.
        let radius = state.store.radius(i);
        if position.x - radius < 0.0 {
            position.x = bounds.x - radius;
        }
        if position.x + radius > bounds.x {
            position.x = radius;
        }
        if position.y - radius < 0.0 {
            position.y = bounds.y - radius;
        }
        if position.y + radius > bounds.y {
            position.y = radius;
        }

        // snap near-zero velocity to exactly zero
        if velocity.length_squared() < deadzone {
            velocity = Vec2::ZERO;
        }

        state.store.set_acceleration(i, acceleration);
        state.store.set_velocity(i, velocity);
        state.store.set_position(i, position);
    }
}
