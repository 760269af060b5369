//! Pointer selection and manual manipulation
//!
//! Tracks which entity, if any, the pointer currently holds and in which
//! grab mode. Transitions run on button edges inside the step; the position
//! override for drag mode is applied after the physics passes so the held
//! entity ignores them.

use glam::Vec2;

use super::store::EntityStore;
use crate::config::GrabMode;

/// Selection state machine: nothing held, or one entity held in a grab mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Held { index: usize, mode: GrabMode },
}

impl Selection {
    /// Hit-test on the primary down-edge. First entity in scan order wins;
    /// a press over empty space leaves the state unchanged.
    pub fn begin_hold(&mut self, store: &EntityStore, pointer: Vec2, mode: GrabMode) {
        if *self != Selection::Idle {
            return;
        }
        if let Some(index) = store.hit_test(pointer) {
            log::debug!("Holding entity {index} in {} mode", mode.as_str());
            *self = Selection::Held { index, mode };
        }
    }

    /// Per-frame override while the primary button stays down: drag mode
    /// pins the held entity to the pointer. Pool mode leaves physics alone.
    pub fn hold_override(&self, store: &mut EntityStore, pointer: Vec2) {
        if let Selection::Held {
            index,
            mode: GrabMode::Drag,
        } = *self
        {
            store.set_position(index, pointer);
        }
    }

    /// Primary up-edge: pool mode launches the entity with a velocity of
    /// (entity position - pointer position) at release time. Both modes
    /// return to idle.
    pub fn release(&mut self, store: &mut EntityStore, pointer: Vec2) {
        if let Selection::Held { index, mode } = *self {
            if mode == GrabMode::Pool {
                let launch = store.position(index) - pointer;
                store.set_velocity(index, launch);
            }
            *self = Selection::Idle;
        }
    }

    /// Index of the held entity, if any
    pub fn held_index(&self) -> Option<usize> {
        match self {
            Selection::Held { index, .. } => Some(*index),
            Selection::Idle => None,
        }
    }

    /// Drop any in-flight hold (deletion, mode toggle, delete-all)
    pub fn drop_hold(&mut self) {
        *self = Selection::Idle;
    }
}
