//! Deterministic simulation module
//!
//! All physics and interaction logic lives here. This module must be pure
//! and host-agnostic:
//! - Driven by an external per-frame delta-time
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! One [`step`] runs to completion per frame: input edge detection,
//! spawn/delete/select, motion integration with boundary wraparound, the
//! all-pairs collision scan with de-penetration, elastic velocity
//! resolution, and the pointer-manipulation override.

pub mod collision;
pub mod input;
pub mod select;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{circles_overlap, CollisionPair};
pub use input::{InputEdges, InputSnapshot};
pub use select::Selection;
pub use state::{FrameResult, FrameTimer, SimState};
pub use store::{EntityStore, EntityView};
pub use tick::step;
