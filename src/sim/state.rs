//! Simulation state and per-frame outputs
//!
//! [`SimState`] owns everything the step mutates: the entity store, the
//! selection, runtime toggles, the pair list, the seeded RNG, and the
//! diagnostics ring. The host holds one `SimState` and never touches the
//! arrays directly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::CollisionPair;
use super::input::InputSnapshot;
use super::select::Selection;
use super::store::{EntityStore, EntityView};
use crate::config::{GrabMode, SimConfig};

/// Rolling mean of recent frame delta-times, diagnostics only.
///
/// Samples accumulate until the window fills; the fill-triggering call
/// computes the mean, resets the buffer, and drops its own sample, so a
/// fresh mean lands every window + 1 calls.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    samples: Vec<f32>,
    window: usize,
    mean: f32,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        Self {
            samples: Vec::with_capacity(window),
            window: window.max(1),
            mean: 0.0,
        }
    }

    pub fn record(&mut self, dt: f32) {
        if self.samples.len() >= self.window {
            let sum: f32 = self.samples.iter().sum();
            self.mean = sum / self.window as f32;
            self.samples.clear();
        } else {
            self.samples.push(dt);
        }
    }

    #[inline]
    pub fn mean(&self) -> f32 {
        self.mean
    }
}

/// Read-only view of one frame's outcome, handed back to the host
#[derive(Debug)]
pub struct FrameResult<'a> {
    entities: &'a EntityStore,
    pairs: &'a [CollisionPair],
    mean_frame_time: f32,
}

impl<'a> FrameResult<'a> {
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> impl Iterator<Item = EntityView> + 'a {
        self.entities.iter()
    }

    /// This frame's colliding pairs, not deduplicated across scan directions
    pub fn colliding_pairs(&self) -> &'a [CollisionPair] {
        self.pairs
    }

    /// Mean frame delta-time over the last full sample window, in seconds
    pub fn mean_frame_time(&self) -> f32 {
        self.mean_frame_time
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub(crate) store: EntityStore,
    pub(crate) selection: Selection,
    pub(crate) pairs: Vec<CollisionPair>,
    pub(crate) rng: Pcg32,
    pub(crate) config: SimConfig,
    pub(crate) bounds: Vec2,
    pub(crate) drag: f32,
    pub(crate) paused: bool,
    pub(crate) grab_mode: GrabMode,
    pub(crate) prev_input: InputSnapshot,
    pub(crate) frame_timer: FrameTimer,
}

impl SimState {
    /// Build a state with the initial population filled to capacity.
    /// The same seed and bounds reproduce a run exactly.
    pub fn new(seed: u64, bounds: Vec2, config: SimConfig) -> Self {
        let config = config.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut store = EntityStore::new(config.max_entities);
        store.populate(bounds, &mut rng, &config);

        log::info!(
            "SimState: seed={seed}, bounds={}x{}, {} entities",
            bounds.x,
            bounds.y,
            store.len()
        );

        Self {
            store,
            selection: Selection::Idle,
            pairs: Vec::new(),
            rng,
            drag: config.drag,
            paused: false,
            grab_mode: GrabMode::default(),
            prev_input: InputSnapshot::default(),
            frame_timer: FrameTimer::new(config.frame_samples),
            bounds,
            config,
        }
    }

    /// Resize notification from the host. Only spawn randomization and
    /// boundary wraparound read the bounds.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn grab_mode(&self) -> GrabMode {
        self.grab_mode
    }

    pub fn frame_result(&self) -> FrameResult<'_> {
        FrameResult {
            entities: &self.store,
            pairs: &self.pairs,
            mean_frame_time: self.frame_timer.mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_timer_averages_after_a_full_window() {
        let mut timer = FrameTimer::new(4);
        for _ in 0..4 {
            timer.record(0.02);
        }
        assert_eq!(timer.mean(), 0.0); // window just filled, not averaged yet

        // fifth call computes the mean of the 4 stored samples and resets
        timer.record(0.5);
        assert!((timer.mean() - 0.02).abs() < 1e-6);

        // the triggering sample was dropped: the next window starts empty
        for _ in 0..4 {
            timer.record(0.04);
        }
        assert!((timer.mean() - 0.02).abs() < 1e-6);
        timer.record(0.04);
        assert!((timer.mean() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn new_state_fills_to_capacity() {
        let config = SimConfig {
            max_entities: 32,
            ..SimConfig::default()
        };
        let state = SimState::new(42, Vec2::new(640.0, 480.0), config);
        assert_eq!(state.store().len(), 32);
        assert!(!state.paused());
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn same_seed_reproduces_the_population() {
        let config = SimConfig {
            max_entities: 16,
            ..SimConfig::default()
        };
        let a = SimState::new(7, Vec2::new(800.0, 600.0), config.clone());
        let b = SimState::new(7, Vec2::new(800.0, 600.0), config);

        for (ea, eb) in a.store().iter().zip(b.store().iter()) {
            assert_eq!(ea, eb);
        }
    }
}
