//! Elastic2D headless demo driver
//!
//! Runs the simulation core at a fixed timestep with no renderer attached
//! and logs periodic diagnostics. A real host owns a window, draws the
//! entity views each frame, and feeds live pointer state into the input
//! snapshot; this binary stands in for one with default input.
//!
//! Usage: `elastic2d [config.json]`, seed overridable via `ELASTIC2D_SEED`.

use std::path::Path;

use glam::Vec2;

use elastic2d::sim::{step, InputSnapshot, SimState};
use elastic2d::SimConfig;

/// Demo bounds, matching a common window size
const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);
/// Fixed demo timestep (60 Hz)
const DT: f32 = 1.0 / 60.0;
/// Demo length in frames (10 seconds)
const FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Elastic2D (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path)),
        None => SimConfig::default(),
    };

    let seed = std::env::var("ELASTIC2D_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut state = SimState::new(seed, BOUNDS, config);
    let input = InputSnapshot::default();

    for frame in 1..=FRAMES {
        let result = step(&mut state, &input, DT);

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} entities, {} colliding pairs, mean dt {:.4}s",
                result.entity_count(),
                result.colliding_pairs().len(),
                result.mean_frame_time()
            );
        }
    }

    let store = state.store();
    let kinetic: f32 = (0..store.len())
        .map(|i| 0.5 * store.mass(i) * store.velocity(i).length_squared())
        .sum();
    log::info!("Done after {FRAMES} frames, total kinetic energy {kinetic:.1}");
}
