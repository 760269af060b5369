//! Entity storage
//!
//! Parallel arrays indexed 0..len, kept in lock-step behind a single
//! mutation surface. Spawn, remove, and clear are the only operations that
//! change the array lengths, so the fields cannot desynchronize.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::consts::DEFAULT_COLOR;

/// Read-only per-entity view handed to the host for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: u32,
}

/// Structure-of-arrays store for all live entities
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    accelerations: Vec<Vec2>,
    radii: Vec<f32>,
    masses: Vec<f32>,
    colors: Vec<u32>,
    capacity: usize,
}

impl EntityStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            accelerations: Vec::with_capacity(capacity),
            radii: Vec::with_capacity(capacity),
            masses: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an entity at `position` with zero velocity, a random floored
    /// radius, and mass derived as pi * r^2. Returns `None` at capacity.
    pub fn spawn(&mut self, position: Vec2, rng: &mut Pcg32, config: &SimConfig) -> Option<usize> {
        if self.len() >= self.capacity {
            log::debug!("Spawn rejected: at capacity ({})", self.capacity);
            return None;
        }

        let radius = rng.random_range(config.min_radius..config.max_radius).floor();
        self.positions.push(position);
        self.velocities.push(Vec2::ZERO);
        self.accelerations.push(Vec2::ZERO);
        self.radii.push(radius);
        self.masses.push(std::f32::consts::PI * radius * radius);
        self.colors.push(DEFAULT_COLOR);
        Some(self.len() - 1)
    }

    /// Fill the store to capacity with randomized entities: position uniform
    /// over the bounds, per-axis velocity uniform in the configured speed
    /// range, radius and mass as in [`EntityStore::spawn`].
    pub fn populate(&mut self, bounds: Vec2, rng: &mut Pcg32, config: &SimConfig) {
        while self.len() < self.capacity {
            let position = Vec2::new(
                rng.random_range(0.0..bounds.x.max(f32::MIN_POSITIVE)),
                rng.random_range(0.0..bounds.y.max(f32::MIN_POSITIVE)),
            );
            let index = match self.spawn(position, rng, config) {
                Some(index) => index,
                None => break,
            };
            let speed = config.initial_speed;
            self.velocities[index] = Vec2::new(
                rng.random_range(-1.0..1.0_f32) * speed,
                rng.random_range(-1.0..1.0_f32) * speed,
            );
        }
        log::info!("Populated {} entities", self.len());
    }

    /// Swap-compacting removal. Out-of-range indices are a no-op.
    /// The last entity moves into the freed slot, so surviving indices shift.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.len() {
            log::debug!("Remove rejected: index {index} out of range");
            return false;
        }
        self.positions.swap_remove(index);
        self.velocities.swap_remove(index);
        self.accelerations.swap_remove(index);
        self.radii.swap_remove(index);
        self.masses.swap_remove(index);
        self.colors.swap_remove(index);
        true
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.velocities.clear();
        self.accelerations.clear();
        self.radii.clear();
        self.masses.clear();
        self.colors.clear();
    }

    /// First entity (scan order) whose circle strictly contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        (0..self.len()).find(|&i| {
            let r = self.radii[i];
            self.positions[i].distance_squared(point) < r * r
        })
    }

    #[inline]
    pub fn position(&self, index: usize) -> Vec2 {
        self.positions[index]
    }

    #[inline]
    pub fn velocity(&self, index: usize) -> Vec2 {
        self.velocities[index]
    }

    #[inline]
    pub fn acceleration(&self, index: usize) -> Vec2 {
        self.accelerations[index]
    }

    #[inline]
    pub fn radius(&self, index: usize) -> f32 {
        self.radii[index]
    }

    #[inline]
    pub fn mass(&self, index: usize) -> f32 {
        self.masses[index]
    }

    #[inline]
    pub fn color(&self, index: usize) -> u32 {
        self.colors[index]
    }

    #[inline]
    pub fn set_position(&mut self, index: usize, position: Vec2) {
        self.positions[index] = position;
    }

    #[inline]
    pub fn set_velocity(&mut self, index: usize, velocity: Vec2) {
        self.velocities[index] = velocity;
    }

    #[inline]
    pub fn set_acceleration(&mut self, index: usize, acceleration: Vec2) {
        self.accelerations[index] = acceleration;
    }

    /// Read-only iteration for the host
    pub fn iter(&self) -> impl Iterator<Item = EntityView> + '_ {
        (0..self.len()).map(|i| EntityView {
            position: self.positions[i],
            velocity: self.velocities[i],
            radius: self.radii[i],
            color: self.colors[i],
        })
    }
}
