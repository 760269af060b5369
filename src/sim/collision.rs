//! Circle-circle collision detection and elastic response
//!
//! The scan is intentionally all-pairs O(n^2) with no broad phase. Detection
//! and positional correction happen in one pass; velocity resolution runs
//! afterwards over the recorded pair list.

use glam::Vec2;

use super::store::EntityStore;
use crate::consts::MIN_CONTACT_DISTANCE;

/// An overlapping pair recorded during the detection scan.
///
/// The scan is ordered over all (i, j) with i != j and is not deduplicated:
/// when a later correction pushes an already-visited pair back into overlap,
/// the reverse direction records and corrects it again. Pairs are only valid
/// within the frame that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub first: usize,
    pub second: usize,
}

/// Squared-distance circle overlap test (no square root)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) < r * r
}

/// Unit axis and distance from `from` to `to`.
///
/// Coincident centers would divide by zero in the normalization; below the
/// contact epsilon the axis falls back to +X with the distance clamped, so
/// perfectly stacked entities separate horizontally instead of going NaN.
#[inline]
fn contact_axis(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let distance = delta.length();
    if distance < MIN_CONTACT_DISTANCE {
        (Vec2::X, MIN_CONTACT_DISTANCE)
    } else {
        (delta / distance, distance)
    }
}

/// All-pairs overlap scan with positional de-penetration.
///
/// Each overlapping pair is pushed apart along the line between centers by
/// half the penetration per entity. Velocities are untouched here; the pair
/// list is rebuilt from scratch on every call.
pub fn detect_and_separate(store: &mut EntityStore, pairs: &mut Vec<CollisionPair>) {
    pairs.clear();

    for i in 0..store.len() {
        for j in 0..store.len() {
            if i == j {
                continue;
            }
            let (pi, ri) = (store.position(i), store.radius(i));
            let (pj, rj) = (store.position(j), store.radius(j));
            if !circles_overlap(pi, ri, pj, rj) {
                continue;
            }

            pairs.push(CollisionPair { first: i, second: j });

            // axis points from the target back to the current entity
            let (axis, distance) = contact_axis(pj, pi);
            let overlap = 0.5 * (distance - ri - rj); // negative while overlapping
            store.set_position(i, pi - axis * overlap);
            store.set_position(j, pj + axis * overlap);
        }
    }
}

/// Elastic velocity resolution over the recorded pairs.
///
/// For each pair the velocities are decomposed into a tangential component,
/// which passes through unchanged, and a normal component, which takes the
/// 1D elastic collision response for the two masses. Positions are not
/// touched; de-penetration already ran.
pub fn resolve_pairs(store: &mut EntityStore, pairs: &[CollisionPair]) {
    for pair in pairs {
        let (a, b) = (pair.first, pair.second);

        let (normal, _) = contact_axis(store.position(a), store.position(b));
        let tangent = normal.perp();

        let va = store.velocity(a);
        let vb = store.velocity(b);

        let o1 = va.dot(tangent);
        let o2 = vb.dot(tangent);
        let n1 = va.dot(normal);
        let n2 = vb.dot(normal);

        let ma = store.mass(a);
        let mb = store.mass(b);
        // conservation of momentum along the contact normal
        let m1 = (n1 * (ma - mb) + 2.0 * mb * n2) / (ma + mb);
        let m2 = (n2 * (mb - ma) + 2.0 * ma * n1) / (ma + mb);

        store.set_velocity(a, tangent * o1 + normal * m1);
        store.set_velocity(b, tangent * o2 + normal * m2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Store with entities at fixed positions/radii and given velocities.
    /// Radii are forced through a one-value spawn range so tests control mass.
    fn store_with(entities: &[(Vec2, Vec2, f32)]) -> EntityStore {
        let mut store = EntityStore::new(entities.len());
        let mut rng = Pcg32::seed_from_u64(0);
        for &(pos, vel, radius) in entities {
            let config = SimConfig {
                min_radius: radius,
                max_radius: radius + 0.5,
                ..SimConfig::default()
            };
            let i = store.spawn(pos, &mut rng, &config).unwrap();
            store.set_velocity(i, vel);
        }
        store
    }

    #[test]
    fn overlap_test_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(20.0, 0.0);
        assert!(!circles_overlap(a, 10.0, b, 10.0)); // exactly touching
        assert!(circles_overlap(a, 10.0, b, 10.5));
        assert!(!circles_overlap(a, 5.0, b, 5.0));
    }

    #[test]
    fn isolated_contact_records_once_and_separates_exactly() {
        let mut store = store_with(&[
            (Vec2::new(0.0, 0.0), Vec2::ZERO, 10.0),
            (Vec2::new(15.0, 0.0), Vec2::ZERO, 10.0),
        ]);
        let mut pairs = Vec::new();
        detect_and_separate(&mut store, &mut pairs);

        // full correction leaves the pair exactly touching, so the reverse
        // scan direction no longer sees an overlap
        assert_eq!(pairs, vec![CollisionPair { first: 0, second: 1 }]);
        let gap = store.position(0).distance(store.position(1));
        assert_eq!(gap, 20.0);
    }

    #[test]
    fn chained_contacts_can_record_both_directions() {
        // correcting (0,1) then (0,2) drags entity 0 back into entity 1,
        // so the ordered scan records the same contact from both sides
        let mut store = store_with(&[
            (Vec2::new(0.0, 0.0), Vec2::ZERO, 10.0),
            (Vec2::new(15.0, 0.0), Vec2::ZERO, 10.0),
            (Vec2::new(-15.0, 0.0), Vec2::ZERO, 10.0),
        ]);
        let mut pairs = Vec::new();
        detect_and_separate(&mut store, &mut pairs);

        assert!(pairs.contains(&CollisionPair { first: 0, second: 1 }));
        assert!(pairs.contains(&CollisionPair { first: 1, second: 0 }));
    }

    #[test]
    fn separation_pushes_entities_apart() {
        let mut store = store_with(&[
            (Vec2::new(0.0, 50.0), Vec2::ZERO, 10.0),
            (Vec2::new(15.0, 50.0), Vec2::ZERO, 10.0),
        ]);
        let before = store.position(1).x - store.position(0).x;
        let mut pairs = Vec::new();
        detect_and_separate(&mut store, &mut pairs);
        let after = store.position(1).x - store.position(0).x;

        assert!(after > before);
        // still on the original center line
        assert_eq!(store.position(0).y, 50.0);
        assert_eq!(store.position(1).y, 50.0);
    }

    #[test]
    fn coincident_centers_separate_deterministically() {
        let mut store = store_with(&[
            (Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0),
            (Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0),
        ]);
        let mut pairs = Vec::new();
        detect_and_separate(&mut store, &mut pairs);
        resolve_pairs(&mut store, &pairs);

        for i in 0..store.len() {
            assert!(store.position(i).is_finite());
            assert!(store.velocity(i).is_finite());
        }
        // the +X fallback separates the pair horizontally
        assert!(store.position(0).x != store.position(1).x);
        assert_eq!(store.position(0).y, store.position(1).y);
    }

    #[test]
    fn equal_mass_head_on_swaps_velocities() {
        // equal masses, symmetric approach along x
        let mut store = store_with(&[
            (Vec2::new(10.0, 50.0), Vec2::new(50.0, 0.0), 10.0),
            (Vec2::new(40.0, 50.0), Vec2::new(-50.0, 0.0), 10.0),
        ]);
        let pairs = vec![CollisionPair { first: 0, second: 1 }];
        resolve_pairs(&mut store, &pairs);

        let va = store.velocity(0);
        let vb = store.velocity(1);
        assert!((va.x - (-50.0)).abs() < 1e-3, "va = {va}");
        assert!(va.y.abs() < 1e-3);
        assert!((vb.x - 50.0).abs() < 1e-3, "vb = {vb}");
        assert!(vb.y.abs() < 1e-3);
    }

    proptest! {
        /// Momentum and kinetic energy are conserved through a single
        /// resolution call for an isolated pair.
        #[test]
        fn resolution_conserves_momentum_and_energy(
            vax in -200.0f32..200.0, vay in -200.0f32..200.0,
            vbx in -200.0f32..200.0, vby in -200.0f32..200.0,
            ra in 5.0f32..15.0, rb in 5.0f32..15.0,
        ) {
            let mut store = store_with(&[
                (Vec2::new(0.0, 0.0), Vec2::new(vax, vay), ra.floor()),
                (Vec2::new(ra.floor() + rb.floor() - 1.0, 0.0), Vec2::new(vbx, vby), rb.floor()),
            ]);
            let (ma, mb) = (store.mass(0), store.mass(1));
            let momentum_before = store.velocity(0) * ma + store.velocity(1) * mb;
            let energy_before = ma * store.velocity(0).length_squared()
                + mb * store.velocity(1).length_squared();

            let pairs = vec![CollisionPair { first: 0, second: 1 }];
            resolve_pairs(&mut store, &pairs);

            let momentum_after = store.velocity(0) * ma + store.velocity(1) * mb;
            let energy_after = ma * store.velocity(0).length_squared()
                + mb * store.velocity(1).length_squared();

            let momentum_scale = momentum_before.length().max(1.0);
            prop_assert!((momentum_after - momentum_before).length() / momentum_scale < 1e-3);
            let energy_scale = energy_before.max(1.0);
            prop_assert!((energy_after - energy_before).abs() / energy_scale < 1e-3);
        }
    }
}
