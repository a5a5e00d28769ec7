/*
 * Flock State Module
 *
 * This module holds the live simulation state: one position and one velocity
 * per boid slot, stored as parallel arrays. The arrays are allocated once at
 * the maximum population and never resized; each frame the engine updates
 * only the active prefix selected by the population parameter, and slots
 * past that prefix keep whatever state they last had.
 */

use glam::DVec2;
use log::debug;
use rand::Rng;

pub struct Flock {
    pub(crate) positions: Vec<DVec2>,
    pub(crate) velocities: Vec<DVec2>,
}

impl Flock {
    // Allocate a flock of `capacity` boids scattered over a centered square
    // of side `extent`, all starting at rest.
    pub fn spawn(capacity: usize, extent: f64) -> Self {
        Self::spawn_with(&mut rand::thread_rng(), capacity, extent)
    }

    // Same as `spawn` but with a caller-supplied RNG, so tests can seed it.
    pub fn spawn_with<R: Rng>(rng: &mut R, capacity: usize, extent: f64) -> Self {
        let half = extent / 2.0;
        let positions = (0..capacity)
            .map(|_| DVec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)))
            .collect();
        let velocities = vec![DVec2::ZERO; capacity];

        debug!("spawned {} boids across a {:.0}x{:.0} square", capacity, extent, extent);

        Self {
            positions,
            velocities,
        }
    }

    // Build a flock from explicit state. Both arrays must have the same length.
    pub fn from_parts(positions: Vec<DVec2>, velocities: Vec<DVec2>) -> Self {
        assert_eq!(
            positions.len(),
            velocities.len(),
            "positions and velocities must have the same length"
        );
        Self {
            positions,
            velocities,
        }
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    // Re-scatter every boid over the spawn square and bring it to rest,
    // reusing the existing allocation.
    pub fn respawn(&mut self, extent: f64) {
        let mut rng = rand::thread_rng();
        let half = extent / 2.0;

        for position in &mut self.positions {
            *position = DVec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
        }
        for velocity in &mut self.velocities {
            *velocity = DVec2::ZERO;
        }
    }
}
