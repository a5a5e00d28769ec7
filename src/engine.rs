/*
 * Update Engine Module
 *
 * The per-frame simulation pass. Every boid first integrates its position
 * and picks up the pull toward the shared target, then exchanges pairwise
 * forces with every boid stored before it. Pair forces are applied equal
 * and opposite the moment they are computed, so later boids in the same
 * pass already see the updated velocities of earlier ones. That ordering
 * is part of the observed dynamics and must not be reordered, batched, or
 * parallelized.
 */

use glam::DVec2;
use thiserror::Error;

use crate::flock::Flock;
use crate::params::SimulationParams;

// Speed bounds enforced on every velocity the pair pass touches
pub const MIN_SPEED: f64 = 10.0;
pub const MAX_SPEED: f64 = 100.0;

#[derive(Debug, Error)]
pub enum StepError {
    #[error("population {requested} exceeds flock capacity {capacity}")]
    PopulationOverflow { requested: usize, capacity: usize },
}

// Advance the flock by one frame of `dt` seconds.
//
// The active count is re-read from the population parameter on every call,
// so raising or lowering it takes effect on the next frame without any
// reallocation. Slots past the active count are left untouched.
pub fn step(
    flock: &mut Flock,
    params: &SimulationParams,
    target: DVec2,
    dt: f64,
) -> Result<(), StepError> {
    let active = params.active_count();
    if active > flock.capacity() {
        return Err(StepError::PopulationOverflow {
            requested: active,
            capacity: flock.capacity(),
        });
    }

    for i in 0..active {
        let mut position = flock.positions[i];
        let mut velocity = flock.velocities[i];

        // Integrate, pick up the target pull, then integrate again with the
        // updated velocity. The pull is not scaled by dt: it saturates toward
        // unit magnitude far from the target and fades out on top of it.
        position += velocity * dt;
        let home = target - position;
        velocity += home / (1.0 + home.length());
        position += velocity * dt;

        flock.positions[i] = position;
        flock.velocities[i] = velocity;

        // Exchange forces with every earlier boid, visiting each unordered
        // pair exactly once per frame.
        for j in 0..i {
            let v_i = flock.velocities[i];
            let v_j = flock.velocities[j];
            let dv = pair_acceleration(
                flock.positions[i],
                v_i,
                flock.positions[j],
                v_j,
                params,
            );

            flock.velocities[i] = dampen(v_i + dv * dt);
            flock.velocities[j] = dampen(v_j - dv * dt);
        }
    }

    Ok(())
}

// Acceleration exerted on boid `i` by boid `j`; `j` receives the exact
// negation. Each rule is attenuated by a higher power of the separation,
// so cohesion reaches furthest and separation only matters up close.
pub fn pair_acceleration(
    p_i: DVec2,
    v_i: DVec2,
    p_j: DVec2,
    v_j: DVec2,
    params: &SimulationParams,
) -> DVec2 {
    let dp = p_j - p_i;
    let sep = 1.0 + dp.length();
    let sep2 = sep * sep;
    let sep3 = sep2 * sep;
    let sep4 = sep2 * sep2;

    dp * (params.cohesion.value / sep2)
        + (heading(v_j) - heading(v_i)) * (params.alignment.value / sep3)
        - dp * (params.separation.value / sep4)
}

// Unit vector in the direction of `v`, or zero for a boid at rest.
pub fn heading(v: DVec2) -> DVec2 {
    let len = v.length();
    if len == 0.0 {
        DVec2::ZERO
    } else {
        v / len
    }
}

// Clamp the speed into [MIN_SPEED, MAX_SPEED] without changing direction.
// A boid at rest has no direction to preserve and stays at rest.
pub fn dampen(v: DVec2) -> DVec2 {
    let speed = v.length();
    if speed == 0.0 {
        v
    } else {
        v * (speed.clamp(MIN_SPEED, MAX_SPEED) / speed)
    }
}
