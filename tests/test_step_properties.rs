//! Scenario tests for the per-frame update pass

use flock::{step, Flock, SimulationParams, StepError, MAX_SPEED, MIN_SPEED};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_zero_dt_leaves_positions_unchanged() {
    let params = SimulationParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut flock = Flock::spawn_with(&mut rng, 100, 600.0);
    let before = flock.positions().to_vec();

    // Velocities still pick up the target pull (it is not scaled by dt) and
    // the speed clamp, but nothing may move
    step(&mut flock, &params, DVec2::new(40.0, -25.0), 0.0).unwrap();

    assert_eq!(flock.positions(), before.as_slice());
}

#[test]
fn test_single_boid_homes_in_on_target() {
    let mut params = SimulationParams::default();
    params.population.set(1.0);
    params.cohesion.set(0.0);
    params.separation.set(0.0);
    params.alignment.set(0.0);

    let mut flock = Flock::from_parts(vec![DVec2::new(100.0, 0.0)], vec![DVec2::ZERO]);
    let target = DVec2::ZERO;

    let mut last_distance = flock.positions()[0].length();
    for _ in 0..50 {
        step(&mut flock, &params, target, 0.01).unwrap();

        let distance = flock.positions()[0].length();
        assert!(distance < last_distance);
        last_distance = distance;

        // The accumulated pull always points at the target
        let toward = target - flock.positions()[0];
        assert!(flock.velocities()[0].dot(toward) > 0.0);
    }
}

#[test]
fn test_near_coincident_pair_pushes_apart() {
    let mut params = SimulationParams::default();
    params.population.set(2.0);

    let mut flock = Flock::from_parts(
        vec![DVec2::new(-0.05, 0.0), DVec2::new(0.05, 0.0)],
        vec![DVec2::ZERO, DVec2::ZERO],
    );
    let gap_before = (flock.positions()[1] - flock.positions()[0]).length();

    // The first step can only steer: positions integrate before the pair
    // forces are exchanged, so the kick shows up in the velocities now and
    // in the positions one frame later
    step(&mut flock, &params, DVec2::ZERO, 0.01).unwrap();
    assert!(flock.velocities()[0].x < 0.0);
    assert!(flock.velocities()[1].x > 0.0);

    step(&mut flock, &params, DVec2::ZERO, 0.01).unwrap();
    let gap_after = (flock.positions()[1] - flock.positions()[0]).length();
    assert!(gap_after > gap_before);
}

#[test]
fn test_speeds_are_clamped_after_stepping() {
    let params = SimulationParams::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut flock = Flock::spawn_with(&mut rng, 100, 600.0);

    for _ in 0..10 {
        step(&mut flock, &params, DVec2::new(15.0, 35.0), 0.016).unwrap();
    }

    // With at least two boids active, every boid's final velocity write of
    // the frame goes through the speed clamp
    for v in &flock.velocities()[..params.active_count()] {
        let speed = v.length();
        assert!(speed >= MIN_SPEED - 1e-9, "speed {speed} below minimum");
        assert!(speed <= MAX_SPEED + 1e-9, "speed {speed} above maximum");
    }
}

#[test]
fn test_population_overflow_is_rejected_before_mutation() {
    let params = SimulationParams::default();
    let mut flock = Flock::from_parts(
        vec![DVec2::new(1.0, 1.0); 10],
        vec![DVec2::new(0.0, 20.0); 10],
    );
    let before_positions = flock.positions().to_vec();
    let before_velocities = flock.velocities().to_vec();

    let err = step(&mut flock, &params, DVec2::ZERO, 0.016).unwrap_err();

    assert!(matches!(
        err,
        StepError::PopulationOverflow {
            requested: 100,
            capacity: 10,
        }
    ));
    assert_eq!(err.to_string(), "population 100 exceeds flock capacity 10");
    assert_eq!(flock.positions(), before_positions.as_slice());
    assert_eq!(flock.velocities(), before_velocities.as_slice());
}

#[test]
fn test_inactive_tail_is_left_untouched() {
    let mut params = SimulationParams::default();
    params.population.set(3.0);

    let mut rng = StdRng::seed_from_u64(3);
    let mut flock = Flock::spawn_with(&mut rng, 10, 600.0);
    let tail_positions = flock.positions()[3..].to_vec();
    let tail_velocities = flock.velocities()[3..].to_vec();

    for _ in 0..5 {
        step(&mut flock, &params, DVec2::new(10.0, 10.0), 0.016).unwrap();
    }

    assert_eq!(&flock.positions()[3..], tail_positions.as_slice());
    assert_eq!(&flock.velocities()[3..], tail_velocities.as_slice());
}

#[test]
fn test_identical_states_step_identically() {
    let params = SimulationParams::default();

    let mut rng = StdRng::seed_from_u64(99);
    let mut first = Flock::spawn_with(&mut rng, 100, 600.0);
    let mut rng = StdRng::seed_from_u64(99);
    let mut second = Flock::spawn_with(&mut rng, 100, 600.0);

    let target = DVec2::new(-120.0, 80.0);
    for _ in 0..60 {
        step(&mut first, &params, target, 1.0 / 60.0).unwrap();
        step(&mut second, &params, target, 1.0 / 60.0).unwrap();
    }

    assert_eq!(first.positions(), second.positions());
    assert_eq!(first.velocities(), second.velocities());
}
