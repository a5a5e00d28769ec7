/*
 * Flocking Simulation
 *
 * Interactive boids simulation. Boids chase a movable target while trading
 * pairwise cohesion, alignment, and separation forces. Sliders adjust the
 * population and the force coefficients while the simulation runs, and a
 * left click moves the target.
 */

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    nannou::app(flock::app::model)
        .update(flock::app::update)
        .run();
}
