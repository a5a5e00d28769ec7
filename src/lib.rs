/*
 * Boids Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation crate.
 * The core (parameters, flock state, clock, update engine) builds with no
 * graphics stack at all; the interactive front end sits behind the `gui`
 * feature so headless builds, tests, and benches stay lean.
 */

// Re-export key components for easier access
pub use clock::FrameClock;
pub use engine::{dampen, heading, pair_acceleration, step, StepError, MAX_SPEED, MIN_SPEED};
pub use flock::Flock;
pub use params::{Parameter, SimulationParams};

// Define modules
pub mod clock;
pub mod engine;
pub mod flock;
pub mod params;

// Interactive front end (nannou window, egui controls)
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod debug;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod renderer;
#[cfg(feature = "gui")]
pub mod ui;

// Constants
pub const SPAWN_SIZE: f64 = 600.0;
