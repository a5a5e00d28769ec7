/*
 * Application Module
 *
 * This module defines the main application model and update loop for the
 * flocking simulation. Each frame it runs the egui pass, samples the frame
 * clock, and advances the flock one step toward the current target.
 */

use glam::DVec2;
use log::{error, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::engine;
use crate::flock::Flock;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;
use crate::SPAWN_SIZE;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub target: DVec2,
    pub clock: FrameClock,
    pub last_dt: f64,
    pub paused: bool,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and a flock arena sized to the highest
    // population the slider can ask for
    let params = SimulationParams::default();
    let capacity = params.population.upper as usize;
    let flock = Flock::spawn(capacity, SPAWN_SIZE);

    info!(
        "starting with {} boids in a {}x{} window",
        params.active_count(),
        window_width as u32,
        window_height as u32
    );

    Model {
        flock,
        params,
        target: DVec2::ZERO,
        clock: FrameClock::new(),
        last_dt: 0.0,
        paused: false,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the flock should be re-scattered
    let should_reset = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.paused,
        &model.debug_info,
    );

    if should_reset {
        model.flock.respawn(SPAWN_SIZE);
    }

    // Sample the clock even while paused, so resuming does not integrate the
    // whole pause as one giant step
    let dt = model.clock.sample();

    if model.paused {
        return;
    }
    model.last_dt = dt;

    if let Err(err) = engine::step(&mut model.flock, &model.params, model.target, dt) {
        error!("simulation step failed: {err}");
    }
}
