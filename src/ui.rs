/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides sliders for the simulation parameters, a
 * reset control for the flock, and basic performance readouts.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the flock should be re-scattered
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    paused: &mut bool,
    debug_info: &DebugInfo,
) -> bool {
    let mut should_reset = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                let range = params.population.range();
                ui.add(egui::Slider::new(&mut params.population.value, range).text("Boids"));

                if ui.button("Reset Boids").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                let range = params.cohesion.range();
                ui.add(egui::Slider::new(&mut params.cohesion.value, range).text("Cohesion"));

                let range = params.separation.range();
                ui.add(egui::Slider::new(&mut params.separation.value, range).text("Separation"));

                let range = params.alignment.range();
                ui.add(egui::Slider::new(&mut params.alignment.value, range).text("Alignment"));
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Active Boids: {}", params.active_count()));
            });

            ui.checkbox(paused, "Pause Simulation");
        });

    should_reset
}
