/*
 * Renderer Module
 *
 * This module handles the rendering of the simulation. Each active boid is
 * drawn as a short trail segment from its position along its velocity, so
 * faster boids read as longer streaks. The target is marked with a hollow
 * circle. There is no camera: simulation coordinates are window coordinates.
 */

use nannou::prelude::*;

use crate::app::Model;

// Trail length as a multiple of the last frame's dt
const TRAIL_SCALE: f64 = 3.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Draw each active boid as a velocity trail
    let active = model.params.active_count().min(model.flock.capacity());
    let positions = model.flock.positions();
    let velocities = model.flock.velocities();

    for i in 0..active {
        let tail = positions[i];
        let tip = tail + velocities[i] * (TRAIL_SCALE * model.last_dt);

        draw.line()
            .start(pt2(tail.x as f32, tail.y as f32))
            .end(pt2(tip.x as f32, tip.y as f32))
            .weight(1.5)
            .color(WHITE);
    }

    // Mark the target
    draw.ellipse()
        .x_y(model.target.x as f32, model.target.y as f32)
        .radius(6.0)
        .no_fill()
        .stroke(RED)
        .stroke_weight(1.0);

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
