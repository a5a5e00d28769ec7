/*
 * Input Module
 *
 * This module handles user input events for the simulation. A left click
 * anywhere outside the control panel moves the target to the clicked point.
 * Window coordinates map one to one onto simulation coordinates, so the
 * click position is used as is.
 */

use glam::DVec2;
use log::debug;
use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = Vec2::new(pos.x, pos.y);
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Ignore clicks captured by the control panel
        if !model.egui.ctx().is_pointer_over_area() {
            model.target = DVec2::new(model.mouse_position.x as f64, model.mouse_position.y as f64);
            debug!("target moved to ({:.1}, {:.1})", model.target.x, model.target.y);
        }
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
