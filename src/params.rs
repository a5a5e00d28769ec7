/*
 * Simulation Parameters Module
 *
 * This module defines the bounded Parameter type and the SimulationParams
 * struct that groups the four tunable values of the simulation. The UI binds
 * sliders directly to the parameter values; the engine only ever reads them.
 */

use std::ops::RangeInclusive;

// A tunable scalar pinned to a fixed valid range.
#[derive(Clone, Copy, Debug)]
pub struct Parameter {
    pub lower: f64,
    pub value: f64,
    pub upper: f64,
}

impl Parameter {
    pub fn new(lower: f64, value: f64, upper: f64) -> Self {
        Self {
            lower,
            value: value.clamp(lower, upper),
            upper,
        }
    }

    // Clamping write for programmatic callers. The sliders clamp on their own.
    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.lower, self.upper);
    }

    // The range handed to the UI slider for this parameter.
    pub fn range(&self) -> RangeInclusive<f64> {
        self.lower..=self.upper
    }
}

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub population: Parameter,
    pub cohesion: Parameter,
    pub separation: Parameter,
    pub alignment: Parameter,
}

impl Default for SimulationParams {
    fn default() -> Self {
        // Each parameter carries (lower, default, upper)
        Self {
            population: Parameter::new(1.0, 100.0, 100.0),
            cohesion: Parameter::new(0.0, 10.0, 10.0),
            separation: Parameter::new(0.0, 1000.0, 10000.0),
            alignment: Parameter::new(0.0, 1000.0, 1000.0),
        }
    }
}

impl SimulationParams {
    // Number of boids simulated and drawn this frame
    pub fn active_count(&self) -> usize {
        self.population.value.floor() as usize
    }
}
