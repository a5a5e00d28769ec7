/*
 * Frame Clock Module
 *
 * Wall-clock timer for the variable-timestep update loop. Each call to
 * `sample` returns the real time elapsed since the previous call, which
 * becomes the integration step for that frame. The first call establishes
 * the baseline and returns zero.
 */

use std::time::Instant;

pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    // Seconds elapsed since the previous call, or 0.0 on the first call.
    pub fn sample(&mut self) -> f64 {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
