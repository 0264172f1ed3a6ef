//! Simulation clock.

use specs::{System, Write};

/// Tracks the number of the current simulation step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub n: u64,
}

/// The timestep of the field solver.
///
/// Must resolve the laser period: the analytic sources are sampled once per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestep {
    /// Duration of the simulation timestep, in SI units of seconds.
    pub delta: f64,
}
impl Default for Timestep {
    fn default() -> Self {
        Timestep { delta: 1.0e-17 }
    }
}
impl Timestep {
    /// Simulated time at the start of step `n`.
    pub fn time_at(&self, n: u64) -> f64 {
        self.delta * n as f64
    }
}

pub const ADVANCE_STEP_SYSTEM_NAME: &str = "advance_step";

/// Increments [Step] once the frame's sources have been sampled.
pub struct AdvanceStepSystem;

impl<'a> System<'a> for AdvanceStepSystem {
    type SystemData = Write<'a, Step>;

    fn run(&mut self, mut step: Self::SystemData) {
        step.n += 1;
    }
}
