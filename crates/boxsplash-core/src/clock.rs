use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Hosts feed it wall-clock frame deltas; it answers how many whole steps
/// of `step` are due. Backlog beyond `max_steps` is dropped.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    max_steps: u32,
    accum: Duration,
}

impl FixedStep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            max_steps: max_steps.max(1),
            accum: Duration::ZERO,
        }
    }

    pub fn pending(&self) -> Duration {
        self.accum
    }

    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }

    /// Add `dt` and return the number of steps to run now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accum += dt;
        let cap = self.step * self.max_steps;
        if self.accum > cap {
            log::debug!(
                "[clock] dropping {:?} of backlog",
                self.accum.saturating_sub(cap)
            );
            self.accum = cap;
        }
        let mut steps = 0;
        while self.accum >= self.step {
            self.accum -= self.step;
            steps += 1;
        }
        steps
    }
}
