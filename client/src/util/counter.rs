//! Stat counter animation: counts up to a target in fixed steps.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Number of increments between zero and the target.
pub const STEPS: u32 = 50;

/// Total run time of one count-up.
pub const DURATION_MS: u32 = 2000;

/// Delay between increments.
pub const STEP_MS: u32 = DURATION_MS / STEPS;

/// A counter partway through its count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    step: u32,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, step: 0 }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= STEPS
    }

    /// Value shown after the current number of increments.
    #[must_use]
    pub fn value(&self) -> u32 {
        value_at(self.target, self.step)
    }

    /// Advance one increment and return the value to display.
    pub fn tick(&mut self) -> u32 {
        if !self.is_done() {
            self.step += 1;
        }
        self.value()
    }
}

/// Displayed value after `step` increments: floored, never past `target`,
/// and exactly `target` on the last step.
#[must_use]
pub fn value_at(target: u32, step: u32) -> u32 {
    if step >= STEPS {
        return target;
    }
    let scaled = u64::from(target) * u64::from(step) / u64::from(STEPS);
    u32::try_from(scaled).unwrap_or(target).min(target)
}
