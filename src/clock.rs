use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Frames report how much wall time passed; whole simulation ticks are
/// drained from the accumulated debt and the fractional remainder carries
/// over to the next frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FixedStep {
    period: Duration,
    debt: Duration,
}

impl FixedStep {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "tick period must be positive");

        Self {
            period,
            debt: Duration::ZERO,
        }
    }

    /// Adds `elapsed` to the debt and returns how many whole ticks are due.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.debt = self.debt.saturating_add(elapsed);

        let due = self.debt.as_nanos() / self.period.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.debt = self.debt.saturating_sub(self.period.saturating_mul(due));
        due
    }

    /// Forgets any partial tick, e.g. after a turn already moved the snake.
    pub fn reset(&mut self) {
        self.debt = Duration::ZERO;
    }

    /// Time accumulated towards the next tick.
    #[must_use]
    pub fn debt(&self) -> Duration {
        self.debt
    }
}
