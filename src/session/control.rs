//! Step pacing for the driver loop.

use std::thread;
use std::time::Duration;

use crate::error::Result;

/// What the driver should do before the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSignal {
    /// Run one more tick.
    Advance,
    /// Stop the session now.
    Abort,
}

/// Source of step signals.
///
/// Manual stepping blocks inside [`StepControl::next_signal`] until the
/// user answers; automatic stepping returns immediately.
pub trait StepControl {
    /// Block until the next tick may run.
    fn next_signal(&mut self) -> Result<StepSignal>;
}

/// Advances every tick, optionally sleeping in between.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoStep {
    delay: Option<Duration>,
}

impl AutoStep {
    /// No delay between ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep `delay` before each tick.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }
}

impl StepControl for AutoStep {
    fn next_signal(&mut self) -> Result<StepSignal> {
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        Ok(StepSignal::Advance)
    }
}

/// Advances a fixed number of ticks, then aborts.
#[derive(Clone, Copy, Debug)]
pub struct StepBudget {
    remaining: u64,
}

impl StepBudget {
    /// Allow `ticks` ticks before aborting.
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl StepControl for StepBudget {
    fn next_signal(&mut self) -> Result<StepSignal> {
        if self.remaining == 0 {
            return Ok(StepSignal::Abort);
        }
        self.remaining -= 1;
        Ok(StepSignal::Advance)
    }
}
