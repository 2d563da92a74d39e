use std::time::{Duration, Instant};

use super::schedule::TimedStep;
use crate::state::ViewModel;

/// Result of one [`RunDriver::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    /// More steps remain; the next one is due after this long.
    Pending(Duration),
    Finished,
}

/// Sequential scheduler over a fixed step list.
///
/// Polled from the frame loop with the current time, it applies every step
/// that has come due, in order, and never blocks. Due times accumulate from
/// the start instant, so late polls catch up without stretching the run.
#[derive(Debug, Clone)]
pub struct RunDriver {
    steps: Vec<TimedStep>,
    cursor: usize,
    next_due: Instant,
}

impl RunDriver {
    pub fn start(steps: Vec<TimedStep>, now: Instant) -> Self {
        Self {
            steps,
            cursor: 0,
            next_due: now,
        }
    }

    /// Apply all steps due at `now` to the view-model.
    pub fn poll(&mut self, now: Instant, view: &mut ViewModel) -> DriverStatus {
        while let Some(step) = self.steps.get(self.cursor) {
            if now < self.next_due {
                return DriverStatus::Pending(self.next_due - now);
            }
            log::debug!("run step {}: {:?}", self.cursor, step.action);
            view.apply(&step.action);
            self.next_due += step.hold;
            self.cursor += 1;
        }
        DriverStatus::Finished
    }
}
