//! Periodic trigger that decouples lower-frequency consumers
//! (redraw, viewport refit, trace sampling) from the physics tick
//!
//! A `Cadence` with period `N` reports elapsed on every `N`th call to
//! [`Cadence::tick`], counting only calls, never wall-clock time.

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    remaining: u32, // ticks left before the next firing
    period: u32, // ticks per cycle, > 0
}

impl Cadence {
    pub fn new(period: u32) -> SimResult<Self> {
        if period == 0 {
            return Err(SimError::InvalidPeriod { period });
        }
        Ok(Self {
            remaining: period,
            period,
        })
    }

    /// Count one tick; true exactly once per full period, then the counter resets
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.period;
            return true;
        }
        false
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
