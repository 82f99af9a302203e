use crate::domain::ports::Clock;
use chrono::{Datelike, Utc};

/// Wall clock, read in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> u32 {
        Utc::now().month()
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    month: u32,
}

impl FixedClock {
    pub fn new(month: u32) -> Self {
        Self { month }
    }
}

impl Clock for FixedClock {
    fn current_month(&self) -> u32 {
        self.month
    }
}
