//! Source of "today" for issuance and sale dates.

use chrono::Local;

use crate::date::BusinessDate;

/// Supplies the current business date.
pub trait Clock {
    fn today(&self) -> BusinessDate;
}

/// The host's local calendar date.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> BusinessDate {
        BusinessDate::new(Local::now().date_naive())
    }
}

/// A clock pinned to one day. Prefer this in tests for determinism.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub BusinessDate);

impl Clock for FixedClock {
    fn today(&self) -> BusinessDate {
        self.0
    }
}
