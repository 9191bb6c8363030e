//! Test clock — pins "now" so publication-date checks are reproducible.

use chrono::{DateTime, Utc};
use polls_core::clock::Clock;

/// A clock that always returns a fixed point in time. Tests seed questions
/// relative to the same instant the views compare against.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
