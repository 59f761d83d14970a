//! Source of "now" for past/upcoming show classification.

use std::fmt::Debug;

use chrono::{NaiveDateTime, Utc};

/// Supplies the current timestamp.
///
/// Services hold an `Arc<dyn Clock>` so tests can pin time with
/// [`FixedClock`].
pub trait Clock: Debug + Send + Sync {
    /// Current UTC wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
