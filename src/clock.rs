//! Time source for lease timestamps.
//!
//! Lease expiry is computed against whatever [`Clock`] the manager was built
//! with: [`SystemClock`] in production, [`ManualClock`] in tests and in the
//! simulated shell where time only moves when told to.

use crate::error::{EditLockError, Result};
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// A source of "now" for lease creation and expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when [`ManualClock::advance`] is called.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `by`.
    ///
    /// Fails without moving the clock if the result is out of range.
    pub fn advance(&self, by: Duration) -> Result<()> {
        let mut now = self.now.lock().unwrap_or_else(|poison| poison.into_inner());
        let next = now.checked_add_signed(by).ok_or_else(|| {
            EditLockError::UserError(format!("cannot advance clock past {} by {}", *now, by))
        })?;
        *now = next;
        Ok(())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}
