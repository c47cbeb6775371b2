//! Fixed clock for command tests.

use chrono::{DateTime, TimeZone, Utc};
use tasktime_core::Clock;

pub struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock stopped at a time of day on 2025-01-29.
pub fn at(hour: u32, minute: u32, second: u32) -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2025, 1, 29, hour, minute, second)
            .unwrap(),
    )
}
