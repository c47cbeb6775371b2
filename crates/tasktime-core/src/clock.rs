//! Time and identity sources for new events.

use chrono::{DateTime, Utc};

use crate::types::EventId;

/// Supplies the timestamp for newly recorded events.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies identifiers for newly recorded events.
pub trait IdGenerator {
    fn next_id(&self) -> EventId;
}

/// Wall clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> EventId {
        EventId::new_v4()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> EventId {
        (**self).next_id()
    }
}
