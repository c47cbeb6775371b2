//! In-memory doubles shared by the unit tests.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::clock::{Clock, IdGenerator};
use crate::event::Event;
use crate::event_type::EventType;
use crate::store::{EventFinder, EventStore, StoreError};
use crate::types::{EventId, TaskName};

/// Vec-backed event log. Ties on `created_at` go to the later insert.
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: RefCell<Vec<Event>>,
    reject_writes: bool,
}

impl MemoryLog {
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: RefCell::new(events.into_iter().collect()),
            reject_writes: false,
        }
    }

    /// A log whose writes always fail.
    pub fn read_only(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            reject_writes: true,
            ..Self::with_events(events)
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn latest_matching(&self, filter: impl Fn(&Event) -> bool) -> Result<Event, StoreError> {
        self.events
            .borrow()
            .iter()
            .filter(|event| filter(event))
            .max_by_key(|event| event.created_at)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

impl EventStore for MemoryLog {
    fn store(&self, event: &Event) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::backend("log is read-only"));
        }
        let mut events = self.events.borrow_mut();
        if events.iter().any(|existing| existing.id == event.id) {
            return Err(StoreError::backend(format!("duplicate event ID {}", event.id)));
        }
        events.push(event.clone());
        Ok(())
    }
}

impl EventFinder for MemoryLog {
    fn latest_by_name(&self, task_name: &TaskName) -> Result<Event, StoreError> {
        self.latest_matching(|event| &event.task_name == task_name)
    }

    fn latest_by_name_type(
        &self,
        task_name: &TaskName,
        kind: EventType,
    ) -> Result<Event, StoreError> {
        self.latest_matching(|event| &event.task_name == task_name && event.kind == kind)
    }
}

/// A finder whose every read fails.
#[derive(Debug, Default)]
pub struct BrokenFinder;

impl EventFinder for BrokenFinder {
    fn latest_by_name(&self, _task_name: &TaskName) -> Result<Event, StoreError> {
        Err(StoreError::backend("connection reset"))
    }

    fn latest_by_name_type(
        &self,
        _task_name: &TaskName,
        _kind: EventType,
    ) -> Result<Event, StoreError> {
        Err(StoreError::backend("connection reset"))
    }
}

/// A clock that returns whatever it was last set to.
#[derive(Debug)]
pub struct ManualClock(Cell<DateTime<Utc>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Cell::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.0.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

/// Hands out `event_id(1)`, `event_id(2)`, ...
#[derive(Debug, Default)]
pub struct SequentialIds(Cell<u128>);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> EventId {
        let next = self.0.get() + 1;
        self.0.set(next);
        event_id(next)
    }
}

pub fn event_id(n: u128) -> EventId {
    EventId::from_uuid(Uuid::from_u128(n))
}

pub fn task(name: &str) -> TaskName {
    TaskName::new(name).unwrap()
}

/// A time of day on 2025-01-29.
pub fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 29, hour, minute, second)
        .unwrap()
}
