//! Opening task sessions.

use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::TaskError;
use crate::event::Event;
use crate::event_type::EventType;
use crate::store::{EventFinder, EventStore, StoreError};
use crate::types::TaskName;

/// Records `task-started` events.
///
/// A task can be started when it has no events yet or when its latest event is
/// a finish. The check and the append are not atomic: two callers starting the
/// same task at the same moment can both succeed.
#[derive(Debug, Clone)]
pub struct Starter<S, F, C = SystemClock, G = UuidGenerator> {
    store: S,
    finder: F,
    clock: C,
    ids: G,
}

impl<S: EventStore, F: EventFinder> Starter<S, F> {
    /// Creates a starter using the system clock and random IDs.
    pub const fn new(store: S, finder: F) -> Self {
        Self {
            store,
            finder,
            clock: SystemClock,
            ids: UuidGenerator,
        }
    }
}

impl<S, F, C, G> Starter<S, F, C, G> {
    /// Replaces the clock used to timestamp new events.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Starter<S, F, C2, G> {
        Starter {
            store: self.store,
            finder: self.finder,
            clock,
            ids: self.ids,
        }
    }

    /// Replaces the generator used to identify new events.
    pub fn with_ids<G2: IdGenerator>(self, ids: G2) -> Starter<S, F, C, G2> {
        Starter {
            store: self.store,
            finder: self.finder,
            clock: self.clock,
            ids,
        }
    }
}

impl<S, F, C, G> Starter<S, F, C, G>
where
    S: EventStore,
    F: EventFinder,
    C: Clock,
    G: IdGenerator,
{
    /// Starts a session for `task_name` and returns the recorded event.
    pub fn start(&self, task_name: &TaskName) -> Result<Event, TaskError> {
        match self.finder.latest_by_name(task_name) {
            Ok(latest) if latest.kind == EventType::TaskStarted => {
                return Err(TaskError::AlreadyStarted {
                    task: task_name.clone(),
                });
            }
            Ok(_) | Err(StoreError::NotFound) => {}
            Err(err) => {
                return Err(TaskError::store(
                    "finding latest event",
                    task_name.clone(),
                    err,
                ));
            }
        }

        let event = Event::started(self.ids.next_id(), task_name.clone(), self.clock.now());
        self.store
            .store(&event)
            .map_err(|err| TaskError::store("storing event", task_name.clone(), err))?;
        Ok(event)
    }
}
