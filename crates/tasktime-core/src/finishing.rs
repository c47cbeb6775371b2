//! Closing task sessions.

use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::{NotStartedReason, TaskError};
use crate::event::Event;
use crate::event_type::EventType;
use crate::store::{EventFinder, EventStore, StoreError};
use crate::types::TaskName;

/// Records `task-finished` events.
///
/// Mirrors [`Starter`](crate::Starter): a task can only be finished while its
/// latest event is a start.
#[derive(Debug, Clone)]
pub struct Finisher<S, F, C = SystemClock, G = UuidGenerator> {
    store: S,
    finder: F,
    clock: C,
    ids: G,
}

impl<S: EventStore, F: EventFinder> Finisher<S, F> {
    pub const fn new(store: S, finder: F) -> Self {
        Self {
            store,
            finder,
            clock: SystemClock,
            ids: UuidGenerator,
        }
    }
}

impl<S, F, C, G> Finisher<S, F, C, G> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Finisher<S, F, C2, G> {
        Finisher {
            store: self.store,
            finder: self.finder,
            clock,
            ids: self.ids,
        }
    }

    pub fn with_ids<G2: IdGenerator>(self, ids: G2) -> Finisher<S, F, C, G2> {
        Finisher {
            store: self.store,
            finder: self.finder,
            clock: self.clock,
            ids,
        }
    }
}

impl<S, F, C, G> Finisher<S, F, C, G>
where
    S: EventStore,
    F: EventFinder,
    C: Clock,
    G: IdGenerator,
{
    /// Finishes the open session for `task_name` and returns the recorded event.
    pub fn finish(&self, task_name: &TaskName) -> Result<Event, TaskError> {
        let reason = match self.finder.latest_by_name(task_name) {
            Ok(latest) if latest.kind == EventType::TaskStarted => None,
            Ok(_) => Some(NotStartedReason::AlreadyFinished),
            Err(StoreError::NotFound) => Some(NotStartedReason::NeverStarted),
            Err(err) => {
                return Err(TaskError::store(
                    "finding latest event",
                    task_name.clone(),
                    err,
                ));
            }
        };
        if let Some(reason) = reason {
            return Err(TaskError::NotStarted {
                task: task_name.clone(),
                reason,
            });
        }

        let event = Event::finished(self.ids.next_id(), task_name.clone(), self.clock.now());
        self.store
            .store(&event)
            .map_err(|err| TaskError::store("storing event", task_name.clone(), err))?;
        Ok(event)
    }
}
