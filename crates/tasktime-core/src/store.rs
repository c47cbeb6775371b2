//! Storage seams for the event log.
//!
//! The log is append-only: [`EventStore`] is the only write path and exposes no
//! way to change or remove an event. [`EventFinder`] answers the two questions
//! the task operations need. Both return [`StoreError::NotFound`] rather than a
//! placeholder event when nothing matches, so "never happened" cannot be
//! confused with "happened long ago".
//!
//! When several matching events share the same `created_at`, implementations
//! must return the one that was stored last.

use thiserror::Error;

use crate::event::Event;
use crate::event_type::EventType;
use crate::types::TaskName;

/// Errors surfaced by an event log implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No event matched the query.
    #[error("event not found")]
    NotFound,
    /// The storage engine failed (I/O, encoding, constraint violation).
    #[error("storage backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StoreError {
    /// Wraps an engine-specific error.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Backend(err.into())
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Durable, append-only event log.
pub trait EventStore {
    /// Persists a fully populated event.
    ///
    /// Identifiers and timestamps are never generated here. A duplicate ID is a
    /// backend error. Callers decide whether to retry.
    fn store(&self, event: &Event) -> Result<(), StoreError>;
}

/// Read access to the event log.
pub trait EventFinder {
    /// The latest event for a task, of any type.
    fn latest_by_name(&self, task_name: &TaskName) -> Result<Event, StoreError>;

    /// The latest event of the given type for a task.
    fn latest_by_name_type(
        &self,
        task_name: &TaskName,
        kind: EventType,
    ) -> Result<Event, StoreError>;
}

impl<T: EventStore + ?Sized> EventStore for &T {
    fn store(&self, event: &Event) -> Result<(), StoreError> {
        (**self).store(event)
    }
}

impl<T: EventFinder + ?Sized> EventFinder for &T {
    fn latest_by_name(&self, task_name: &TaskName) -> Result<Event, StoreError> {
        (**self).latest_by_name(task_name)
    }

    fn latest_by_name_type(
        &self,
        task_name: &TaskName,
        kind: EventType,
    ) -> Result<Event, StoreError> {
        (**self).latest_by_name_type(task_name, kind)
    }
}
