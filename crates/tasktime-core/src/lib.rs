//! Core domain logic for tasktime.
//!
//! Task sessions are never stored directly. Every start and finish is an
//! immutable [`Event`] appended to a log, and the current state of a task is
//! derived by asking the log for its latest events:
//! - [`Starter`] opens a session unless one is already open
//! - [`Finisher`] closes the open session
//! - [`Durations`] reports the last completed session
//!
//! Storage is reached only through the [`EventStore`] and [`EventFinder`]
//! traits, so any engine (or an in-memory double) can back the operations.

mod clock;
mod durations;
mod error;
pub mod event;
pub mod event_type;
mod finishing;
mod starting;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use durations::Durations;
pub use error::{NotStartedReason, TaskError};
pub use event::{CompletedTask, Event};
pub use event_type::{EventType, UnknownEventType};
pub use finishing::Finisher;
pub use starting::Starter;
pub use store::{EventFinder, EventStore, StoreError};
pub use types::{EventId, TaskName, ValidationError};
