//! Task events and the views derived from them.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::event_type::EventType;
use crate::types::{EventId, TaskName};

/// Something that happened to a task.
///
/// Events are written once and never changed. Every field is set by the code
/// that records the event; stores persist them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this event.
    pub id: EventId,
    /// Whether the task was started or finished.
    #[serde(rename = "type")]
    pub kind: EventType,
    /// The task this event belongs to.
    pub task_name: TaskName,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Builds a `task-started` event.
    pub const fn started(id: EventId, task_name: TaskName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: EventType::TaskStarted,
            task_name,
            created_at,
        }
    }

    /// Builds a `task-finished` event.
    pub const fn finished(id: EventId, task_name: TaskName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: EventType::TaskFinished,
            task_name,
            created_at,
        }
    }
}

/// The most recently completed session of a task.
///
/// Derived from the log on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTask {
    pub name: TaskName,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub duration: TimeDelta,
}

impl CompletedTask {
    pub fn new(name: TaskName, started: DateTime<Utc>, finished: DateTime<Utc>) -> Self {
        Self {
            name,
            started,
            finished,
            duration: finished - started,
        }
    }
}
