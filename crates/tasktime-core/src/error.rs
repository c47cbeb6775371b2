//! Outcomes of the task operations.

use std::fmt;

use thiserror::Error;

use crate::store::StoreError;
use crate::types::TaskName;

/// Errors returned by [`Starter`](crate::Starter), [`Finisher`](crate::Finisher)
/// and [`Durations`](crate::Durations).
///
/// The first three variants are domain rejections that callers are expected to
/// branch on. [`TaskError::Store`] wraps anything that went wrong underneath,
/// including log inconsistencies.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The task already has an open session.
    #[error("task already started: {task}")]
    AlreadyStarted { task: TaskName },

    /// The task has no open session to finish.
    #[error("task not started: {task} ({reason})")]
    NotStarted {
        task: TaskName,
        reason: NotStartedReason,
    },

    /// The task has no finished session on record.
    #[error("task never completed: {task}")]
    NeverCompleted { task: TaskName },

    /// The event log failed or returned something unexpected.
    #[error("{action} for task {task}")]
    Store {
        action: &'static str,
        task: TaskName,
        #[source]
        source: StoreError,
    },
}

impl TaskError {
    pub(crate) const fn store(action: &'static str, task: TaskName, source: StoreError) -> Self {
        Self::Store {
            action,
            task,
            source,
        }
    }

    /// Whether this is an expected domain rejection rather than a failure.
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Store { .. })
    }
}

/// Why a finish was rejected.
///
/// Both cases share [`TaskError::NotStarted`]; the reason only sharpens the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotStartedReason {
    /// No event was ever recorded for the task.
    NeverStarted,
    /// The latest event already closed the session.
    AlreadyFinished,
}

impl fmt::Display for NotStartedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NeverStarted => "never started",
            Self::AlreadyFinished => "already finished",
        })
    }
}
