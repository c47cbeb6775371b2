//! Reporting completed sessions.

use crate::error::TaskError;
use crate::event::CompletedTask;
use crate::event_type::EventType;
use crate::store::{EventFinder, StoreError};
use crate::types::TaskName;

/// Derives session lengths from the event log.
#[derive(Debug, Clone)]
pub struct Durations<F> {
    finder: F,
}

impl<F: EventFinder> Durations<F> {
    pub const fn new(finder: F) -> Self {
        Self { finder }
    }

    /// Returns the last completed session of `task_name`.
    ///
    /// The latest finish and the latest start are looked up independently. If
    /// the task was started again after its last finish, `started` belongs to
    /// that newer open session and the duration comes out negative.
    pub fn fetch_last_completed(&self, task_name: &TaskName) -> Result<CompletedTask, TaskError> {
        let finished = self
            .finder
            .latest_by_name_type(task_name, EventType::TaskFinished)
            .map_err(|err| match err {
                StoreError::NotFound => TaskError::NeverCompleted {
                    task: task_name.clone(),
                },
                err => TaskError::store("finding finished event", task_name.clone(), err),
            })?;

        // A finish is only recorded after a start, so not-found here means the
        // log is inconsistent.
        let started = self
            .finder
            .latest_by_name_type(task_name, EventType::TaskStarted)
            .map_err(|err| TaskError::store("finding started event", task_name.clone(), err))?;

        Ok(CompletedTask::new(
            task_name.clone(),
            started.created_at,
            finished.created_at,
        ))
    }
}
