//! Start command for opening a task session.

use anyhow::{Context, Result};
use tasktime_core::{Clock, Starter, TaskError, TaskName};
use tasktime_db::Database;

use super::Outcome;

/// Runs the start command.
pub fn run(db: &Database, clock: impl Clock, task: &TaskName) -> Result<Outcome> {
    match Starter::new(db, db).with_clock(clock).start(task) {
        Ok(_) => Ok(Outcome::Done(format!(
            "{task} started. Run `tasktime finish {task}` when you have finished work."
        ))),
        Err(TaskError::AlreadyStarted { .. }) => {
            Ok(Outcome::Rejected(format!("{task} already in progress")))
        }
        Err(err) => Err(err).context("starting task"),
    }
}
