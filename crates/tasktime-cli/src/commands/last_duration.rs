//! Last-duration command for reporting the last completed session.

use std::fmt::Write;

use anyhow::{Context, Result};
use tasktime_core::{CompletedTask, Durations, TaskError, TaskName};
use tasktime_db::Database;

use super::Outcome;
use super::util::{format_duration, format_timestamp};

/// Runs the last-duration command.
pub fn run(db: &Database, task: &TaskName) -> Result<Outcome> {
    match Durations::new(db).fetch_last_completed(task) {
        Ok(completed) => Ok(Outcome::Done(format_completed(&completed))),
        Err(TaskError::NeverCompleted { .. }) => Ok(Outcome::Rejected(format!(
            "{task} has never been completed"
        ))),
        Err(err) => Err(err).context("fetching last completed session"),
    }
}

/// Formats the human-readable session summary.
pub fn format_completed(completed: &CompletedTask) -> String {
    let mut output = String::new();
    writeln!(output, "{}", completed.name).unwrap();
    writeln!(output, "  started:  {}", format_timestamp(completed.started)).unwrap();
    writeln!(output, "  finished: {}", format_timestamp(completed.finished)).unwrap();
    write!(output, "  duration: {}", format_duration(completed.duration)).unwrap();
    output
}
