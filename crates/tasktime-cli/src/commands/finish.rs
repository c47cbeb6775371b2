//! Finish command for closing a task session.

use anyhow::{Context, Result};
use tasktime_core::{Clock, Durations, Finisher, TaskError, TaskName};
use tasktime_db::Database;

use super::Outcome;
use super::util::format_duration;

/// Runs the finish command.
pub fn run(db: &Database, clock: impl Clock, task: &TaskName) -> Result<Outcome> {
    match Finisher::new(db, db).with_clock(clock).finish(task) {
        Ok(_) => {}
        Err(TaskError::NotStarted { .. }) => {
            return Ok(Outcome::Rejected(format!("{task} not in progress")));
        }
        Err(err) => return Err(err).context("finishing task"),
    }

    let completed = Durations::new(db)
        .fetch_last_completed(task)
        .context("reading finished session")?;
    Ok(Outcome::Done(format!(
        "{task} finished after {}.",
        format_duration(completed.duration)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::start;
    use crate::commands::test_clock::at;

    use insta::assert_snapshot;

    #[test]
    fn finish_command_reports_session_length() {
        let db = Database::open_in_memory().unwrap();
        let task = TaskName::new("write-report").unwrap();
        start::run(&db, at(9, 0, 0), &task).unwrap();

        let Outcome::Done(message) = run(&db, at(9, 45, 0), &task).unwrap() else {
            panic!("expected finish to succeed");
        };

        assert_snapshot!(message, @"write-report finished after 45m 0s.");
    }

    #[test]
    fn finish_command_rejects_unstarted_task() {
        let db = Database::open_in_memory().unwrap();
        let task = TaskName::new("write-report").unwrap();

        let outcome = run(&db, at(9, 45, 0), &task).unwrap();

        assert_eq!(
            outcome,
            Outcome::Rejected("write-report not in progress".to_string())
        );
    }

    #[test]
    fn finish_command_rejects_second_finish() {
        let db = Database::open_in_memory().unwrap();
        let task = TaskName::new("write-report").unwrap();
        start::run(&db, at(9, 0, 0), &task).unwrap();
        run(&db, at(9, 45, 0), &task).unwrap();

        let outcome = run(&db, at(9, 50, 0), &task).unwrap();

        assert!(matches!(outcome, Outcome::Rejected(_)));
    }
}
