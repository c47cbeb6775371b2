//! Events command for inspecting the local event log.

use std::io::Write;

use anyhow::Result;
use tasktime_db::Database;

/// Writes every event, newest first, as a table or as JSONL.
pub fn run<W: Write>(writer: &mut W, db: &Database, json: bool) -> Result<()> {
    let events = db.fetch_all()?;

    if json {
        for event in &events {
            writeln!(writer, "{}", serde_json::to_string(event)?)?;
        }
        return Ok(());
    }

    if events.is_empty() {
        writeln!(writer, "No events recorded.")?;
        return Ok(());
    }

    for event in &events {
        writeln!(
            writer,
            "{}  {:<13}  {}  {}",
            event.created_at.to_rfc3339(),
            event.kind,
            event.id,
            event.task_name
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_clock::at;
    use crate::commands::{finish, start};

    use insta::assert_snapshot;
    use tasktime_core::TaskName;

    fn recorded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let task = TaskName::new("write-report").unwrap();
        start::run(&db, at(9, 0, 0), &task).unwrap();
        finish::run(&db, at(9, 45, 0), &task).unwrap();
        db
    }

    #[test]
    fn events_command_lists_newest_first() {
        let db = recorded_db();
        let mut output = Vec::new();
        run(&mut output, &db, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2025-01-29T09:45:00+00:00  task-finished  "));
        assert!(lines[0].ends_with("  write-report"));
        assert!(lines[1].starts_with("2025-01-29T09:00:00+00:00  task-started   "));
    }

    #[test]
    fn events_command_outputs_jsonl() {
        let db = recorded_db();
        let mut output = Vec::new();
        run(&mut output, &db, true).unwrap();

        let output = String::from_utf8(output).unwrap();
        let parsed: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["type"], "task-finished");
        assert_eq!(parsed[1]["type"], "task-started");
        assert_eq!(parsed[1]["task_name"], "write-report");
        assert_eq!(parsed[1]["created_at"], "2025-01-29T09:00:00Z");
    }

    #[test]
    fn events_command_on_empty_log() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();
        run(&mut output, &db, false).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @"No events recorded.");
    }
}
