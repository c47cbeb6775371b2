//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasktime_core::TaskName;

/// Track how long you spend on named tasks.
///
/// Every start and finish is recorded as an event; durations are worked out
/// from the recorded events.
#[derive(Debug, Parser)]
#[command(name = "tasktime", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record that you have started working on a task.
    Start {
        /// Name of the task, e.g. write-report.
        task: TaskName,
    },

    /// Record that you have finished working on a task.
    Finish {
        /// Name of the task to finish.
        task: TaskName,
    },

    /// Show the duration of the last completed session of a task.
    LastDuration {
        /// Name of the task.
        task: TaskName,
    },

    /// List every recorded event, newest first.
    Events {
        /// Output JSON Lines instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_with_task_name() {
        let cli = Cli::try_parse_from(["tasktime", "start", "write-report"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Start { ref task }) if task.as_str() == "write-report"
        ));
    }

    #[test]
    fn last_duration_uses_kebab_case() {
        let cli = Cli::try_parse_from(["tasktime", "last-duration", "write-report"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::LastDuration { .. })));
    }

    #[test]
    fn rejects_blank_task_name() {
        assert!(Cli::try_parse_from(["tasktime", "finish", " "]).is_err());
    }

    #[test]
    fn requires_task_name() {
        assert!(Cli::try_parse_from(["tasktime", "start"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tasktime", "events", "--json", "-v", "-c", "/tmp/c.toml"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(cli.command, Some(Commands::Events { json: true })));
    }
}
