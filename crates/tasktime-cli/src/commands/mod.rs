//! CLI subcommand implementations.

use std::io::{self, Write};
use std::process::ExitCode;

pub mod events;
pub mod finish;
pub mod last_duration;
pub mod start;
mod util;

#[cfg(test)]
mod test_clock;

/// What a task command has to tell the user.
///
/// Domain rejections (already started, not in progress, never completed) are
/// not errors at this level; they end in a message and a non-zero exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(String),
    Rejected(String),
}

impl Outcome {
    /// Writes the message to stdout or stderr and picks the exit code.
    pub fn emit(&self) -> io::Result<ExitCode> {
        match self {
            Self::Done(message) => {
                writeln!(io::stdout().lock(), "{message}")?;
                Ok(ExitCode::SUCCESS)
            }
            Self::Rejected(message) => {
                writeln!(io::stderr().lock(), "{message}")?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
