//! tasktime CLI library.
//!
//! This crate provides the command-line interface over `tasktime-core` and the
//! `SQLite` event log in `tasktime-db`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
