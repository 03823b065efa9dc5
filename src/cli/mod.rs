//! Command-line interface module
//!
//! Provides argument parsing, the manual page and command execution.

pub mod args;
pub mod commands;
pub mod manual;

pub use args::{Args, Mode, parse_args};
pub use commands::execute_command;
