//! Process execution utilities
//!
//! Runs the conversion engine as a child process with inherited standard
//! streams, so its own progress output reaches the plugin log unchanged.

use crate::error::{PluginError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

/// Outcome of a successful process execution
#[derive(Debug, Clone, Copy)]
pub struct ProcessOutcome {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Wall-clock time between spawn and exit
    pub elapsed: Duration,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Render a command line for logs and error messages
    pub fn command_line(command: &str, args: &[String]) -> String {
        if args.is_empty() {
            return command.to_string();
        }
        format!("{} {}", command, args.join(" "))
    }

    /// Run a command with arguments, inheriting stdout/stderr
    #[instrument(skip(self, args))]
    pub fn run_command(&self, command: &str, args: &[String]) -> Result<ProcessOutcome> {
        let cmd_str = Self::command_line(command, args);

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let started = Instant::now();
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| PluginError::spawn(cmd_str.clone(), e))?;
        let elapsed = started.elapsed();

        if !status.success() {
            let exit_code = status.code();
            return Err(PluginError::process(
                cmd_str,
                exit_code,
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        debug!("Command completed successfully in {:?}", elapsed);
        Ok(ProcessOutcome {
            exit_code: status.code(),
            elapsed,
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}
