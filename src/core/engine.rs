//! Conversion engine delegate
//!
//! The wrapper never converts anything itself. It hands the option map to a
//! [`ConversionEngine`] and reports what comes back.

use crate::{core::options::OptionMap, error::Result, utils::process::ProcessRunner};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

/// Result of one engine run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub status: bool,
    /// Wall-clock duration in seconds
    pub run_time: f64,
    pub started_at: DateTime<Utc>,
    /// File filter the run was started with
    pub filter: String,
}

/// Anything that can perform a conversion run for an option map
pub trait ConversionEngine {
    fn run(&self, options: &OptionMap) -> Result<RunSummary>;
}

impl<E: ConversionEngine + ?Sized> ConversionEngine for &E {
    fn run(&self, options: &OptionMap) -> Result<RunSummary> {
        (**self).run(options)
    }
}

/// Runs the `pfdo_mgz2image` executable as a child process
#[derive(Debug)]
pub struct ExternalEngine {
    command: String,
    process_runner: ProcessRunner,
}

impl ExternalEngine {
    #[must_use]
    pub fn new(command: impl Into<String>, debug: bool) -> Self {
        Self {
            command: command.into(),
            process_runner: ProcessRunner::new(debug),
        }
    }
}

impl ConversionEngine for ExternalEngine {
    #[instrument(skip(self, options), fields(engine = %self.command))]
    fn run(&self, options: &OptionMap) -> Result<RunSummary> {
        let args = options.engine_args();
        let started_at = Utc::now();

        let outcome = self.process_runner.run_command(&self.command, &args)?;

        let summary = RunSummary {
            status: true,
            run_time: outcome.elapsed.as_secs_f64(),
            started_at,
            filter: options.get_str("filter").unwrap_or_default().to_string(),
        };
        info!("Conversion engine finished in {:.3}s", summary.run_time);
        Ok(summary)
    }
}
