//! # pfdo_mgz2img
//!
//! A ChRIS `ds` plugin that runs the `pfdo_mgz2image` conversion engine over
//! an input directory tree. The plugin itself only declares flags, turns
//! them into one option map, starts the engine and reports elapsed time.
//!
//! ## Features
//!
//! - Declared parameter schema shared by the CLI, the engine command line
//!   and the JSON plugin descriptor
//! - One engine run per comma separated file filter
//! - Plugin host lifecycle flags (`--json`, `--meta`, `--savejson`,
//!   `--saveinputmeta`, `--saveoutputmeta`)
//!
//! ## Example
//!
//! ```no_run
//! use pfdo_mgz2img::core::{ExternalEngine, OptionMap, ConversionEngine};
//! use std::path::Path;
//!
//! let options = OptionMap::with_defaults(Path::new("in"), Path::new("out"));
//! let summary = ExternalEngine::new("pfdo_mgz2image", false).run(&options)?;
//! println!("Elapsed time = {:.6} seconds", summary.run_time);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level for a plugin verbosity level
pub const fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 | 3 => "debug",
        _ => "trace",
    }
}

/// Initialize logging with appropriate verbosity
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so stdout stays
/// free for JSON output.
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
