//! Configuration management for the plugin
//!
//! Centralizes the run configuration and validates it before the conversion
//! engine is started.

use crate::{
    cli::Args,
    core::options::{LookupTable, OptionMap},
    error::PluginError,
    utils::{env, fs::FileSystemUtils},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Comma separated voxel values, e.g. `0,4, 41`
const LABEL_LIST_PATTERN: &str = r"^\s*-?\d+(\s*,\s*-?\d+)*\s*$";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Verbosity level, 0 to 5
    pub verbosity: u8,
    /// Input directory tree
    pub input_dir: PathBuf,
    /// Output directory tree
    pub output_dir: PathBuf,
    /// Option map handed to the engine
    pub options: OptionMap,
    /// Conversion engine configuration
    pub engine: EngineConfig,
    /// Host lifecycle configuration
    pub host: HostConfig,
}

/// Conversion engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Executable name or path
    pub command: String,
}

/// Plugin host lifecycle switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Print elapsed time after each engine run
    pub print_elapsed_time: bool,
    /// Write the option map to `input.meta.json`
    pub save_input_meta: bool,
    /// Write the output meta dictionary to `output.meta.json`
    pub save_output_meta: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: env::DEFAULT_ENGINE_BIN.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, PluginError> {
        let (Some(input_dir), Some(output_dir)) = (&args.inputdir, &args.outputdir) else {
            return Err(PluginError::config(
                "both <inputdir> and <outputdir> are required",
            ));
        };
        let options = OptionMap::from_args(args, input_dir, output_dir);

        let config = Self {
            verbosity: args.verbose,
            input_dir: input_dir.clone(),
            output_dir: output_dir.clone(),
            options,
            engine: EngineConfig {
                command: env::engine_command(),
            },
            host: HostConfig {
                print_elapsed_time: args.print_elapsed_time,
                save_input_meta: args.saveinputmeta,
                save_output_meta: args.saveoutputmeta,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Whether child processes and internals should log at debug level
    pub const fn debug(&self) -> bool {
        self.verbosity >= 2
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PluginError> {
        let fs_utils = FileSystemUtils::new();

        if !fs_utils.is_directory(&self.input_dir) {
            return Err(PluginError::validation(format!(
                "Input directory not found: {}",
                self.input_dir.display()
            )));
        }

        if self.output_dir.exists() && !fs_utils.is_directory(&self.output_dir) {
            return Err(PluginError::validation(format!(
                "Output path is not a directory: {}",
                self.output_dir.display()
            )));
        }

        let label_list = Regex::new(LABEL_LIST_PATTERN)
            .map_err(|e| PluginError::config(format!("invalid label list pattern: {e}")))?;

        for key in ["skipLabelValueList", "filterLabelValueList"] {
            let value = self.options.get_str(key).unwrap_or_default();
            if !value.is_empty() && !label_list.is_match(value) {
                return Err(PluginError::validation(format!(
                    "{key} must be a comma separated list of voxel values, got '{value}'"
                )));
            }
        }

        match self.options.lookup_table() {
            LookupTable::File(path) if !path.exists() => {
                warn!(
                    "Lookup table {} not found locally; passing it to the engine unchanged",
                    path.display()
                );
            }
            table => debug!("Lookup table: {:?}", table),
        }

        Ok(())
    }
}
