//! File system utility functions
//!
//! Directory creation and JSON file output for the plugin's meta files.

use crate::error::{PluginError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Default)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
            .map_err(|e| PluginError::file_system("create directory", path, e))
    }

    /// Serialize `value` as pretty JSON and write it to `path`
    #[instrument(skip(self, value))]
    pub fn write_json<P, T>(&self, path: P, value: &T) -> Result<()>
    where
        P: AsRef<Path> + std::fmt::Debug,
        T: Serialize + ?Sized,
    {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(value).map_err(|e| {
            PluginError::serialization(format!("failed to encode {}", path.display()), e)
        })?;

        fs::write(path, content).map_err(|e| PluginError::file_system("write", path, e))?;
        debug!("Wrote JSON file: {}", path.display());
        Ok(())
    }

    /// Check that a path exists and is a directory
    pub fn is_directory<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }
}
