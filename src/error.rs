//! Error types for the plugin wrapper
//!
//! The wrapper has no recovery logic of its own; these variants only carry
//! enough context for the failure to be reported before the process exits.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the plugin
#[derive(Error, Debug)]
pub enum PluginError {
    /// The conversion engine (or another child process) failed
    #[error("Process error: {command} failed: {message}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding of descriptors, metadata or option maps
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl PluginError {
    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        let message = if source.kind() == std::io::ErrorKind::NotFound {
            "executable not found on PATH".to_string()
        } else {
            format!("failed to execute command: {source}")
        };

        Self::Process {
            command: command.into(),
            exit_code: None,
            message,
            source: Some(source),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PluginError>;
