//! Environment handling utilities
//!
//! The conversion engine is located through the environment so that
//! container images can ship it under a different name or path.

use std::env;
use tracing::debug;

/// Environment variable naming the conversion engine executable
pub const ENGINE_BIN_VAR: &str = "PFDO_MGZ2IMAGE_BIN";

/// Executable used when the environment does not name one
pub const DEFAULT_ENGINE_BIN: &str = "pfdo_mgz2image";

/// Resolve the engine executable from the process environment
pub fn engine_command() -> String {
    engine_command_from(|key| env::var(key).ok())
}

/// Resolve the engine executable through an arbitrary variable lookup
pub fn engine_command_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(ENGINE_BIN_VAR).map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => {
            debug!("Using conversion engine from {}: {}", ENGINE_BIN_VAR, value);
            value
        }
        _ => DEFAULT_ENGINE_BIN.to_string(),
    }
}
