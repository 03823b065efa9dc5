//! Core functionality of the plugin
//!
//! Declares the parameter schema, builds the option map, and hands it to
//! the conversion engine through the run lifecycle.

pub mod engine;
pub mod meta;
pub mod options;
pub mod runner;
pub mod schema;

pub use engine::{ConversionEngine, ExternalEngine, RunSummary};
pub use meta::{Descriptor, PluginMeta};
pub use options::{LookupTable, OptionMap, OptionValue};
pub use runner::PluginRunner;
