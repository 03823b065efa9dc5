//! Plugin metadata and JSON descriptor
//!
//! These are the values the plugin host reads when registering the plugin:
//! identity, resource limits and the declared parameter list.

use crate::core::schema::{PARAMETERS, ParamKind, ParamSpec};
use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the descriptor file written by `--savejson`
pub const DESCRIPTOR_FILE: &str = "pfdo_mgz2img.json";
/// Input meta file written by `--saveinputmeta`
pub const INPUT_META_FILE: &str = "input.meta.json";
/// Output meta file written by `--saveoutputmeta`
pub const OUTPUT_META_FILE: &str = "output.meta.json";

/// Static plugin identity and resource limits
#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    #[serde(rename = "type")]
    pub plugin_type: &'static str,
    pub icon: &'static str,
    pub authors: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub documentation: &'static str,
    pub license: &'static str,
    pub version: &'static str,
    pub selfpath: &'static str,
    pub selfexec: &'static str,
    pub execshell: &'static str,
    pub max_number_of_workers: u32,
    pub min_number_of_workers: u32,
    pub max_memory_limit: &'static str,
    pub min_memory_limit: &'static str,
    pub max_cpu_limit: &'static str,
    pub min_cpu_limit: &'static str,
    pub max_gpu_limit: u32,
    pub min_gpu_limit: u32,
}

impl Default for PluginMeta {
    fn default() -> Self {
        Self {
            plugin_type: "ds",
            icon: "",
            authors: "FNNDSC <dev@babyMRI.org>",
            title: "A ChRIS plugin app to run the utility: pfdo_mgz2image",
            category: "",
            description: "An app to run pfdo_mgz2image over an input directory tree",
            documentation: "http://wiki",
            license: "Opensource (MIT)",
            version: env!("CARGO_PKG_VERSION"),
            selfpath: "/usr/local/bin",
            selfexec: "pfdo_mgz2img",
            execshell: "",
            max_number_of_workers: 1,
            min_number_of_workers: 1,
            max_memory_limit: "",
            min_memory_limit: "",
            max_cpu_limit: "",
            min_cpu_limit: "",
            max_gpu_limit: 0,
            min_gpu_limit: 0,
        }
    }
}

/// One entry of the descriptor's `parameters` list
#[derive(Debug, Clone, Serialize)]
pub struct ParamDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub optional: bool,
    pub flag: &'static str,
    pub short_flag: String,
    pub action: &'static str,
    pub help: &'static str,
    pub default: Value,
    pub ui_exposed: bool,
}

impl From<&ParamSpec> for ParamDescriptor {
    fn from(param: &ParamSpec) -> Self {
        let default = match param.kind {
            ParamKind::Bool => Value::Bool(false),
            ParamKind::Str => Value::String(param.default.to_string()),
        };

        Self {
            name: param.dest,
            kind: param.kind,
            optional: true,
            flag: param.flag,
            short_flag: param.short.map(|c| format!("-{c}")).unwrap_or_default(),
            action: param.kind.action(),
            help: param.help,
            default,
            ui_exposed: true,
        }
    }
}

/// Full JSON representation of the plugin
#[derive(Debug, Clone, Serialize)]
pub struct Descriptor {
    #[serde(flatten)]
    pub meta: PluginMeta,
    pub parameters: Vec<ParamDescriptor>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self {
            meta: PluginMeta::default(),
            parameters: PARAMETERS
                .iter()
                .filter(|p| !p.host)
                .map(ParamDescriptor::from)
                .collect(),
        }
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new()
    }
}

/// Key/value hints for downstream plugins, saved with `--saveoutputmeta`
pub fn output_meta() -> Map<String, Value> {
    Map::new()
}
