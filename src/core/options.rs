//! Option map handed to the conversion engine
//!
//! A flat `name -> scalar` record holding every declared parameter plus the
//! two positional directories. Integer-like values travel as strings, the
//! way the engine receives them.

use crate::{
    cli::Args,
    core::schema::{INPUT_DIR_KEY, OUTPUT_DIR_KEY, PARAMETERS, ParamKind},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Sentinel meaning "name label directories by voxel value"
pub const LUT_VOXEL_VALUES: &str = "__val__";
/// Sentinel meaning "use the engine's bundled FreeSurfer LUT"
pub const LUT_FREESURFER: &str = "__fs__";

/// A scalar option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Flat configuration record passed by value to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<String, OptionValue>);

impl OptionMap {
    /// Map holding every declared default for the given directories
    pub fn with_defaults(input_dir: &Path, output_dir: &Path) -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            INPUT_DIR_KEY.to_string(),
            OptionValue::Str(input_dir.display().to_string()),
        );
        map.insert(
            OUTPUT_DIR_KEY.to_string(),
            OptionValue::Str(output_dir.display().to_string()),
        );

        for param in PARAMETERS {
            let value = match param.kind {
                ParamKind::Bool => OptionValue::Bool(false),
                ParamKind::Str => OptionValue::Str(param.default.to_string()),
            };
            map.insert(param.dest.to_string(), value);
        }

        Self(map)
    }

    /// Build the map from parsed command line arguments
    pub fn from_args(args: &Args, input_dir: &Path, output_dir: &Path) -> Self {
        let mut map = Self::with_defaults(input_dir, output_dir);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        map.set("inputFile", text(&args.input_file));
        map.set("filter", text(&args.filter));
        map.set("analyzeFileIndex", args.analyze_file_index.as_str());
        map.set("printElapsedTime", args.print_elapsed_time);
        map.set("threads", args.threads.as_str());
        map.set("outputLeafDir", text(&args.output_leaf_dir));
        map.set("test", args.test);
        map.set("man", args.man);
        map.set("synopsis", args.synopsis);
        map.set("json", args.json);
        map.set("overwrite", args.overwrite);
        map.set("followLinks", args.follow_links);
        map.set("verbose", args.verbose.to_string());
        map.set("outputFileStem", args.output_file_stem.as_str());
        map.set("outputFileType", text(&args.output_file_type));
        map.set("saveImages", args.save_images);
        map.set("label", args.label.as_str());
        map.set("normalize", args.normalize);
        map.set("lookupTable", args.lookup_table.as_str());
        map.set("skipAllLabels", args.skip_all_labels);
        map.set("skipLabelValueList", text(&args.skip_label_value_list));
        map.set("filterLabelValueList", args.filter_label_value_list.as_str());
        map.set("wholeVolume", args.whole_volume.as_str());
        map.set("args", text(&args.args));

        map
    }

    /// Replace the value of a declared key
    ///
    /// Keys outside the declared schema are ignored so the map never grows
    /// beyond it.
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        match self.0.get_mut(key) {
            Some(slot) => *slot = value.into(),
            None => warn!("Ignoring undeclared option key: {}", key),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// String value of `key`, `None` if absent or boolean
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(OptionValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    /// Boolean value of `key`; absent or string keys read as `false`
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(OptionValue::Bool(true)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Command line for the conversion engine
    ///
    /// Directories come first, then every forwarded parameter in declaration
    /// order. False switches and empty strings are left out.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        for key in [INPUT_DIR_KEY, OUTPUT_DIR_KEY] {
            if let Some(dir) = self.get_str(key) {
                args.push(format!("--{key}"));
                args.push(dir.to_string());
            }
        }

        for param in PARAMETERS {
            let Some(flag) = param.engine_flag else {
                continue;
            };
            match self.0.get(param.dest) {
                Some(OptionValue::Bool(true)) => args.push(flag.to_string()),
                Some(OptionValue::Str(value)) if !value.is_empty() => {
                    args.push(flag.to_string());
                    args.push(value.clone());
                }
                _ => {}
            }
        }

        args
    }

    /// Lookup table selection
    pub fn lookup_table(&self) -> LookupTable {
        LookupTable::parse(self.get_str("lookupTable").unwrap_or(LUT_VOXEL_VALUES))
    }
}

/// How voxel labels are named in the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTable {
    /// `__val__`: directories are named by voxel value
    VoxelValues,
    /// `__fs__`: the FreeSurfer table bundled with the engine
    FreeSurfer,
    /// A FreeSurfer-format table on disk
    File(PathBuf),
}

impl LookupTable {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | LUT_VOXEL_VALUES => Self::VoxelValues,
            LUT_FREESURFER => Self::FreeSurfer,
            path => Self::File(PathBuf::from(path)),
        }
    }
}
