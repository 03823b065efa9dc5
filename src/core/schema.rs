//! Declared parameter schema
//!
//! One table lists every option the plugin accepts. It is the source for the
//! keys of the option map, the engine argument vector and the JSON plugin
//! descriptor.

use serde::Serialize;

/// Value kind of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Free-form string (integer-like values included)
    Str,
    /// `store_true` switch
    Bool,
}

impl ParamKind {
    /// Host action name for this kind
    pub const fn action(self) -> &'static str {
        match self {
            Self::Str => "store",
            Self::Bool => "store_true",
        }
    }
}

/// A single declared parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Key in the option map
    pub dest: &'static str,
    /// Long flag as accepted on the command line
    pub flag: &'static str,
    pub short: Option<char>,
    pub kind: ParamKind,
    /// Default value; booleans use `"false"`
    pub default: &'static str,
    pub help: &'static str,
    /// Flag passed to the conversion engine, `None` if wrapper-only
    pub engine_flag: Option<&'static str>,
    /// Lifecycle flag of the plugin host, left out of the descriptor
    pub host: bool,
}

impl ParamSpec {
    const fn string(
        dest: &'static str,
        flag: &'static str,
        short: Option<char>,
        default: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            dest,
            flag,
            short,
            kind: ParamKind::Str,
            default,
            help,
            engine_flag: Some(flag),
            host: false,
        }
    }

    const fn switch(dest: &'static str, flag: &'static str, short: Option<char>, help: &'static str) -> Self {
        Self {
            dest,
            flag,
            short,
            kind: ParamKind::Bool,
            default: "false",
            help,
            engine_flag: Some(flag),
            host: false,
        }
    }

    const fn engine(mut self, engine_flag: &'static str) -> Self {
        self.engine_flag = Some(engine_flag);
        self
    }

    const fn local(mut self) -> Self {
        self.engine_flag = None;
        self
    }

    const fn host(mut self) -> Self {
        self.engine_flag = None;
        self.host = true;
        self
    }

    /// Whether the parameter is forwarded to the conversion engine
    pub const fn is_forwarded(&self) -> bool {
        self.engine_flag.is_some()
    }
}

/// Keys carrying the two positional directories
pub const INPUT_DIR_KEY: &str = "inputDir";
pub const OUTPUT_DIR_KEY: &str = "outputDir";

/// Every declared plugin parameter, in declaration order
pub const PARAMETERS: &[ParamSpec] = &[
    ParamSpec::string("inputFile", "--inputFile", Some('i'), "", "input file"),
    ParamSpec::string("filter", "--filterExpression", None, "", "string file filter"),
    ParamSpec::string(
        "analyzeFileIndex",
        "--analyzeFileIndex",
        None,
        "-1",
        "file index per directory to analyze",
    ),
    ParamSpec::switch("printElapsedTime", "--printElapsedTime", None, "print program run time")
        .local(),
    ParamSpec::string(
        "threads",
        "--threads",
        None,
        "0",
        "number of threads for innermost loop processing",
    ),
    ParamSpec::string(
        "outputLeafDir",
        "--outputLeafDir",
        None,
        "",
        "formatting spec for output leaf directory",
    ),
    ParamSpec::switch("test", "--test", None, "test"),
    ParamSpec::switch("man", "--man", Some('x'), "show full help").host(),
    ParamSpec::switch("synopsis", "--synopsis", Some('y'), "short synopsis").local(),
    ParamSpec::switch("json", "--json", None, "print the plugin descriptor as JSON").host(),
    ParamSpec::switch("overwrite", "--overwrite", None, "overwrite files if already existing"),
    ParamSpec::switch("followLinks", "--followLinks", None, "follow symbolic links"),
    ParamSpec::string("verbose", "--verbose", None, "1", "verbosity level for app")
        .engine("--verbosity"),
    ParamSpec::string("outputFileStem", "--outputFileStem", Some('o'), "output.jpg", "output file"),
    ParamSpec::string("outputFileType", "--outputFileType", Some('t'), "", "output image type"),
    ParamSpec::switch(
        "saveImages",
        "--saveImages",
        None,
        "store png images for each slice of mgz file",
    ),
    ParamSpec::string(
        "label",
        "--label",
        None,
        "label",
        "prefix a label to all the label directories",
    ),
    ParamSpec::switch(
        "normalize",
        "--normalize",
        Some('n'),
        "normalize the pixels of output image files",
    ),
    ParamSpec::string(
        "lookupTable",
        "--lookupTable",
        Some('l'),
        "__val__",
        "file contain text string lookups for voxel values",
    ),
    ParamSpec::switch(
        "skipAllLabels",
        "--skipAllLabels",
        None,
        "skip all labels and create only whole Volume images",
    ),
    ParamSpec::string(
        "skipLabelValueList",
        "--skipLabelValueList",
        Some('s'),
        "",
        "Comma separated list of voxel values to skip",
    ),
    ParamSpec::string(
        "filterLabelValueList",
        "--filterLabelValueList",
        Some('f'),
        "-1",
        "Comma separated list of voxel values to include",
    ),
    ParamSpec::string(
        "wholeVolume",
        "--wholeVolume",
        Some('w'),
        "wholeVolume",
        "Converts entire mgz volume to png/jpg instead of individually masked labels",
    ),
    ParamSpec::string("args", "--args", Some('a'), "", "Pass arguements for individual mgz")
        .local(),
];

/// Option-map keys in declaration order, positional directories first
pub fn option_keys() -> Vec<&'static str> {
    let mut keys = vec![INPUT_DIR_KEY, OUTPUT_DIR_KEY];
    keys.extend(PARAMETERS.iter().map(|p| p.dest));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dest_and_flags_are_unique() {
        let dests: HashSet<_> = PARAMETERS.iter().map(|p| p.dest).collect();
        let flags: HashSet<_> = PARAMETERS.iter().map(|p| p.flag).collect();
        let shorts: Vec<_> = PARAMETERS.iter().filter_map(|p| p.short).collect();
        let unique_shorts: HashSet<_> = shorts.iter().collect();

        assert_eq!(dests.len(), PARAMETERS.len());
        assert_eq!(flags.len(), PARAMETERS.len());
        assert_eq!(unique_shorts.len(), shorts.len());
    }

    #[test]
    fn test_switch_defaults_are_false() {
        for param in PARAMETERS.iter().filter(|p| p.kind == ParamKind::Bool) {
            assert_eq!(param.default, "false", "{}", param.dest);
        }
    }

    #[test]
    fn test_wrapper_only_parameters() {
        let local: Vec<_> = PARAMETERS
            .iter()
            .filter(|p| !p.is_forwarded())
            .map(|p| p.dest)
            .collect();
        assert_eq!(local, vec!["printElapsedTime", "man", "synopsis", "json", "args"]);
    }

    #[test]
    fn test_host_parameters() {
        let host: Vec<_> = PARAMETERS.iter().filter(|p| p.host).map(|p| p.dest).collect();
        assert_eq!(host, vec!["man", "json"]);
    }

    #[test]
    fn test_verbose_forwarded_as_verbosity() {
        let by_dest = |dest: &str| PARAMETERS.iter().find(|p| p.dest == dest).unwrap();
        assert_eq!(by_dest("verbose").engine_flag, Some("--verbosity"));
        assert_eq!(by_dest("filter").flag, "--filterExpression");
    }

    #[test]
    fn test_option_keys_start_with_directories() {
        let keys = option_keys();
        assert_eq!(&keys[..2], &["inputDir", "outputDir"]);
        assert_eq!(keys.len(), PARAMETERS.len() + 2);
    }
}
