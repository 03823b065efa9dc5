//! Command-line argument parsing and validation
//!
//! Flag names follow the plugin host's camelCase convention so existing
//! pipelines keep working.

use clap::Parser;
use std::path::PathBuf;

/// Flags that make the positional directories optional
const INFO_FLAGS: [&str; 5] = ["man", "synopsis", "json", "meta", "savejson"];

/// Run pfdo_mgz2image at each path/file location in an input tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "pfdo_mgz2img")]
pub struct Args {
    /// Input file relative to <inputdir>; disables the directory walk
    #[arg(short = 'i', long = "inputFile", value_name = "FILE")]
    pub input_file: Option<String>,

    /// String filter selecting files of interest in the input tree
    #[arg(long = "filterExpression", value_name = "FILTER")]
    pub filter: Option<String>,

    /// File index per directory to analyze: -1 (all), m, f, l or N
    #[arg(
        long = "analyzeFileIndex",
        default_value = "-1",
        allow_hyphen_values = true,
        value_parser = parse_file_index
    )]
    pub analyze_file_index: String,

    /// Print program run time
    #[arg(long = "printElapsedTime")]
    pub print_elapsed_time: bool,

    /// Number of threads for innermost loop processing
    #[arg(long, default_value = "0", value_parser = parse_integer_like)]
    pub threads: String,

    /// Formatting spec for output leaf directory, e.g. 'preview-%s'
    #[arg(long = "outputLeafDir", value_name = "FORMAT")]
    pub output_leaf_dir: Option<String>,

    /// Test run, forwarded to the conversion engine
    #[arg(long)]
    pub test: bool,

    /// Show full help
    #[arg(short = 'x', long)]
    pub man: bool,

    /// Show brief help
    #[arg(short = 'y', long)]
    pub synopsis: bool,

    /// Print the JSON representation of this plugin
    #[arg(long)]
    pub json: bool,

    /// Print plugin metadata as JSON
    #[arg(long)]
    pub meta: bool,

    /// Save the JSON representation of this plugin into DIR
    #[arg(long, value_name = "DIR")]
    pub savejson: Option<PathBuf>,

    /// Save the option map to <outputdir>/input.meta.json
    #[arg(long)]
    pub saveinputmeta: bool,

    /// Save output meta data to <outputdir>/output.meta.json
    #[arg(long)]
    pub saveoutputmeta: bool,

    /// Overwrite files if already existing
    #[arg(long)]
    pub overwrite: bool,

    /// Follow symbolic links
    #[arg(long = "followLinks")]
    pub follow_links: bool,

    /// Verbosity level for app (0-5)
    #[arg(
        long = "verbose",
        visible_alias = "verbosity",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub verbose: u8,

    /// Output file stem; an extension selects the output type
    #[arg(short = 'o', long = "outputFileStem", default_value = "output.jpg")]
    pub output_file_stem: String,

    /// Output image type, overrides the stem's extension
    #[arg(short = 't', long = "outputFileType", value_name = "TYPE")]
    pub output_file_type: Option<String>,

    /// Store png images for each slice of the mgz file
    #[arg(long = "saveImages")]
    pub save_images: bool,

    /// Prefix a label to all the label directories
    #[arg(long, default_value = "label")]
    pub label: String,

    /// Normalize the pixels of output image files
    #[arg(short = 'n', long)]
    pub normalize: bool,

    /// Lookup table file, or __val__ / __fs__
    #[arg(short = 'l', long = "lookupTable", default_value = "__val__")]
    pub lookup_table: String,

    /// Skip all labels and create only whole volume images
    #[arg(long = "skipAllLabels")]
    pub skip_all_labels: bool,

    /// Comma separated list of voxel values to skip
    #[arg(short = 's', long = "skipLabelValueList", value_name = "VALUES")]
    pub skip_label_value_list: Option<String>,

    /// Comma separated list of voxel values to include (-1 for all)
    #[arg(
        short = 'f',
        long = "filterLabelValueList",
        default_value = "-1",
        allow_hyphen_values = true
    )]
    pub filter_label_value_list: String,

    /// Directory name for whole volume images
    #[arg(short = 'w', long = "wholeVolume", default_value = "wholeVolume")]
    pub whole_volume: String,

    /// '|' separated arguments, one entry per comma separated filter
    #[arg(short = 'a', long = "args", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Input directory
    #[arg(required_unless_present_any = INFO_FLAGS)]
    pub inputdir: Option<PathBuf>,

    /// Output directory
    #[arg(required_unless_present_any = INFO_FLAGS)]
    pub outputdir: Option<PathBuf>,
}

/// What an invocation asks the plugin to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the JSON descriptor
    Descriptor,
    /// Write the JSON descriptor into a directory
    SaveDescriptor(PathBuf),
    /// Print plugin metadata
    Meta,
    /// Print the manual page
    Manual,
    /// Run the conversion engine
    Run,
}

impl Args {
    /// Select the mode; information flags win over a run
    pub fn mode(&self) -> Mode {
        if self.json {
            Mode::Descriptor
        } else if let Some(dir) = &self.savejson {
            Mode::SaveDescriptor(dir.clone())
        } else if self.meta {
            Mode::Meta
        } else if self.man || self.synopsis {
            Mode::Manual
        } else {
            Mode::Run
        }
    }
}

/// Accept integer-like strings such as `0` or `8`
fn parse_integer_like(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    trimmed
        .parse::<u32>()
        .map(|_| trimmed.to_string())
        .map_err(|_| format!("'{value}' is not a non-negative integer"))
}

/// Accept `-1`, `m`, `f`, `l` or a non-negative index
fn parse_file_index(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    match trimmed {
        "-1" | "m" | "f" | "l" => Ok(trimmed.to_string()),
        _ => parse_integer_like(trimmed)
            .map_err(|_| format!("'{value}' must be -1, m, f, l or a file index")),
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
