//! Plugin run lifecycle
//!
//! Prepares the output directory, writes the host meta files, splits
//! multi-filter invocations and calls the conversion engine once per filter.

use crate::{
    config::Config,
    core::{
        engine::{ConversionEngine, RunSummary},
        meta::{self, INPUT_META_FILE, OUTPUT_META_FILE},
        options::OptionMap,
    },
    error::{PluginError, Result},
    utils::fs::FileSystemUtils,
};
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Drives one plugin invocation against a conversion engine
pub struct PluginRunner<E> {
    engine: E,
    fs_utils: FileSystemUtils,
}

impl<E: ConversionEngine> PluginRunner<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Run the plugin, reporting to stdout
    pub fn run(&self, config: &Config) -> Result<Vec<RunSummary>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(config, &mut out)
    }

    /// Run the plugin, reporting to `out`
    #[instrument(skip_all, fields(input = %config.input_dir.display()))]
    pub fn run_with_output<W: Write>(
        &self,
        config: &Config,
        out: &mut W,
    ) -> Result<Vec<RunSummary>> {
        self.fs_utils.create_dir_all(&config.output_dir)?;

        if config.host.save_input_meta {
            self.fs_utils
                .write_json(config.output_dir.join(INPUT_META_FILE), &config.options)?;
        }

        let runs = plan_runs(&config.options);
        info!("Starting {} conversion run(s)", runs.len());

        let mut summaries = Vec::with_capacity(runs.len());
        for (index, options) in runs.iter().enumerate() {
            debug!(
                "Run {} of {} with filter '{}'",
                index + 1,
                runs.len(),
                options.get_str("filter").unwrap_or_default()
            );

            let summary = self.engine.run(options)?;

            if config.host.print_elapsed_time {
                writeln!(out, "Elapsed time = {:.6} seconds", summary.run_time)
                    .map_err(|e| PluginError::file_system("write", "<stdout>", e))?;
            }
            summaries.push(summary);
        }

        if config.host.save_output_meta {
            self.fs_utils
                .write_json(config.output_dir.join(OUTPUT_META_FILE), &meta::output_meta())?;
        }

        Ok(summaries)
    }
}

/// Split an option map into one map per comma separated filter
///
/// Entries are passed on as written, surrounding spaces included. The `args`
/// option is split on `|` alongside; entry `i` belongs to filter `i`. A
/// single filter runs with the map unchanged.
pub fn plan_runs(options: &OptionMap) -> Vec<OptionMap> {
    let filter = options.get_str("filter").unwrap_or_default();
    let filters: Vec<&str> = filter.split(',').collect();

    if filters.len() <= 1 {
        return vec![options.clone()];
    }

    let per_filter_args: Vec<&str> = options
        .get_str("args")
        .unwrap_or_default()
        .split('|')
        .collect();

    filters
        .iter()
        .enumerate()
        .map(|(index, filter)| {
            let mut run = options.clone();
            run.set("filter", *filter);

            let extra = per_filter_args.get(index).copied().unwrap_or_default();
            if !extra.is_empty() {
                info!("Arguments for filter '{}': {}", filter, extra);
            }
            run.set("args", extra);
            run
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, HostConfig};
    use chrono::Utc;
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<OptionMap>>,
    }

    impl ConversionEngine for RecordingEngine {
        fn run(&self, options: &OptionMap) -> Result<RunSummary> {
            self.calls.borrow_mut().push(options.clone());
            Ok(RunSummary {
                status: true,
                run_time: 0.25,
                started_at: Utc::now(),
                filter: options.get_str("filter").unwrap_or_default().to_string(),
            })
        }
    }

    struct FailingEngine;

    impl ConversionEngine for FailingEngine {
        fn run(&self, _options: &OptionMap) -> Result<RunSummary> {
            Err(PluginError::process("pfdo_mgz2image", Some(3), "boom"))
        }
    }

    fn create_test_config(root: &Path, host: HostConfig) -> Config {
        let output_dir = root.join("out");
        Config {
            verbosity: 1,
            input_dir: root.to_path_buf(),
            output_dir: output_dir.clone(),
            options: OptionMap::with_defaults(root, &output_dir),
            engine: EngineConfig::default(),
            host,
        }
    }

    #[test]
    fn test_single_run_passes_options_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path(), HostConfig::default());
        let engine = RecordingEngine::default();
        let mut out = Vec::new();

        let summaries = PluginRunner::new(&engine)
            .run_with_output(&config, &mut out)
            .unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(engine.calls.borrow().as_slice(), &[config.options.clone()]);
        assert!(out.is_empty());
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn test_elapsed_time_printed() {
        let temp_dir = TempDir::new().unwrap();
        let host = HostConfig {
            print_elapsed_time: true,
            ..HostConfig::default()
        };
        let config = create_test_config(temp_dir.path(), host);
        let mut out = Vec::new();

        PluginRunner::new(RecordingEngine::default())
            .run_with_output(&config, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Elapsed time = 0.250000 seconds\n"
        );
    }

    #[test]
    fn test_multiple_filters_run_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = create_test_config(temp_dir.path(), HostConfig::default());
        config.options.set("filter", "aparc.mgz,aseg.mgz");
        config.options.set("args", "--normalize|--saveImages");
        let engine = RecordingEngine::default();

        PluginRunner::new(&engine)
            .run_with_output(&config, &mut Vec::new())
            .unwrap();

        let calls = engine.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].get_str("filter"), Some("aparc.mgz"));
        assert_eq!(calls[0].get_str("args"), Some("--normalize"));
        assert_eq!(calls[1].get_str("filter"), Some("aseg.mgz"));
        assert_eq!(calls[1].get_str("args"), Some("--saveImages"));
    }

    #[test]
    fn test_plan_runs_without_per_filter_args() {
        let mut options = OptionMap::with_defaults(Path::new("in"), Path::new("out"));
        options.set("filter", "a,b,c");

        let runs = plan_runs(&options);
        let filters: Vec<_> = runs.iter().map(|r| r.get_str("filter").unwrap()).collect();
        assert_eq!(filters, vec!["a", "b", "c"]);
        assert!(runs.iter().all(|r| r.get_str("args") == Some("")));
    }

    #[test]
    fn test_plan_runs_keeps_filter_spacing() {
        let mut options = OptionMap::with_defaults(Path::new("in"), Path::new("out"));
        options.set("filter", "a, b");

        let runs = plan_runs(&options);
        assert_eq!(runs[0].get_str("filter"), Some("a"));
        assert_eq!(runs[1].get_str("filter"), Some(" b"));
    }

    #[test]
    fn test_meta_files_written() {
        let temp_dir = TempDir::new().unwrap();
        let host = HostConfig {
            save_input_meta: true,
            save_output_meta: true,
            ..HostConfig::default()
        };
        let config = create_test_config(temp_dir.path(), host);

        PluginRunner::new(RecordingEngine::default())
            .run_with_output(&config, &mut Vec::new())
            .unwrap();

        let input_meta = std::fs::read_to_string(config.output_dir.join(INPUT_META_FILE)).unwrap();
        let parsed: OptionMap = serde_json::from_str(&input_meta).unwrap();
        assert_eq!(parsed, config.options);

        let output_meta =
            std::fs::read_to_string(config.output_dir.join(OUTPUT_META_FILE)).unwrap();
        assert_eq!(output_meta.trim(), "{}");
    }

    #[test]
    fn test_engine_error_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path(), HostConfig::default());

        let result = PluginRunner::new(FailingEngine).run_with_output(&config, &mut Vec::new());
        assert!(matches!(
            result,
            Err(PluginError::Process {
                exit_code: Some(3),
                ..
            })
        ));
    }
}
