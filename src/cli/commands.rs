//! Command implementations for the CLI

use crate::{
    cli::{Args, Mode, manual},
    config::Config,
    core::{
        engine::{ConversionEngine, ExternalEngine, RunSummary},
        meta::{DESCRIPTOR_FILE, Descriptor, PluginMeta},
        runner::PluginRunner,
    },
    utils::fs::FileSystemUtils,
};
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument};

/// Execute the invocation described by the CLI arguments
#[instrument(skip(args))]
pub fn execute_command(args: &Args) -> anyhow::Result<()> {
    match args.mode() {
        Mode::Descriptor => execute_json_command(),
        Mode::SaveDescriptor(dir) => execute_savejson_command(&dir),
        Mode::Meta => execute_meta_command(),
        Mode::Manual => execute_manual_command(),
        Mode::Run => {
            print!("{}", manual::banner());
            let config = Config::from_args(args).context("Invalid plugin configuration")?;
            let engine = ExternalEngine::new(config.engine.command.clone(), config.debug());
            execute_run_command(&config, engine)?;
            Ok(())
        }
    }
}

/// Print the plugin descriptor
fn execute_json_command() -> anyhow::Result<()> {
    let descriptor = serde_json::to_string_pretty(&Descriptor::new())
        .context("Failed to encode plugin descriptor")?;
    println!("{descriptor}");
    Ok(())
}

/// Save the plugin descriptor into `dir`
fn execute_savejson_command(dir: &Path) -> anyhow::Result<()> {
    let target = dir.join(DESCRIPTOR_FILE);
    FileSystemUtils::new()
        .write_json(&target, &Descriptor::new())
        .context("Failed to save plugin descriptor")?;
    info!("Plugin descriptor saved to {}", target.display());
    Ok(())
}

/// Print plugin metadata
fn execute_meta_command() -> anyhow::Result<()> {
    let meta = serde_json::to_string_pretty(&PluginMeta::default())
        .context("Failed to encode plugin metadata")?;
    println!("{meta}");
    Ok(())
}

/// Print the manual page; the conversion engine is not started
fn execute_manual_command() -> anyhow::Result<()> {
    print!("{}", manual::banner());
    println!("{}", manual::SYNOPSIS);
    Ok(())
}

/// Run the conversion engine for a validated configuration
#[instrument(skip(config, engine))]
pub fn execute_run_command<E: ConversionEngine>(
    config: &Config,
    engine: E,
) -> anyhow::Result<Vec<RunSummary>> {
    info!(
        "Converting {} -> {}",
        config.input_dir.display(),
        config.output_dir.display()
    );

    let summaries = PluginRunner::new(engine)
        .run(config)
        .context("Conversion engine run failed")?;

    info!("Plugin finished after {} engine run(s)", summaries.len());
    Ok(summaries)
}
