#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use pfdo_mgz2img::{cli, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on verbosity level
    setup_logging(args.verbose)?;

    // Run the plugin or print the requested information
    cli::execute_command(&args)
}
