//! csvsift - filter and aggregate CSV files from the command line
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments
//! 2. Load the CSV file into memory
//! 3. Filter rows with the `--where` condition, if given
//! 4. Reduce a column with the `--aggregate` function, if given
//! 5. Print exactly one table to stdout
//!
//! Any failure aborts the run before anything is printed; the error is
//! reported on stderr and the process exits with a non-zero status.

use std::io;

use anyhow::{Context, Result};
use env_logger::Env;
use log::debug;

use csvsift::cli;
use csvsift::config::AppConfig;
use csvsift::pipeline;

fn main() -> Result<()> {
    let args = cli::parse_args()?;
    let config = AppConfig::from(args);

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter())).init();
    debug!("Configuration: {config:?}");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    pipeline::run(&config, &mut handle)
        .with_context(|| format!("Failed to process {}", config.path().display()))?;

    Ok(())
}
