//! CLI argument parsing module for csvsift
//!
//! This module defines the command-line interface with the clap crate.
//! The tool takes one input file plus an optional filter and an optional
//! aggregation:
//!
//! ```text
//! csvsift --path phones.csv --where "brand=xiaomi" --aggregate "price:avg"
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for csvsift
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Filter and aggregate CSV files, printing the result as a table"
)]
pub struct CsvsiftArgs {
    /// Path to the CSV file to process
    ///
    /// The first line of the file is used as the header.
    #[clap(long, help = "Path to the CSV file")]
    pub path: PathBuf,

    /// Row filter - format: <column><op><value>
    ///
    /// `op` is one of `>`, `<` or `=`. Values that parse as numbers are
    /// compared numerically, anything else only supports `=`.
    /// Example: --where "price<500" or --where "brand=apple"
    #[clap(
        long = "where",
        value_name = "EXPR",
        help = "Filter condition, e.g. price<500"
    )]
    pub where_clause: Option<String>,

    /// Aggregation - format: <column>:<avg|min|max>
    ///
    /// Computed over the rows that pass the filter. When given, only the
    /// aggregate value is printed.
    /// Example: --aggregate "price:avg"
    #[clap(long, value_name = "EXPR", help = "Aggregation, e.g. price:avg")]
    pub aggregate: Option<String>,

    /// Enable verbose diagnostic output on stderr
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Parse command-line arguments into the CsvsiftArgs structure
///
/// Missing or malformed arguments are reported by clap, which prints usage
/// and exits with a non-zero status.
pub fn parse_args() -> Result<CsvsiftArgs> {
    Ok(CsvsiftArgs::parse())
}
