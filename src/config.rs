//! Configuration module for csvsift
//!
//! Holds the settings for a single run. It is built once in `main` from
//! the parsed arguments and handed to the pipeline, so no stage reads
//! global state.

use std::path::{Path, PathBuf};

use crate::cli::CsvsiftArgs;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Input CSV file
    path: PathBuf,

    /// Raw `--where` expression, if any
    where_clause: Option<String>,

    /// Raw `--aggregate` expression, if any
    aggregate: Option<String>,

    /// Whether to show verbose output
    verbose: bool,
}

impl AppConfig {
    /// Create a new application configuration
    ///
    /// # Arguments
    /// * `path` - Input CSV file
    /// * `where_clause` - Optional filter expression
    /// * `aggregate` - Optional aggregation expression
    /// * `verbose` - Whether to show verbose output
    pub fn new(
        path: PathBuf,
        where_clause: Option<String>,
        aggregate: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            path,
            where_clause,
            aggregate,
            verbose,
        }
    }

    /// Get the input path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the filter expression
    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    /// Get the aggregation expression
    pub fn aggregate(&self) -> Option<&str> {
        self.aggregate.as_deref()
    }

    /// Default log filter, used when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl From<CsvsiftArgs> for AppConfig {
    fn from(args: CsvsiftArgs) -> Self {
        AppConfig::new(args.path, args.where_clause, args.aggregate, args.verbose)
    }
}
