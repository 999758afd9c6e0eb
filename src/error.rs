//! Error handling for csvsift
//!
//! This module defines the error type shared by every stage of the
//! pipeline. Every error is fatal: the binary reports it on stderr and
//! exits without printing a table.

use std::path::PathBuf;

use thiserror::Error;

/// CsvsiftError represents all possible errors that can occur in csvsift
///
/// The variants map onto the pipeline stages:
/// - reading the input file
/// - parsing the `--where` and `--aggregate` expressions
/// - resolving columns against the header
/// - converting cells to numbers during aggregation
#[derive(Error, Debug)]
pub enum CsvsiftError {
    /// The input file could not be opened
    #[error("Cannot open file '{}': {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data
    #[error("CSV parsing error: {0}")]
    ParseError(#[from] csv::Error),

    /// The input has no header record
    #[error("File has no header row")]
    MissingHeader,

    /// Malformed filter or aggregation expression
    #[error("Invalid expression: {0}")]
    FormatError(String),

    /// A referenced column doesn't exist in the header
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Aggregation target holds a non-numeric cell, or there is nothing to aggregate
    #[error("Aggregation error: {0}")]
    NumericParseError(String),

    /// Error writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for operations that can produce a CsvsiftError
pub type CsvsiftResult<T> = std::result::Result<T, CsvsiftError>;
