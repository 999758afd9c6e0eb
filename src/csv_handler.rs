//! CSV file handling module for csvsift
//!
//! Loads a comma-separated file into a header and a body of string rows.
//! The first record is the header; every following record is a row.
//! No schema validation is done: rows with a different number of fields
//! than the header are passed through as they are.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{CsvsiftError, CsvsiftResult};
use crate::table::{Body, Header};

/// Load a CSV file into a header and body
///
/// The file handle is dropped as soon as the records have been read,
/// including when reading fails part way.
///
/// # Arguments
/// * `path` - Path of the CSV file to read
///
/// # Returns
/// * `Ok((Header, Body))` if the file was read and parsed
/// * `Err(FileError)` if the file could not be opened
/// * `Err(ParseError)` if the file contents are not valid CSV
/// * `Err(MissingHeader)` if the file holds no records
///
/// # Example
/// ```no_run
/// # use csvsift::csv_handler::read_csv;
/// # use csvsift::error::CsvsiftResult;
/// # fn example() -> CsvsiftResult<()> {
/// let (header, body) = read_csv("data/phones.csv")?;
/// println!("{} columns, {} rows", header.len(), body.len());
/// # Ok(())
/// # }
/// ```
pub fn read_csv<P: AsRef<Path>>(path: P) -> CsvsiftResult<(Header, Body)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CsvsiftError::FileError {
        path: path.to_path_buf(),
        source,
    })?;

    let (header, body) = read_csv_from_reader(BufReader::new(file))?;
    debug!(
        "Loaded {} columns and {} rows from {}",
        header.len(),
        body.len(),
        path.display()
    );

    Ok((header, body))
}

/// Parse CSV data from any reader
///
/// Fails with `MissingHeader` if the input holds no records at all.
pub fn read_csv_from_reader<R: Read>(reader: R) -> CsvsiftResult<(Header, Body)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = csv_reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Header>();
    if header.is_empty() {
        return Err(CsvsiftError::MissingHeader);
    }

    let mut body = Body::new();
    for result in csv_reader.records() {
        let record = result?;
        body.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok((header, body))
}
