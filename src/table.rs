//! Table module for csvsift
//!
//! Rows are kept exactly as they were read: every cell is a string. Typing
//! is decided on demand by [`classify`], which is the single place where a
//! cell is interpreted as a number or as text.

use crate::error::{CsvsiftError, CsvsiftResult};

/// Ordered column names, taken from the first record of the file
pub type Header = Vec<String>;

/// One data record; cells are untyped at rest
pub type Row = Vec<String>;

/// All data records, excluding the header
pub type Body = Vec<Row>;

/// The inferred type of a single cell or literal
///
/// A value is numeric when it parses as a floating point number,
/// otherwise it is kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 64-bit floating point number
    Numeric(f64),
    /// Anything that does not parse as a number
    Text(String),
}

impl CellValue {
    /// Whether the value was classified as a number
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Numeric(_))
    }
}

/// Parse a string as a floating point number
///
/// Surrounding whitespace is ignored. Decimal, exponent, `inf` and `nan`
/// forms are accepted.
pub fn parse_number(s: &str) -> Result<f64, std::num::ParseFloatError> {
    s.trim().parse::<f64>()
}

/// Classify a raw cell as numeric or text
pub fn classify(cell: &str) -> CellValue {
    match parse_number(cell) {
        Ok(n) => CellValue::Numeric(n),
        Err(_) => CellValue::Text(cell.to_string()),
    }
}

/// Resolve a column name to its position in the header
///
/// # Returns
/// * `Ok(usize)` - index of the first column with exactly this name
/// * `Err(ColumnNotFound)` - if no column has this name
pub fn column_index(header: &[String], name: &str) -> CsvsiftResult<usize> {
    header
        .iter()
        .position(|col| col == name)
        .ok_or_else(|| CsvsiftError::ColumnNotFound(name.to_string()))
}
