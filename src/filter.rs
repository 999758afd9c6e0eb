//! Row filtering for csvsift
//!
//! The literal of a condition decides the filter mode: if it parses as a
//! number the filter compares numerically, otherwise it compares strings.
//! Each cell is then classified on its own, which gives three cases:
//!
//! | cell    | mode    | row kept when                                  |
//! |---------|---------|------------------------------------------------|
//! | numeric | numeric | `cell <op> literal` holds numerically          |
//! | numeric | text    | op is `=` and the raw cell equals the literal  |
//! | text    | either  | op is `=` and the raw cell equals the literal  |
//!
//! `>` and `<` never match a text cell, and never match a numeric cell
//! against a text literal. Such rows are dropped without error.

use std::borrow::Cow;

use log::debug;

use crate::condition::{Comparison, Operator};
use crate::error::CsvsiftResult;
use crate::table::{classify, column_index, CellValue, Row};

/// How the literal of a condition is compared
#[derive(Debug, Clone, PartialEq)]
pub enum FilterMode {
    Numeric(f64),
    Text(String),
}

impl FilterMode {
    pub fn from_literal(literal: &str) -> Self {
        match classify(literal) {
            CellValue::Numeric(n) => FilterMode::Numeric(n),
            CellValue::Text(s) => FilterMode::Text(s),
        }
    }
}

/// Decide whether a single cell satisfies the condition
fn cell_matches(cell: &str, operator: Operator, mode: &FilterMode, literal: &str) -> bool {
    match (classify(cell), mode) {
        (CellValue::Numeric(value), FilterMode::Numeric(target)) => {
            operator.compare(value, *target)
        }
        // Only '=' on the raw cell text can match here
        (CellValue::Numeric(_), FilterMode::Text(_)) => {
            operator == Operator::Equal && cell == literal
        }
        (CellValue::Text(_), _) => operator == Operator::Equal && cell == literal,
    }
}

/// Keep the rows of `body` that satisfy `comparison`
///
/// With no comparison the body is returned borrowed and untouched.
/// Otherwise a new body is built from the matching rows, in their
/// original order. A row too short to have the filtered column never
/// matches.
///
/// # Returns
/// * `Ok(Cow<[Row]>)` - the filtered rows
/// * `Err(ColumnNotFound)` - if the condition's column isn't in the header
pub fn apply_filter<'a>(
    body: &'a [Row],
    header: &[String],
    comparison: Option<&Comparison>,
) -> CsvsiftResult<Cow<'a, [Row]>> {
    let comparison = match comparison {
        Some(c) => c,
        None => return Ok(Cow::Borrowed(body)),
    };

    let col_idx = column_index(header, &comparison.column)?;
    let mode = FilterMode::from_literal(&comparison.literal);

    let filtered: Vec<Row> = body
        .iter()
        .filter(|row| {
            row.get(col_idx).map_or(false, |cell| {
                cell_matches(cell, comparison.operator, &mode, &comparison.literal)
            })
        })
        .cloned()
        .collect();

    debug!(
        "Filter '{}' kept {} of {} rows",
        comparison,
        filtered.len(),
        body.len()
    );

    Ok(Cow::Owned(filtered))
}
