//! Aggregate function module for csvsift
//!
//! Parses `--aggregate` expressions of the form `<column>:<function>` and
//! reduces one column of the body to a single number.

use std::fmt;

use log::debug;

use crate::error::{CsvsiftError, CsvsiftResult};
use crate::table::{column_index, parse_number, Row};

/// Supported aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// Arithmetic mean
    Avg,
    /// Smallest value
    Min,
    /// Largest value
    Max,
}

impl AggregateFunction {
    /// Convert a function name to an AggregateFunction
    ///
    /// Names are matched exactly: `avg`, `min`, `max`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "avg" => Some(AggregateFunction::Avg),
            "min" => Some(AggregateFunction::Min),
            "max" => Some(AggregateFunction::Max),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }

    /// Execute the aggregate function on a non-empty slice of values
    ///
    /// A NaN anywhere in the input makes every function return NaN.
    fn execute(&self, values: &[f64]) -> f64 {
        match self {
            AggregateFunction::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregateFunction::Min => extreme(values, f64::min),
            AggregateFunction::Max => extreme(values, f64::max),
        }
    }
}

/// Reduce with `pick`, propagating NaN instead of skipping it
fn extreme(values: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    values[1..].iter().copied().fold(values[0], |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            pick(acc, v)
        }
    })
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed aggregation request
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSpec {
    pub column: String,
    pub function: AggregateFunction,
}

impl AggregateSpec {
    pub fn new(column: &str, function: AggregateFunction) -> Self {
        AggregateSpec {
            column: column.to_string(),
            function,
        }
    }
}

/// The single labeled value produced by an aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// `<column>_<function>`, e.g. `price_avg`
    pub label: String,
    pub value: f64,
}

/// Parse an `--aggregate` expression
///
/// # Arguments
/// * `expr` - The raw expression, e.g. `price:avg`
///
/// # Returns
/// * `Ok(None)` if no expression was given or it is empty
/// * `Ok(Some(AggregateSpec))` with the column name trimmed
/// * `Err(FormatError)` unless the expression is exactly two `:`-separated
///   parts and the second (trimmed) is `avg`, `min` or `max`
pub fn parse_aggregate(expr: Option<&str>) -> CsvsiftResult<Option<AggregateSpec>> {
    let expr = match expr {
        Some(e) if !e.is_empty() => e,
        _ => return Ok(None),
    };

    let parts: Vec<&str> = expr.split(':').collect();
    let function = match parts.as_slice() {
        [_, function] => AggregateFunction::from_name(function.trim()),
        _ => None,
    };

    match function {
        Some(function) => {
            let spec = AggregateSpec::new(parts[0].trim(), function);
            debug!("Parsed aggregation: {}:{}", spec.column, spec.function);
            Ok(Some(spec))
        }
        None => Err(CsvsiftError::FormatError(format!(
            "aggregation '{expr}' must have the form <column>:<avg|min|max>"
        ))),
    }
}

/// Reduce one column of the body to a single value
///
/// Every cell of the column must parse as a number. A missing cell in a
/// short row counts as non-numeric.
///
/// # Returns
/// * `Ok(None)` if no aggregation was requested
/// * `Ok(Some(AggregateResult))` with the computed value
/// * `Err(ColumnNotFound)` if the column isn't in the header
/// * `Err(NumericParseError)` if a cell is not a number or the body is empty
pub fn apply_aggregate(
    body: &[Row],
    header: &[String],
    spec: Option<&AggregateSpec>,
) -> CsvsiftResult<Option<AggregateResult>> {
    let spec = match spec {
        Some(s) => s,
        None => return Ok(None),
    };

    let col_idx = column_index(header, &spec.column)?;

    let values = body
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let cell = row.get(col_idx).map(String::as_str).unwrap_or_default();
            parse_number(cell).map_err(|e| {
                CsvsiftError::NumericParseError(format!(
                    "value '{}' in column '{}' (row {}) is not a number: {}",
                    cell,
                    spec.column,
                    row_idx + 1,
                    e
                ))
            })
        })
        .collect::<CsvsiftResult<Vec<f64>>>()?;

    if values.is_empty() {
        return Err(CsvsiftError::NumericParseError(format!(
            "no rows to compute {} of column '{}'",
            spec.function, spec.column
        )));
    }

    let result = AggregateResult {
        label: format!("{}_{}", spec.column, spec.function),
        value: spec.function.execute(&values),
    };
    debug!(
        "Computed {} = {} over {} rows",
        result.label,
        result.value,
        values.len()
    );

    Ok(Some(result))
}
