//! Filter condition parsing for csvsift
//!
//! A condition has the form `<column><op><value>` where `op` is one of
//! `>`, `<` or `=`. Operators are searched in that fixed priority order and
//! the expression is split at the first operator that appears anywhere in
//! it, which must then appear exactly once. This is a character search,
//! not a tokenizer: `name=a>b` splits at `>` because `>` has priority over
//! `=`, while `a>b>c` is rejected.

use std::fmt;

use log::debug;

use crate::error::{CsvsiftError, CsvsiftResult};

/// Supported comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
}

/// Operators in the order they are searched for
pub const OPERATORS: [Operator; 3] = [Operator::Greater, Operator::Less, Operator::Equal];

impl Operator {
    /// The character this operator is written as
    pub fn symbol(&self) -> char {
        match self {
            Operator::Greater => '>',
            Operator::Less => '<',
            Operator::Equal => '=',
        }
    }

    /// Apply the operator to two numbers
    pub fn compare(&self, left: f64, right: f64) -> bool {
        match self {
            Operator::Greater => left > right,
            Operator::Less => left < right,
            Operator::Equal => left == right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed filter condition
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Column the condition applies to
    pub column: String,
    /// Comparison operator
    pub operator: Operator,
    /// Right-hand side, kept as written (trimmed)
    pub literal: String,
}

impl Comparison {
    pub fn new(column: &str, operator: Operator, literal: &str) -> Self {
        Comparison {
            column: column.to_string(),
            operator,
            literal: literal.to_string(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.literal)
    }
}

/// Parse a `--where` expression
///
/// # Arguments
/// * `expr` - The raw expression, e.g. `price<500`
///
/// # Returns
/// * `Ok(None)` if no expression was given or it is empty
/// * `Ok(Some(Comparison))` with the column and literal trimmed
/// * `Err(FormatError)` if the expression contains none of `>`, `<`, `=`,
///   or if the operator that was found appears more than once
pub fn parse_condition(expr: Option<&str>) -> CsvsiftResult<Option<Comparison>> {
    let expr = match expr {
        Some(e) if !e.is_empty() => e,
        _ => return Ok(None),
    };

    for operator in OPERATORS {
        if let Some((column, literal)) = expr.split_once(operator.symbol()) {
            if literal.contains(operator.symbol()) {
                return Err(CsvsiftError::FormatError(format!(
                    "filter condition '{expr}' contains '{operator}' more than once"
                )));
            }
            let comparison = Comparison::new(column.trim(), operator, literal.trim());
            debug!("Parsed filter condition: {comparison}");
            return Ok(Some(comparison));
        }
    }

    Err(CsvsiftError::FormatError(format!(
        "filter condition '{expr}' must have the form <column><op><value> with op one of >, <, ="
    )))
}
