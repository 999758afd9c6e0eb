//! Pipeline orchestration for csvsift
//!
//! Runs the stages in order: read, parse condition, filter, parse
//! aggregation, aggregate, render. Output is only written once every
//! stage has succeeded, so a failed run prints no table.

use std::io::Write;

use log::debug;

use crate::aggregate::{apply_aggregate, parse_aggregate};
use crate::condition::parse_condition;
use crate::config::AppConfig;
use crate::csv_handler::read_csv;
use crate::error::CsvsiftResult;
use crate::filter::apply_filter;
use crate::presenter::render;

/// Execute one run described by `config`, writing the table to `out`
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> CsvsiftResult<()> {
    let (header, body) = read_csv(config.path())?;

    let comparison = parse_condition(config.where_clause())?;
    let filtered = apply_filter(&body, &header, comparison.as_ref())?;

    let spec = parse_aggregate(config.aggregate())?;
    let result = apply_aggregate(&filtered, &header, spec.as_ref())?;

    match &result {
        Some(r) => debug!("Rendering aggregate {}", r.label),
        None => debug!("Rendering {} rows", filtered.len()),
    }
    render(out, &header, &filtered, result.as_ref())
}
