//! Console output for csvsift
//!
//! Renders either the aggregate result or the (filtered) rows as a grid:
//!
//! ```text
//! +---------------+-------+
//! | name          | price |
//! |---------------+-------|
//! | iphone 15 pro |   999 |
//! +---------------+-------+
//! ```
//!
//! Cells are printed exactly as read. A column whose cells are all numbers
//! is right aligned, any other column is left aligned. A cell holding line
//! breaks is spread over continuation lines of its row.
//!
//! Widths count Unicode scalar values, so double-width characters (CJK,
//! emoji) make their column look wider than its border.

use std::io::{self, Write};

use crate::aggregate::AggregateResult;
use crate::error::{CsvsiftError, CsvsiftResult};
use crate::table::classify;

/// Column titles used for the aggregate result table
pub const AGGREGATE_TITLES: [&str; 2] = ["keys", "value"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A fully materialised grid ready to be written
struct Grid {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
    aligns: Vec<Align>,
}

impl Grid {
    fn new(titles: &[String], rows: &[Vec<String>]) -> Self {
        // Ragged rows widen the grid instead of losing cells
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(titles.len()))
            .max()
            .unwrap_or(0);

        let pad = |cells: &[String]| -> Vec<String> {
            let mut padded = cells.to_vec();
            padded.resize(columns, String::new());
            padded
        };

        let titles = pad(titles);
        let rows: Vec<Vec<String>> = rows.iter().map(|r| pad(r.as_slice())).collect();

        let widths = (0..columns)
            .map(|i| {
                rows.iter()
                    .chain(std::iter::once(&titles))
                    .flat_map(|r| r[i].lines())
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let aligns = (0..columns)
            .map(|i| {
                let numeric = !rows.is_empty() && rows.iter().all(|r| classify(&r[i]).is_numeric());
                if numeric {
                    Align::Right
                } else {
                    Align::Left
                }
            })
            .collect();

        Grid {
            titles,
            rows,
            widths,
            aligns,
        }
    }

    fn write_rule<W: Write>(&self, out: &mut W, edge: char, joint: char) -> io::Result<()> {
        write!(out, "{edge}")?;
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                write!(out, "{joint}")?;
            }
            write!(out, "{}", "-".repeat(width + 2))?;
        }
        writeln!(out, "{edge}")
    }

    fn write_line<W: Write>(&self, out: &mut W, cells: &[String]) -> io::Result<()> {
        let split: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for n in 0..height {
            write!(out, "|")?;
            for ((lines, &width), align) in split.iter().zip(&self.widths).zip(&self.aligns) {
                let text = lines.get(n).copied().unwrap_or("");
                match align {
                    Align::Left => write!(out, " {text:<width$} |")?,
                    Align::Right => write!(out, " {text:>width$} |")?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_rule(out, '+', '+')?;
        self.write_line(out, &self.titles)?;
        self.write_rule(out, '|', '+')?;
        for row in &self.rows {
            self.write_line(out, row)?;
        }
        self.write_rule(out, '+', '+')
    }
}

/// Render the run's result
///
/// If an aggregate result is given it is rendered as a one-row table with
/// the `keys` and `value` titles, and the body is ignored. Otherwise the
/// header and body are rendered as they are.
///
/// Fails with `MissingHeader` if `header` is empty and no aggregate is given.
///
/// # Arguments
/// * `out` - Destination for the table
/// * `header` - Column titles
/// * `body` - Rows to print
/// * `aggregate` - Aggregate result which supersedes the rows
pub fn render<W: Write>(
    out: &mut W,
    header: &[String],
    body: &[Vec<String>],
    aggregate: Option<&AggregateResult>,
) -> CsvsiftResult<()> {
    let grid = match aggregate {
        Some(result) => {
            let titles: Vec<String> = AGGREGATE_TITLES.iter().map(|t| t.to_string()).collect();
            let row = vec![result.label.clone(), result.value.to_string()];
            Grid::new(&titles, &[row])
        }
        None if header.is_empty() => return Err(CsvsiftError::MissingHeader),
        None => Grid::new(header, body),
    };

    grid.write_to(out)?;
    out.flush()?;
    Ok(())
}
