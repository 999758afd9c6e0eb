//! Csvsift library crate
//!
//! This is the library component of csvsift, a command-line utility that
//! loads a CSV file, optionally filters its rows with a single column
//! comparison, optionally reduces a numeric column to one value, and prints
//! the result as a table. The library provides:
//!
//! - CSV loading into a header and string rows
//! - Parsing of `column<op>value` filter conditions (`>`, `<`, `=`)
//! - Row filtering with numeric or string semantics chosen per value
//! - Parsing of `column:function` aggregations (`avg`, `min`, `max`)
//! - Grid rendering of rows or of the aggregate result

pub mod aggregate;
pub mod cli;
pub mod condition;
pub mod config;
pub mod csv_handler;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod presenter;
pub mod table;
