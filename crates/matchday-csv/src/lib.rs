//! CSV codec for the matchday warehouse.
//!
//! Converts the club's cleaned CSV exports into typed rows, one struct per
//! fact-table variant. Pure synchronous; no database dependencies.
//!
//! Headers are accepted in Spanish (the original exports) or English; see
//! the field attributes on [`SalesRow`], [`ExpensesRow`] and
//! [`BoxOfficeRow`]. Numeric cells that are empty or unreadable decode as
//! `None` — never an error and never zero.
//!
//! # Quick start
//!
//! ```no_run
//! use matchday_csv::read_sales;
//!
//! let data = std::fs::read_to_string("ventas_2024.csv").unwrap();
//! for row in read_sales(data.as_bytes()) {
//!   println!("{:?}", row.map(|r| r.subcategory));
//! }
//! ```

pub mod error;
mod rows;
pub mod value;

pub use error::{Error, Result};
pub use rows::{BoxOfficeRow, ExpensesRow, SalesRow};

use std::io;

use serde::de::DeserializeOwned;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Read sales rows from `reader`.
///
/// Each CSV record is decoded independently; a malformed record yields
/// `Err(…)` in the corresponding position without aborting the rest.
pub fn read_sales<R: io::Read>(reader: R) -> Vec<Result<SalesRow>> {
  read_rows(reader)
}

/// Read expense rows from `reader`. Same per-record error contract as
/// [`read_sales`].
pub fn read_expenses<R: io::Read>(reader: R) -> Vec<Result<ExpensesRow>> {
  read_rows(reader)
}

/// Read box-office rows from `reader`. Same per-record error contract as
/// [`read_sales`].
pub fn read_box_office<R: io::Read>(reader: R) -> Vec<Result<BoxOfficeRow>> {
  read_rows(reader)
}

fn read_rows<R: io::Read, T: DeserializeOwned>(reader: R) -> Vec<Result<T>> {
  csv::ReaderBuilder::new()
    .trim(csv::Trim::All)
    .from_reader(reader)
    .into_deserialize()
    .map(|record| record.map_err(Error::from))
    .collect()
}

// ─── Reader tests ────────────────────────────────────────────────────────────
