//! Cell-level coercion rules.
//!
//! The exports are "clean" only loosely: numeric cells may be empty, `NaN`,
//! or carry a float rendering of a count ("5.0"). The rules here turn
//! anything unusable into `None` so a bad measure never fails a row.

use chrono::{Datelike, NaiveDate};

/// Parse a monetary measure. Empty and non-finite cells read as `None`.
pub fn coerce_amount(raw: &str) -> Option<f64> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count measure. Accepts integers and whole-number floats ("5"
/// and "5.0" both read as 5); anything else reads as `None`.
pub fn coerce_quantity(raw: &str) -> Option<i64> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  if let Ok(n) = raw.parse::<i64>() {
    return Some(n);
  }
  let f = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
  (f.fract() == 0.0).then_some(f as i64)
}

/// Parse a date cell. ISO `YYYY-MM-DD` first, then the `DD/MM/YYYY` form
/// the older exports used.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
    .ok()
}

/// English month name for `date`, used when an export omits its month
/// column.
pub fn month_name(date: NaiveDate) -> &'static str {
  const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
  ];
  MONTHS[date.month0() as usize]
}
