//! Encoding helpers between core types and the plain-text representations
//! stored in SQLite columns.

use chrono::NaiveDate;
use matchday_core::dimension::Category;

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

// ─── Category ────────────────────────────────────────────────────────────────

/// Text stored in `dim_subcategory.category`. Must stay in sync with the
/// CHECK constraint in the schema.
pub fn encode_category(category: Category) -> &'static str {
  match category {
    Category::Sales => "sales",
    Category::Expenses => "expenses",
    Category::BoxOffice => "box_office",
  }
}
