//! Fact row types — one immutable row per observed transaction.
//!
//! A fact row references dimension surrogate keys plus nullable numeric
//! measures. Once inserted it is never updated; re-running a load may
//! duplicate fact rows, which the pipeline accepts. Only dimension
//! resolution is idempotent.

// ─── Per-table rows ──────────────────────────────────────────────────────────

/// One `fact_sales` row.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesFact {
  pub time_id:        i64,
  pub match_id:       Option<i64>,
  pub subcategory_id: i64,
  pub source_id:      i64,
  pub competition_id: i64,
  pub amount:         Option<f64>,
  pub quantity:       Option<i64>,
}

/// One `fact_box_office` row.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxOfficeFact {
  pub time_id:        i64,
  pub match_id:       Option<i64>,
  pub competition_id: i64,
  pub ticket_type_id: i64,
  pub tickets_sold:   Option<i64>,
  pub revenue:        Option<f64>,
}

/// One `fact_expenses` row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFact {
  pub time_id:        i64,
  pub subcategory_id: i64,
  pub source_id:      i64,
  pub competition_id: Option<i64>,
  pub cost:           Option<f64>,
  pub quantity:       Option<i64>,
}

// ─── FactRow ─────────────────────────────────────────────────────────────────

/// Input to [`WarehouseStore::insert_fact`](crate::store::WarehouseStore).
/// The row's own surrogate id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq)]
pub enum FactRow {
  Sales(SalesFact),
  BoxOffice(BoxOfficeFact),
  Expense(ExpenseFact),
}

impl FactRow {
  /// Which fact table this row belongs to.
  pub fn table(&self) -> FactTable {
    match self {
      Self::Sales(_) => FactTable::Sales,
      Self::BoxOffice(_) => FactTable::BoxOffice,
      Self::Expense(_) => FactTable::Expenses,
    }
  }
}

// ─── FactTable ───────────────────────────────────────────────────────────────

/// One of the three fact tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactTable {
  Sales,
  BoxOffice,
  Expenses,
}

impl FactTable {
  /// Every fact table, in schema order.
  pub const ALL: [Self; 3] = [Self::Sales, Self::BoxOffice, Self::Expenses];

  /// The backing table name.
  pub fn table(self) -> &'static str {
    match self {
      Self::Sales => "fact_sales",
      Self::BoxOffice => "fact_box_office",
      Self::Expenses => "fact_expenses",
    }
  }
}
