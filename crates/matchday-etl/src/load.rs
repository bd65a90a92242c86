//! The fact loader: typed rows in, dimension resolution, fact rows out.

use chrono::Datelike;
use matchday_core::{
  dimension::{Category, DimensionValue, SubcategoryValue, TimeValue},
  fact::{BoxOfficeFact, ExpenseFact, FactRow, SalesFact},
  store::WarehouseStore,
};
use matchday_csv::{
  BoxOfficeRow, ExpensesRow, SalesRow,
  value::{month_name, parse_date},
};
use thiserror::Error;
use tracing::warn;

use crate::{Error, Result, resolve::Resolver};

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Outcome of one file load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
  /// Records read from the file, unreadable ones included.
  pub rows:     usize,
  /// Fact rows appended to the store.
  pub inserted: usize,
  /// Records dropped because they could not be decoded or were missing a
  /// natural-key field.
  pub skipped:  usize,
}

// ─── Row issues ──────────────────────────────────────────────────────────────

/// Why a record could not become a fact row. Handled inside the loader
/// (warn and skip); never escapes to callers.
#[derive(Debug, Error)]
enum RowIssue {
  #[error("unreadable record: {0}")]
  Unreadable(#[from] matchday_csv::Error),

  #[error("missing or unparseable date")]
  BadDate,

  #[error("missing {0}")]
  Missing(&'static str),
}

// ─── Row staging ─────────────────────────────────────────────────────────────
// Pure extraction, no store access. Splitting a row's natural-key fields
// from its measures here keeps the async resolution code below fallible
// only on store errors.

struct SalesParts {
  time:        TimeValue,
  match_name:  Option<String>,
  subcategory: String,
  source:      String,
  competition: String,
  amount:      Option<f64>,
  quantity:    Option<i64>,
}

struct ExpenseParts {
  time:        TimeValue,
  subcategory: String,
  source:      String,
  competition: Option<String>,
  cost:        Option<f64>,
  quantity:    Option<i64>,
}

struct BoxOfficeParts {
  time:         TimeValue,
  match_name:   Option<String>,
  competition:  String,
  ticket_type:  String,
  tickets_sold: Option<i64>,
  revenue:      Option<f64>,
}

/// Assemble the time dimension value. The date is the natural key and is
/// required; year and month fall back to values derived from it when the
/// export omits those columns.
fn time_value(
  date: Option<&str>,
  year: Option<i32>,
  month: Option<&str>,
) -> Result<TimeValue, RowIssue> {
  let date = date.and_then(parse_date).ok_or(RowIssue::BadDate)?;
  Ok(TimeValue {
    date,
    year: year.unwrap_or_else(|| date.year()),
    month: month.map_or_else(|| month_name(date).to_string(), str::to_string),
  })
}

fn sales_parts(
  record: matchday_csv::Result<SalesRow>,
) -> Result<SalesParts, RowIssue> {
  let row = record?;
  Ok(SalesParts {
    time:        time_value(row.date.as_deref(), row.year, row.month.as_deref())?,
    match_name:  row.match_name,
    subcategory: row.subcategory.ok_or(RowIssue::Missing("subcategory"))?,
    source:      row.source.ok_or(RowIssue::Missing("source"))?,
    competition: row.competition.ok_or(RowIssue::Missing("competition"))?,
    amount:      row.amount,
    quantity:    row.quantity,
  })
}

fn expense_parts(
  record: matchday_csv::Result<ExpensesRow>,
) -> Result<ExpenseParts, RowIssue> {
  let row = record?;
  Ok(ExpenseParts {
    time:        time_value(row.date.as_deref(), row.year, row.month.as_deref())?,
    subcategory: row.subcategory.ok_or(RowIssue::Missing("subcategory"))?,
    source:      row.source.ok_or(RowIssue::Missing("source"))?,
    competition: row.competition,
    cost:        row.cost,
    quantity:    row.quantity,
  })
}

fn box_office_parts(
  record: matchday_csv::Result<BoxOfficeRow>,
) -> Result<BoxOfficeParts, RowIssue> {
  let row = record?;
  Ok(BoxOfficeParts {
    time:         time_value(row.date.as_deref(), row.year, row.month.as_deref())?,
    match_name:   row.match_name,
    competition:  row.competition.ok_or(RowIssue::Missing("competition"))?,
    ticket_type:  row.ticket_type.ok_or(RowIssue::Missing("ticket type"))?,
    tickets_sold: row.tickets_sold,
    revenue:      row.revenue,
  })
}

// ─── Loader ──────────────────────────────────────────────────────────────────

/// Streams typed CSV rows into the warehouse.
///
/// One loader means one load run: its [`Resolver`] cache spans every file
/// loaded through it. Bad measures never skip a row (they load as NULL,
/// the codec's contract); records missing a natural-key field are skipped
/// with a warning and counted in the summary.
pub struct Loader<'a, S> {
  store:    &'a S,
  resolver: Resolver<'a, S>,
}

impl<'a, S: WarehouseStore> Loader<'a, S> {
  pub fn new(store: &'a S) -> Self {
    Self {
      store,
      resolver: Resolver::new(store),
    }
  }

  /// Load sales records into `fact_sales`.
  pub async fn load_sales(
    &mut self,
    rows: Vec<matchday_csv::Result<SalesRow>>,
  ) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    for (index, record) in rows.into_iter().enumerate() {
      summary.rows += 1;
      match sales_parts(record) {
        Ok(parts) => {
          let fact = self.resolve_sales(parts).await?;
          self.insert(FactRow::Sales(fact)).await?;
          summary.inserted += 1;
        }
        Err(issue) => {
          warn!(record = index + 1, %issue, "skipping record");
          summary.skipped += 1;
        }
      }
    }
    Ok(summary)
  }

  /// Load expense records into `fact_expenses`.
  pub async fn load_expenses(
    &mut self,
    rows: Vec<matchday_csv::Result<ExpensesRow>>,
  ) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    for (index, record) in rows.into_iter().enumerate() {
      summary.rows += 1;
      match expense_parts(record) {
        Ok(parts) => {
          let fact = self.resolve_expense(parts).await?;
          self.insert(FactRow::Expense(fact)).await?;
          summary.inserted += 1;
        }
        Err(issue) => {
          warn!(record = index + 1, %issue, "skipping record");
          summary.skipped += 1;
        }
      }
    }
    Ok(summary)
  }

  /// Load box-office records into `fact_box_office`.
  pub async fn load_box_office(
    &mut self,
    rows: Vec<matchday_csv::Result<BoxOfficeRow>>,
  ) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    for (index, record) in rows.into_iter().enumerate() {
      summary.rows += 1;
      match box_office_parts(record) {
        Ok(parts) => {
          let fact = self.resolve_box_office(parts).await?;
          self.insert(FactRow::BoxOffice(fact)).await?;
          summary.inserted += 1;
        }
        Err(issue) => {
          warn!(record = index + 1, %issue, "skipping record");
          summary.skipped += 1;
        }
      }
    }
    Ok(summary)
  }

  // ── Resolution ────────────────────────────────────────────────────────────

  async fn resolve_sales(&mut self, parts: SalesParts) -> Result<SalesFact> {
    let time_id = self.resolve(DimensionValue::Time(parts.time)).await?;
    let match_id = match parts.match_name {
      Some(name) => Some(self.resolve(DimensionValue::Match(name)).await?),
      None => None,
    };
    let subcategory_id = self
      .resolve(DimensionValue::Subcategory(SubcategoryValue {
        name:     parts.subcategory,
        category: Category::Sales,
      }))
      .await?;
    let source_id = self.resolve(DimensionValue::Source(parts.source)).await?;
    let competition_id = self
      .resolve(DimensionValue::Competition(parts.competition))
      .await?;

    Ok(SalesFact {
      time_id,
      match_id,
      subcategory_id,
      source_id,
      competition_id,
      amount: parts.amount,
      quantity: parts.quantity,
    })
  }

  async fn resolve_expense(&mut self, parts: ExpenseParts) -> Result<ExpenseFact> {
    let time_id = self.resolve(DimensionValue::Time(parts.time)).await?;
    let subcategory_id = self
      .resolve(DimensionValue::Subcategory(SubcategoryValue {
        name:     parts.subcategory,
        category: Category::Expenses,
      }))
      .await?;
    let source_id = self.resolve(DimensionValue::Source(parts.source)).await?;
    let competition_id = match parts.competition {
      Some(name) => Some(self.resolve(DimensionValue::Competition(name)).await?),
      None => None,
    };

    Ok(ExpenseFact {
      time_id,
      subcategory_id,
      source_id,
      competition_id,
      cost: parts.cost,
      quantity: parts.quantity,
    })
  }

  async fn resolve_box_office(
    &mut self,
    parts: BoxOfficeParts,
  ) -> Result<BoxOfficeFact> {
    let time_id = self.resolve(DimensionValue::Time(parts.time)).await?;
    let match_id = match parts.match_name {
      Some(name) => Some(self.resolve(DimensionValue::Match(name)).await?),
      None => None,
    };
    let competition_id = self
      .resolve(DimensionValue::Competition(parts.competition))
      .await?;
    let ticket_type_id = self
      .resolve(DimensionValue::TicketType(parts.ticket_type))
      .await?;

    Ok(BoxOfficeFact {
      time_id,
      match_id,
      competition_id,
      ticket_type_id,
      tickets_sold: parts.tickets_sold,
      revenue: parts.revenue,
    })
  }

  async fn resolve(&mut self, value: DimensionValue) -> Result<i64> {
    self
      .resolver
      .resolve(&value)
      .await
      .map_err(|e| Error::Store(Box::new(e)))
  }

  async fn insert(&self, row: FactRow) -> Result<i64> {
    self
      .store
      .insert_fact(&row)
      .await
      .map_err(|e| Error::Store(Box::new(e)))
  }
}
