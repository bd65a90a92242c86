//! [`SqliteStore`] — the SQLite implementation of [`WarehouseStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use matchday_core::{
  dimension::{DimensionKind, DimensionValue},
  fact::{FactRow, FactTable},
  store::WarehouseStore,
};

use crate::{
  Error, Result,
  encode::{encode_category, encode_date},
  schema::{SCHEMA, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A matchday warehouse backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a warehouse at `path` and ensure the schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Open an in-memory warehouse — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }
}

// ─── Connection-thread helpers ───────────────────────────────────────────────
// Plain rusqlite functions, run inside `conn.call` closures.

/// The get-or-create step at the bottom of every dimension resolution: run
/// `select` against the natural key; on a miss run `insert` and return the
/// fresh rowid.
fn lookup_or_insert<P, Q>(
  conn: &rusqlite::Connection,
  select: &str,
  select_params: P,
  insert: &str,
  insert_params: Q,
) -> rusqlite::Result<i64>
where
  P: rusqlite::Params,
  Q: rusqlite::Params,
{
  if let Some(id) = conn
    .query_row(select, select_params, |row| row.get(0))
    .optional()?
  {
    return Ok(id);
  }
  conn.execute(insert, insert_params)?;
  Ok(conn.last_insert_rowid())
}

/// Dispatch a [`DimensionValue`] to its table's lookup and insert statements.
fn resolve_value(
  conn: &rusqlite::Connection,
  value: &DimensionValue,
) -> rusqlite::Result<i64> {
  match value {
    DimensionValue::Time(t) => lookup_or_insert(
      conn,
      "SELECT time_id FROM dim_time WHERE date = ?1",
      rusqlite::params![encode_date(t.date)],
      "INSERT INTO dim_time (date, year, month) VALUES (?1, ?2, ?3)",
      rusqlite::params![encode_date(t.date), t.year, t.month],
    ),
    DimensionValue::Match(name) => lookup_or_insert(
      conn,
      "SELECT match_id FROM dim_match WHERE name = ?1",
      rusqlite::params![name],
      "INSERT INTO dim_match (name) VALUES (?1)",
      rusqlite::params![name],
    ),
    // The lookup predicate must carry the category: two subcategories may
    // share a name across ledgers and must stay distinct rows.
    DimensionValue::Subcategory(s) => lookup_or_insert(
      conn,
      "SELECT subcategory_id FROM dim_subcategory
       WHERE name = ?1 AND category = ?2",
      rusqlite::params![s.name, encode_category(s.category)],
      "INSERT INTO dim_subcategory (name, category) VALUES (?1, ?2)",
      rusqlite::params![s.name, encode_category(s.category)],
    ),
    DimensionValue::Source(name) => lookup_or_insert(
      conn,
      "SELECT source_id FROM dim_source WHERE source_type = ?1",
      rusqlite::params![name],
      "INSERT INTO dim_source (source_type) VALUES (?1)",
      rusqlite::params![name],
    ),
    DimensionValue::Competition(name) => lookup_or_insert(
      conn,
      "SELECT competition_id FROM dim_competition WHERE name = ?1",
      rusqlite::params![name],
      "INSERT INTO dim_competition (name) VALUES (?1)",
      rusqlite::params![name],
    ),
    DimensionValue::TicketType(name) => lookup_or_insert(
      conn,
      "SELECT ticket_type_id FROM dim_ticket_type WHERE name = ?1",
      rusqlite::params![name],
      "INSERT INTO dim_ticket_type (name) VALUES (?1)",
      rusqlite::params![name],
    ),
  }
}

/// Append one fact row; returns the generated id.
fn insert_row(
  conn: &rusqlite::Connection,
  row: &FactRow,
) -> rusqlite::Result<i64> {
  match row {
    FactRow::Sales(f) => {
      conn.execute(
        "INSERT INTO fact_sales
           (time_id, match_id, subcategory_id, source_id, competition_id,
            amount, quantity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
          f.time_id,
          f.match_id,
          f.subcategory_id,
          f.source_id,
          f.competition_id,
          f.amount,
          f.quantity,
        ],
      )?;
    }
    FactRow::BoxOffice(f) => {
      conn.execute(
        "INSERT INTO fact_box_office
           (time_id, match_id, competition_id, ticket_type_id,
            tickets_sold, revenue)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
          f.time_id,
          f.match_id,
          f.competition_id,
          f.ticket_type_id,
          f.tickets_sold,
          f.revenue,
        ],
      )?;
    }
    FactRow::Expense(f) => {
      conn.execute(
        "INSERT INTO fact_expenses
           (time_id, subcategory_id, source_id, competition_id,
            cost, quantity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
          f.time_id,
          f.subcategory_id,
          f.source_id,
          f.competition_id,
          f.cost,
          f.quantity,
        ],
      )?;
    }
  }
  Ok(conn.last_insert_rowid())
}

fn count_rows(conn: &rusqlite::Connection, table: &str) -> rusqlite::Result<u64> {
  let n: i64 = conn.query_row(
    &format!("SELECT COUNT(*) FROM {table}"),
    [],
    |row| row.get(0),
  )?;
  Ok(n as u64)
}

// ─── WarehouseStore impl ─────────────────────────────────────────────────────

impl WarehouseStore for SqliteStore {
  type Error = Error;

  async fn ensure_schema(&self) -> Result<()> {
    let version: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
      })
      .await?;

    if version > SCHEMA_VERSION {
      return Err(Error::SchemaVersion(version));
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn resolve_dimension(&self, value: &DimensionValue) -> Result<i64> {
    let value = value.clone();

    let id = self
      .conn
      .call(move |conn| Ok(resolve_value(conn, &value)?))
      .await?;
    Ok(id)
  }

  async fn insert_fact(&self, row: &FactRow) -> Result<i64> {
    let row = row.clone();

    let id = self
      .conn
      .call(move |conn| Ok(insert_row(conn, &row)?))
      .await?;
    Ok(id)
  }

  async fn dimension_count(&self, kind: DimensionKind) -> Result<u64> {
    let n = self
      .conn
      .call(move |conn| Ok(count_rows(conn, kind.table())?))
      .await?;
    Ok(n)
  }

  async fn fact_count(&self, table: FactTable) -> Result<u64> {
    let n = self
      .conn
      .call(move |conn| Ok(count_rows(conn, table.table())?))
      .await?;
    Ok(n)
  }
}
