//! Pipeline tests: CSV text in, store counts out.

use matchday_core::{
  dimension::{DimensionKind, DimensionValue},
  fact::FactTable,
  store::WarehouseStore,
};
use matchday_store_sqlite::SqliteStore;

use crate::{Loader, Resolver};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// Row counts for the six dimension tables, in
/// [`DimensionKind::ALL`] order.
async fn dimension_counts(s: &SqliteStore) -> [u64; 6] {
  let mut counts = [0; 6];
  for (i, kind) in DimensionKind::ALL.into_iter().enumerate() {
    counts[i] = s.dimension_count(kind).await.unwrap();
  }
  counts
}

const SALES_HEADER: &str =
  "Fecha,Año,Mes,Partido,Subcategoria,Fuente,Competencia,Monto,Cantidad\n";

// ─── Sales ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn repeated_values_resolve_to_one_row_per_dimension() {
  let s = store().await;
  let csv = format!(
    "{SALES_HEADER}\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,100,5\n\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,200,3\n"
  );

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.rows, 2);
  assert_eq!(summary.inserted, 2);
  assert_eq!(summary.skipped, 0);

  // One row per dimension (no ticket types in a sales load), two facts.
  assert_eq!(dimension_counts(&s).await, [1, 1, 1, 1, 1, 0]);
  assert_eq!(s.fact_count(FactTable::Sales).await.unwrap(), 2);
}

#[tokio::test]
async fn distinct_values_make_distinct_dimension_rows() {
  let s = store().await;
  let csv = format!(
    "{SALES_HEADER}\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,100,5\n\
     2024-01-02,2024,Enero,Jornada 2,Merchandise,Online,Cup,250,1\n\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,80,2\n\
     2024-01-02,2024,Enero,Jornada 2,Merchandise,Online,Cup,40,1\n"
  );

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 4);
  assert_eq!(dimension_counts(&s).await, [2, 2, 2, 2, 2, 0]);
  assert_eq!(s.fact_count(FactTable::Sales).await.unwrap(), 4);
}

#[tokio::test]
async fn bad_measures_load_as_null_rather_than_skip() {
  let s = store().await;
  let csv = format!(
    "{SALES_HEADER}\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,,\n\
     2024-01-02,2024,Enero,Jornada 1,Tickets,Gate,League,NaN,NaN\n"
  );

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 2);
  assert_eq!(summary.skipped, 0);
  assert_eq!(s.fact_count(FactTable::Sales).await.unwrap(), 2);
}

#[tokio::test]
async fn records_without_a_date_are_skipped_not_fatal() {
  let s = store().await;
  let csv = format!(
    "{SALES_HEADER}\
     ,2024,Enero,Jornada 1,Tickets,Gate,League,100,5\n\
     2024-01-02,2024,Enero,Jornada 1,Tickets,Gate,League,200,3\n\
     not-a-date,2024,Enero,Jornada 1,Tickets,Gate,League,300,1\n"
  );

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.rows, 3);
  assert_eq!(summary.inserted, 1);
  assert_eq!(summary.skipped, 2);
  assert_eq!(s.fact_count(FactTable::Sales).await.unwrap(), 1);
}

#[tokio::test]
async fn unreadable_record_skips_only_itself() {
  let s = store().await;
  // The second record is ragged and fails to decode.
  let csv = format!(
    "{SALES_HEADER}\
     2024-01-01,2024,Enero,Jornada 1,Tickets,Gate,League,100,5\n\
     2024-01-02,2024,Enero,Jornada 2,Tickets,Gate,League,200,3,EXTRA\n\
     2024-01-03,2024,Enero,Jornada 3,Tickets,Gate,League,300,1\n"
  );

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.rows, 3);
  assert_eq!(summary.inserted, 2);
  assert_eq!(summary.skipped, 1);
}

#[tokio::test]
async fn english_headers_load_like_spanish_ones() {
  let s = store().await;
  let csv = "Date,Year,Month,Match,Subcategory,Source,Competition,Amount,Quantity\n\
             2024-01-01,2024,January,Jornada 1,Tickets,Gate,League,100,5\n";

  let summary = Loader::new(&s)
    .load_sales(matchday_csv::read_sales(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 1);
  assert_eq!(dimension_counts(&s).await, [1, 1, 1, 1, 1, 0]);
}

// ─── Subcategory disambiguation ──────────────────────────────────────────────

#[tokio::test]
async fn same_subcategory_name_lands_in_both_ledgers() {
  let s = store().await;

  let sales =
    format!("{SALES_HEADER}2024-01-01,2024,Enero,,Boletos,Gate,League,100,\n");
  let expenses = "Fecha,Subcategoria,Fuente,Competencia,Costos\n\
                  2024-01-01,Boletos,Bank,League,50\n";

  let mut loader = Loader::new(&s);
  loader
    .load_sales(matchday_csv::read_sales(sales.as_bytes()))
    .await
    .unwrap();
  loader
    .load_expenses(matchday_csv::read_expenses(expenses.as_bytes()))
    .await
    .unwrap();

  // One subcategory row per (name, category) pair.
  assert_eq!(
    s.dimension_count(DimensionKind::Subcategory).await.unwrap(),
    2
  );
  // The shared date and competition still resolve to single rows.
  assert_eq!(s.dimension_count(DimensionKind::Time).await.unwrap(), 1);
  assert_eq!(
    s.dimension_count(DimensionKind::Competition).await.unwrap(),
    1
  );
}

// ─── Expenses ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn expenses_without_competition_still_load() {
  let s = store().await;
  let csv = "Fecha,Subcategoria,Fuente,Costos,Cantidad\n\
             2024-03-01,Payroll,Bank,120000,\n";

  let summary = Loader::new(&s)
    .load_expenses(matchday_csv::read_expenses(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 1);
  assert_eq!(
    s.dimension_count(DimensionKind::Competition).await.unwrap(),
    0
  );
  assert_eq!(s.fact_count(FactTable::Expenses).await.unwrap(), 1);
}

#[tokio::test]
async fn expenses_missing_subcategory_are_skipped() {
  let s = store().await;
  let csv = "Fecha,Subcategoria,Fuente,Costos\n\
             2024-03-01,,Bank,500\n\
             2024-03-02,Travel,Bank,800\n";

  let summary = Loader::new(&s)
    .load_expenses(matchday_csv::read_expenses(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 1);
  assert_eq!(summary.skipped, 1);
}

// ─── Box office ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn box_office_load_creates_ticket_types() {
  let s = store().await;
  let csv = "Fecha,Partido,Competencia,Tipo Venta,Boletos Vendidos,Ingreso\n\
             2024-02-10,Jornada 5,League,General,1250,93750\n\
             2024-02-10,Jornada 5,League,VIP,80,24000\n";

  let summary = Loader::new(&s)
    .load_box_office(matchday_csv::read_box_office(csv.as_bytes()))
    .await
    .unwrap();

  assert_eq!(summary.inserted, 2);
  assert_eq!(
    s.dimension_count(DimensionKind::TicketType).await.unwrap(),
    2
  );
  assert_eq!(s.dimension_count(DimensionKind::Match).await.unwrap(), 1);
  assert_eq!(s.fact_count(FactTable::BoxOffice).await.unwrap(), 2);
}

// ─── Resolver ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn resolver_returns_stable_keys_across_calls() {
  let s = store().await;
  let mut resolver = Resolver::new(&s);

  let value = DimensionValue::Match("Derby".into());
  let first = resolver.resolve(&value).await.unwrap();
  let second = resolver.resolve(&value).await.unwrap();

  assert_eq!(first, second);
  assert_eq!(s.dimension_count(DimensionKind::Match).await.unwrap(), 1);
}
