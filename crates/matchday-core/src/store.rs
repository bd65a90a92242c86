//! The `WarehouseStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `matchday-store-sqlite`). The load pipeline in `matchday-etl` depends on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  dimension::{DimensionKind, DimensionValue},
  fact::{FactRow, FactTable},
};

/// Abstraction over the warehouse the ETL writes to.
///
/// Dimension writes are insert-if-absent; fact writes are append-only. The
/// trait assumes a single writer for the duration of a run.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait WarehouseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure every dimension and fact table exists.
  ///
  /// Idempotent: running this twice must not error and must not touch
  /// existing rows.
  fn ensure_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Resolve `value` to its surrogate key.
  ///
  /// Looks up the row matching the value's natural key; on a miss, a row is
  /// inserted with the value's full attributes. Repeated calls with equal
  /// natural keys always return the same key and perform at most one
  /// insert.
  fn resolve_dimension<'a>(
    &'a self,
    value: &'a DimensionValue,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// Append one fact row and return its generated id.
  fn insert_fact<'a>(
    &'a self,
    row: &'a FactRow,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// Number of rows currently in a dimension table.
  fn dimension_count(
    &self,
    kind: DimensionKind,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Number of rows currently in a fact table.
  fn fact_count(
    &self,
    table: FactTable,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
