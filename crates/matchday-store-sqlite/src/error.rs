//! Error type for `matchday-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The file at the configured path was written by a newer schema than
  /// this build understands.
  #[error(
    "unsupported schema version {0} (this build writes version {max})",
    max = crate::schema::SCHEMA_VERSION
  )]
  SchemaVersion(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
