//! Error type for the load pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A store operation failed. Store failures stop the run: continuing
  /// would risk fact rows pointing at half-resolved dimensions.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
