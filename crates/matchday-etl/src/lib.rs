//! Load pipeline for the matchday warehouse.
//!
//! [`Loader`] takes typed CSV rows, resolves every dimension reference
//! through a [`Resolver`] cache backed by any
//! [`WarehouseStore`](matchday_core::store::WarehouseStore), and appends
//! fact rows. The `matchday` binary in this crate wires the pipeline to
//! the SQLite backend.

pub mod error;
mod load;
mod resolve;

pub use error::{Error, Result};
pub use load::{LoadSummary, Loader};
pub use resolve::Resolver;

use std::path::PathBuf;

use serde::Deserialize;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `config.toml` or `MATCHDAY_*`
/// environment variables.
#[derive(Deserialize, Clone)]
pub struct EtlConfig {
  /// Path of the SQLite warehouse file; created on first use.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
  PathBuf::from("matchday.db")
}

#[cfg(test)]
mod tests;
