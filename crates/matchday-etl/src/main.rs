//! `matchday` — provision and load the club's financial warehouse.
//!
//! ```text
//! matchday provision
//! matchday load sales data/ventas_2024.csv
//! matchday load box-office data/taquilla_2024.csv
//! matchday status
//! ```
//!
//! The warehouse path comes from `config.toml` (or `MATCHDAY_STORE_PATH`),
//! not from flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use matchday_core::{
  dimension::DimensionKind, fact::FactTable, store::WarehouseStore,
};
use matchday_etl::{EtlConfig, Loader};
use matchday_store_sqlite::SqliteStore;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Star-schema warehouse for club finances")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Create the warehouse file and its tables if absent.
  Provision,

  /// Load one cleaned CSV export into a fact table.
  Load {
    /// Which fact table the file feeds.
    #[arg(value_enum)]
    kind: FactKind,

    /// Path of the CSV file.
    file: PathBuf,
  },

  /// Print row counts for every dimension and fact table.
  Status,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum FactKind {
  Sales,
  Expenses,
  BoxOffice,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MATCHDAY"))
    .build()
    .context("failed to read config file")?;

  let etl_cfg: EtlConfig = settings
    .try_deserialize()
    .context("failed to deserialise EtlConfig")?;

  let store_path = expand_tilde(&etl_cfg.store_path);

  // Opening the store provisions the schema; `provision` just makes the
  // side effect the whole point.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open warehouse at {store_path:?}"))?;

  match cli.command {
    Command::Provision => {
      info!(path = %store_path.display(), "warehouse provisioned");
    }

    Command::Load { kind, file } => {
      let reader = std::fs::File::open(&file)
        .with_context(|| format!("failed to open {}", file.display()))?;

      let mut loader = Loader::new(&store);
      let summary = match kind {
        FactKind::Sales => {
          loader.load_sales(matchday_csv::read_sales(reader)).await?
        }
        FactKind::Expenses => {
          loader
            .load_expenses(matchday_csv::read_expenses(reader))
            .await?
        }
        FactKind::BoxOffice => {
          loader
            .load_box_office(matchday_csv::read_box_office(reader))
            .await?
        }
      };

      info!(
        file = %file.display(),
        rows = summary.rows,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "load complete"
      );
    }

    Command::Status => {
      for kind in DimensionKind::ALL {
        let count = store.dimension_count(kind).await?;
        println!("{count:>8}  {}", kind.table());
      }
      for table in FactTable::ALL {
        let count = store.fact_count(table).await?;
        println!("{count:>8}  {}", table.table());
      }
    }
  }

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
