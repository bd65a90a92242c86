//! Typed CSV rows, one struct per fact-table export.
//!
//! Field attributes carry the Spanish headers of the original exports with
//! English aliases. Every field is optional at this layer: which columns a
//! fact table actually requires is the loader's call, not the codec's.

use serde::{Deserialize, Deserializer};

use crate::value::{coerce_amount, coerce_quantity};

// ─── Deserialize helpers ─────────────────────────────────────────────────────

fn de_amount<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(de)?;
  Ok(raw.as_deref().and_then(coerce_amount))
}

fn de_quantity<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(de)?;
  Ok(raw.as_deref().and_then(coerce_quantity))
}

fn de_year<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(de)?;
  Ok(
    raw
      .as_deref()
      .and_then(coerce_quantity)
      .and_then(|y| i32::try_from(y).ok()),
  )
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One record of a sales export.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRow {
  #[serde(rename = "Fecha", alias = "Date")]
  pub date:        Option<String>,
  #[serde(rename = "Año", alias = "Year", default, deserialize_with = "de_year")]
  pub year:        Option<i32>,
  #[serde(rename = "Mes", alias = "Month")]
  pub month:       Option<String>,
  #[serde(rename = "Partido", alias = "Match")]
  pub match_name:  Option<String>,
  #[serde(rename = "Subcategoria", alias = "Subcategory")]
  pub subcategory: Option<String>,
  #[serde(rename = "Fuente", alias = "Source")]
  pub source:      Option<String>,
  #[serde(rename = "Competencia", alias = "Competition")]
  pub competition: Option<String>,
  #[serde(
    rename = "Monto",
    alias = "Amount",
    default,
    deserialize_with = "de_amount"
  )]
  pub amount:      Option<f64>,
  #[serde(
    rename = "Cantidad",
    alias = "Quantity",
    default,
    deserialize_with = "de_quantity"
  )]
  pub quantity:    Option<i64>,
}

/// One record of an expenses export. The combined legacy export used
/// `Monto` for the expense amount, so that header is accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpensesRow {
  #[serde(rename = "Fecha", alias = "Date")]
  pub date:        Option<String>,
  #[serde(rename = "Año", alias = "Year", default, deserialize_with = "de_year")]
  pub year:        Option<i32>,
  #[serde(rename = "Mes", alias = "Month")]
  pub month:       Option<String>,
  #[serde(rename = "Subcategoria", alias = "Subcategory")]
  pub subcategory: Option<String>,
  #[serde(rename = "Fuente", alias = "Source")]
  pub source:      Option<String>,
  #[serde(rename = "Competencia", alias = "Competition")]
  pub competition: Option<String>,
  #[serde(
    rename = "Costos",
    alias = "Cost",
    alias = "Monto",
    alias = "Amount",
    default,
    deserialize_with = "de_amount"
  )]
  pub cost:        Option<f64>,
  #[serde(
    rename = "Cantidad",
    alias = "Quantity",
    default,
    deserialize_with = "de_quantity"
  )]
  pub quantity:    Option<i64>,
}

/// One record of a box-office export.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxOfficeRow {
  #[serde(rename = "Fecha", alias = "Date")]
  pub date:         Option<String>,
  #[serde(rename = "Año", alias = "Year", default, deserialize_with = "de_year")]
  pub year:         Option<i32>,
  #[serde(rename = "Mes", alias = "Month")]
  pub month:        Option<String>,
  #[serde(rename = "Partido", alias = "Match")]
  pub match_name:   Option<String>,
  #[serde(rename = "Competencia", alias = "Competition")]
  pub competition:  Option<String>,
  #[serde(
    rename = "Tipo Venta",
    alias = "SaleType",
    alias = "Tipo",
    alias = "Type"
  )]
  pub ticket_type:  Option<String>,
  #[serde(
    rename = "Boletos Vendidos",
    alias = "TicketsSold",
    default,
    deserialize_with = "de_quantity"
  )]
  pub tickets_sold: Option<i64>,
  #[serde(
    rename = "Ingreso",
    alias = "Revenue",
    default,
    deserialize_with = "de_amount"
  )]
  pub revenue:      Option<f64>,
}
