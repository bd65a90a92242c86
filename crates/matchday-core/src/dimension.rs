//! Dimension types — the descriptive half of the star schema.
//!
//! A dimension row carries the attributes fact rows point at through
//! surrogate keys. Dimensions are append-only: a row is inserted the first
//! time its natural key is seen and never updated or deleted afterwards.

use chrono::NaiveDate;

// ─── Category ────────────────────────────────────────────────────────────────

/// The ledger a subcategory belongs to.
///
/// Part of the subcategory natural key: the same name may show up under two
/// categories and must resolve to two distinct rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  Sales,
  Expenses,
  BoxOffice,
}

// ─── Attribute payloads ──────────────────────────────────────────────────────

/// Attributes of a `dim_time` row. The natural key is the date alone;
/// `year` and `month` are denormalised extras written on first insert.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeValue {
  pub date:  NaiveDate,
  pub year:  i32,
  /// Month name as it should read in reports (e.g. "Enero", "January").
  pub month: String,
}

/// Attributes of a `dim_subcategory` row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryValue {
  pub name:     String,
  pub category: Category,
}

// ─── DimensionValue ──────────────────────────────────────────────────────────

/// A fully-specified dimension row awaiting resolution to a surrogate key.
///
/// Single-attribute dimensions carry their natural key directly; time and
/// subcategory carry a payload struct.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionValue {
  Time(TimeValue),
  Match(String),
  Subcategory(SubcategoryValue),
  Source(String),
  Competition(String),
  TicketType(String),
}

impl DimensionValue {
  /// Which dimension table this value belongs to.
  pub fn kind(&self) -> DimensionKind {
    match self {
      Self::Time(_) => DimensionKind::Time,
      Self::Match(_) => DimensionKind::Match,
      Self::Subcategory(_) => DimensionKind::Subcategory,
      Self::Source(_) => DimensionKind::Source,
      Self::Competition(_) => DimensionKind::Competition,
      Self::TicketType(_) => DimensionKind::TicketType,
    }
  }

  /// The lookup identity of this value.
  ///
  /// Equal natural keys must resolve to the same surrogate key no matter
  /// what the extra attributes say: two [`TimeValue`]s sharing a date are
  /// the same `dim_time` row even when their month spellings differ.
  pub fn natural_key(&self) -> NaturalKey {
    match self {
      Self::Time(t) => NaturalKey::Time(t.date),
      Self::Match(name) => NaturalKey::Match(name.clone()),
      Self::Subcategory(s) => {
        NaturalKey::Subcategory(s.name.clone(), s.category)
      }
      Self::Source(name) => NaturalKey::Source(name.clone()),
      Self::Competition(name) => NaturalKey::Competition(name.clone()),
      Self::TicketType(name) => NaturalKey::TicketType(name.clone()),
    }
  }
}

// ─── NaturalKey ──────────────────────────────────────────────────────────────

/// The business identity of a dimension row, detached from any extra
/// attributes. Hashable so load runs can memoise key-to-surrogate lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NaturalKey {
  Time(NaiveDate),
  Match(String),
  Subcategory(String, Category),
  Source(String),
  Competition(String),
  TicketType(String),
}

// ─── DimensionKind ───────────────────────────────────────────────────────────

/// One of the six dimension tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
  Time,
  Match,
  Subcategory,
  Source,
  Competition,
  TicketType,
}

impl DimensionKind {
  /// Every dimension, in schema order.
  pub const ALL: [Self; 6] = [
    Self::Time,
    Self::Match,
    Self::Subcategory,
    Self::Source,
    Self::Competition,
    Self::TicketType,
  ];

  /// The table backing this dimension.
  pub fn table(self) -> &'static str {
    match self {
      Self::Time => "dim_time",
      Self::Match => "dim_match",
      Self::Subcategory => "dim_subcategory",
      Self::Source => "dim_source",
      Self::Competition => "dim_competition",
      Self::TicketType => "dim_ticket_type",
    }
  }
}
