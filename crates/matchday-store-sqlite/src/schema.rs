//! SQL schema for the matchday SQLite warehouse.
//!
//! Executed as one idempotent batch at connection startup. `PRAGMA
//! user_version` gates future migrations; a file with a higher version is
//! refused rather than touched.

/// The `user_version` this build writes. Must match the PRAGMA at the end
/// of [`SCHEMA`].
pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Dimensions are append-only: a row is inserted on first sight of a natural
-- key and never updated or deleted. The UNIQUE constraints back the
-- one-surrogate-per-natural-key invariant at the storage level.

CREATE TABLE IF NOT EXISTS dim_time (
    time_id INTEGER PRIMARY KEY AUTOINCREMENT,
    date    TEXT NOT NULL UNIQUE,    -- ISO 8601; the natural key
    year    INTEGER NOT NULL,
    month   TEXT NOT NULL            -- month name as exported
);

CREATE TABLE IF NOT EXISTS dim_match (
    match_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS dim_subcategory (
    subcategory_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL,
    category       TEXT NOT NULL
        CHECK (category IN ('sales', 'expenses', 'box_office')),
    UNIQUE (name, category)
);

CREATE TABLE IF NOT EXISTS dim_source (
    source_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    source_type TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS dim_competition (
    competition_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS dim_ticket_type (
    ticket_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL UNIQUE
);

-- Fact rows are immutable once inserted. Measures are nullable on purpose:
-- an unreadable cell loads as NULL rather than failing the row.

CREATE TABLE IF NOT EXISTS fact_sales (
    sale_id        INTEGER PRIMARY KEY AUTOINCREMENT,
    time_id        INTEGER NOT NULL REFERENCES dim_time(time_id),
    match_id       INTEGER REFERENCES dim_match(match_id),
    subcategory_id INTEGER NOT NULL REFERENCES dim_subcategory(subcategory_id),
    source_id      INTEGER NOT NULL REFERENCES dim_source(source_id),
    competition_id INTEGER NOT NULL REFERENCES dim_competition(competition_id),
    amount         REAL,
    quantity       INTEGER
);

CREATE TABLE IF NOT EXISTS fact_box_office (
    entry_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    time_id        INTEGER NOT NULL REFERENCES dim_time(time_id),
    match_id       INTEGER REFERENCES dim_match(match_id),
    competition_id INTEGER NOT NULL REFERENCES dim_competition(competition_id),
    ticket_type_id INTEGER NOT NULL REFERENCES dim_ticket_type(ticket_type_id),
    tickets_sold   INTEGER,
    revenue        REAL
);

CREATE TABLE IF NOT EXISTS fact_expenses (
    expense_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    time_id        INTEGER NOT NULL REFERENCES dim_time(time_id),
    subcategory_id INTEGER NOT NULL REFERENCES dim_subcategory(subcategory_id),
    source_id      INTEGER NOT NULL REFERENCES dim_source(source_id),
    competition_id INTEGER REFERENCES dim_competition(competition_id),
    cost           REAL,
    quantity       INTEGER
);

CREATE INDEX IF NOT EXISTS fact_sales_time_idx      ON fact_sales(time_id);
CREATE INDEX IF NOT EXISTS fact_box_office_time_idx ON fact_box_office(time_id);
CREATE INDEX IF NOT EXISTS fact_expenses_time_idx   ON fact_expenses(time_id);

PRAGMA user_version = 1;
";
