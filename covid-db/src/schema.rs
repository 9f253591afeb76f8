//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `summary` - Headline counts keyed by name, in file order
/// - `tests` - Daily total and positive test counts
/// - `case_hosp_death` - Daily case, hospitalization and death counts
/// - `boroughs` - One row per borough with the six count/rate columns
/// - `group_rates` - Sex/race/poverty/age breakdowns, tagged by dataset
/// - `syndromic` - Long-format visit/admission series (series, date, value)
///
/// `position` columns record source file order so that views can restore it
/// (and break sort ties with it).
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS summary (
        position INTEGER PRIMARY KEY,
        key TEXT NOT NULL UNIQUE,
        value INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS tests (
        date TEXT PRIMARY KEY,
        total_tests INTEGER NOT NULL,
        positive_tests INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS case_hosp_death (
        date TEXT PRIMARY KEY,
        case_count INTEGER NOT NULL,
        hospitalized_count INTEGER NOT NULL,
        death_count INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS boroughs (
        position INTEGER PRIMARY KEY,
        borough TEXT NOT NULL UNIQUE,
        case_count REAL NOT NULL,
        case_rate REAL NOT NULL,
        hospitalized_count REAL NOT NULL,
        hospitalized_rate REAL NOT NULL,
        death_count REAL NOT NULL,
        death_rate REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS group_rates (
        dataset TEXT NOT NULL,
        position INTEGER NOT NULL,
        group_name TEXT NOT NULL,
        case_rate REAL NOT NULL,
        hospitalized_rate REAL NOT NULL,
        death_rate REAL NOT NULL,
        PRIMARY KEY (dataset, position),
        UNIQUE (dataset, group_name)
    );

    CREATE TABLE IF NOT EXISTS syndromic (
        series TEXT NOT NULL,
        date TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (series, date)
    );
    CREATE INDEX IF NOT EXISTS idx_syndromic_series ON syndromic(series);
    "#
}
