//! In-memory SQLite database layer for the NYC COVID-19 datasets.
//!
//! Loads the source CSVs into an in-memory SQLite database and exposes typed
//! query methods returning immutable snapshots for the view layer.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data arrives as strings: `include_str!` in the web app, files in the CLI
//! - Column names are looked up by header, so schema drift fails the load
//!
//! # Usage
//!
//! ```rust
//! use covid_data::datasets::Dataset;
//! use covid_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_dataset(
//!     Dataset::Summary,
//!     "NYC_CASE_COUNT,203792\nNYC_HOSPITALIZED_COUNT,52580\n",
//! )
//! .unwrap();
//!
//! let summary = db.query_summary().unwrap();
//! assert_eq!(summary.get("NYC_CASE_COUNT").unwrap(), 203792);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the dashboard datasets.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_data::datasets::Dataset;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_dataset(Dataset::Summary, "NYC_CASE_COUNT,10\n")
            .unwrap();
        let summary = db2.query_summary().unwrap();
        assert_eq!(
            summary.entries().len(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_summary().unwrap().entries().is_empty());
        assert!(db.query_tests().unwrap().is_empty());
    }
}
