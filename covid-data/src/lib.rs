//! Core types for the NYC Health COVID-19 datasets.
//!
//! - `datasets`: the catalog of source CSV files and where to fetch them
//! - `borough`: the borough metric table and its typed column selection
//! - `summary`: the keyed headline-count table
//! - `groups`: demographic group datasets (sex, race, poverty, age)
//! - `syndromic`: hospital visit/admission series names
//! - `fetch` (feature `api`): HTTP download with retry

pub mod borough;
pub mod datasets;
pub mod error;
pub mod groups;
pub mod summary;
pub mod syndromic;

#[cfg(feature = "api")]
pub mod fetch;

pub use error::{CovidDataError, Result};

/// Find a column by header name.
///
/// Source CSV column names are used verbatim as lookup keys, so a renamed or
/// dropped upstream column surfaces here as [`CovidDataError::InvalidColumn`].
pub fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| CovidDataError::InvalidColumn {
            column: name.to_string(),
        })
}
