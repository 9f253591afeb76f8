//! The keyed headline-count table read from `summary.csv`.

use crate::error::{CovidDataError, Result};
use serde::Serialize;

/// Rows kept from `summary.csv`; later rows hold free-text notes.
pub const SUMMARY_ROWS: usize = 4;

pub const NYC_CASE_COUNT: &str = "NYC_CASE_COUNT";
pub const NYC_HOSPITALIZED_COUNT: &str = "NYC_HOSPITALIZED_COUNT";
pub const NYC_CONFIRMED_DEATH_COUNT: &str = "NYC_CONFIRMED_DEATH_COUNT";
pub const NYC_PROBABLE_DEATH_COUNT: &str = "NYC_PROBABLE_DEATH_COUNT";

/// A single `KEY,VALUE` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub key: String,
    pub value: i64,
}

/// Single-column table of headline counts, keyed by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryTable {
    entries: Vec<SummaryEntry>,
}

impl SummaryTable {
    pub fn new(entries: Vec<SummaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Value stored under `key`, or [`CovidDataError::MissingKey`].
    pub fn get(&self, key: &str) -> Result<i64> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
            .ok_or_else(|| CovidDataError::MissingKey {
                key: key.to_string(),
            })
    }
}
