//! The borough metric table and the typed (metric, kind) column selection.
//!
//! `by-boro.csv` carries six numeric columns named `<METRIC>_<KIND>`. Instead
//! of building that name from two free strings on every request, the pair is
//! an enum product ([`BoroughColumn`]) whose six values map one-to-one onto
//! the columns. Only untrusted option values go through the string path
//! ([`BoroughColumn::from_option_values`]), which can fail.

use crate::error::{CovidDataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of boroughs, and rows kept from `by-boro.csv`.
pub const BOROUGH_COUNT: usize = 5;

/// Grouping column of `by-boro.csv`.
pub const BOROUGH_GROUP_COLUMN: &str = "BOROUGH_GROUP";

/// What is being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    Case,
    Hospitalized,
    Death,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Case, Metric::Hospitalized, Metric::Death];

    /// Column-name prefix, also the UI option value.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Case => "CASE",
            Metric::Hospitalized => "HOSPITALIZED",
            Metric::Death => "DEATH",
        }
    }

    /// Human label, used for radio options and axis titles.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Case => "Cases",
            Metric::Hospitalized => "Hospitalizations",
            Metric::Death => "Deaths",
        }
    }
}

/// Raw count or population-normalized rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Count,
    Rate,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Count, Kind::Rate];

    /// Column-name suffix, also the UI option value.
    pub fn key(&self) -> &'static str {
        match self {
            Kind::Count => "COUNT",
            Kind::Rate => "RATE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Count => "Count",
            Kind::Rate => "Rate",
        }
    }
}

/// One of the six numeric columns of the borough table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoroughColumn {
    pub metric: Metric,
    pub kind: Kind,
}

impl BoroughColumn {
    /// Every column, in `by-boro.csv` header order.
    pub const ALL: [BoroughColumn; 6] = [
        BoroughColumn::new(Metric::Case, Kind::Rate),
        BoroughColumn::new(Metric::Hospitalized, Kind::Rate),
        BoroughColumn::new(Metric::Death, Kind::Rate),
        BoroughColumn::new(Metric::Case, Kind::Count),
        BoroughColumn::new(Metric::Hospitalized, Kind::Count),
        BoroughColumn::new(Metric::Death, Kind::Count),
    ];

    pub const fn new(metric: Metric, kind: Kind) -> Self {
        Self { metric, kind }
    }

    /// CSV column name, e.g. `CASE_RATE`.
    pub fn key(&self) -> &'static str {
        match (self.metric, self.kind) {
            (Metric::Case, Kind::Count) => "CASE_COUNT",
            (Metric::Case, Kind::Rate) => "CASE_RATE",
            (Metric::Hospitalized, Kind::Count) => "HOSPITALIZED_COUNT",
            (Metric::Hospitalized, Kind::Rate) => "HOSPITALIZED_RATE",
            (Metric::Death, Kind::Count) => "DEATH_COUNT",
            (Metric::Death, Kind::Rate) => "DEATH_RATE",
        }
    }

    /// Look up a column by its CSV name.
    pub fn from_key(key: &str) -> Result<Self> {
        BoroughColumn::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| CovidDataError::InvalidColumn {
                column: key.to_string(),
            })
    }

    /// Resolve two UI option values (`"case"`, `"Rate"`, ...) to a column.
    ///
    /// The values are uppercased and joined with `_`; a key that names no
    /// known column is an [`CovidDataError::InvalidColumn`].
    pub fn from_option_values(metric: &str, kind: &str) -> Result<Self> {
        let key = format!(
            "{}_{}",
            metric.trim().to_uppercase(),
            kind.trim().to_uppercase()
        );
        BoroughColumn::from_key(&key)
    }

    /// X-axis title for a chart of this column.
    pub fn axis_label(&self) -> String {
        match self.kind {
            Kind::Count => self.metric.label().to_string(),
            Kind::Rate => format!("{} (per 100,000 People)", self.metric.label()),
        }
    }
}

impl fmt::Display for BoroughColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One borough's counts and rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoroughRow {
    pub borough: String,
    pub case_count: f64,
    pub case_rate: f64,
    pub hospitalized_count: f64,
    pub hospitalized_rate: f64,
    pub death_count: f64,
    pub death_rate: f64,
}

impl BoroughRow {
    /// Value of the given column for this borough.
    pub fn value(&self, column: BoroughColumn) -> f64 {
        match (column.metric, column.kind) {
            (Metric::Case, Kind::Count) => self.case_count,
            (Metric::Case, Kind::Rate) => self.case_rate,
            (Metric::Hospitalized, Kind::Count) => self.hospitalized_count,
            (Metric::Hospitalized, Kind::Rate) => self.hospitalized_rate,
            (Metric::Death, Kind::Count) => self.death_count,
            (Metric::Death, Kind::Rate) => self.death_rate,
        }
    }
}

/// The five-row borough table, fixed after load.
#[derive(Debug, Clone, PartialEq)]
pub struct BoroughMetricTable {
    rows: Vec<BoroughRow>,
}

impl BoroughMetricTable {
    /// Build the table, checking for exactly one row per borough.
    pub fn new(rows: Vec<BoroughRow>) -> Result<Self> {
        if rows.len() != BOROUGH_COUNT {
            return Err(CovidDataError::RowCount {
                dataset: "by-boro.csv".to_string(),
                expected: BOROUGH_COUNT,
                found: rows.len(),
            });
        }
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.borough.as_str()) {
                return Err(CovidDataError::DuplicateGroup {
                    dataset: "by-boro.csv".to_string(),
                    group: row.borough.clone(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Rows in source file order.
    pub fn rows(&self) -> &[BoroughRow] {
        &self.rows
    }

    /// A copy of the rows sorted ascending by `column`.
    ///
    /// The sort is stable: rows with equal values keep their file order.
    pub fn sorted_by(&self, column: BoroughColumn) -> Vec<BoroughRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.value(column).total_cmp(&b.value(column)));
        rows
    }
}
