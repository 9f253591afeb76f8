//! Borough chart selection.
//!
//! Maps the current borough selection onto a sorted projection of the
//! borough table and the x-axis label for the chart. Every call sorts a
//! fresh copy; the table itself never changes.

use covid_data::borough::{BoroughColumn, BoroughMetricTable, BoroughRow, Kind, Metric};
use covid_data::CovidDataError;
use serde::Serialize;

/// Label for the count branch of the single case toggle.
pub const NUMBER_OF_CASES_LABEL: &str = "Number of Cases";
/// Label for the rate branch of the single case toggle.
pub const CASE_RATE_LABEL: &str = "Case Rate (per 100,000 People)";

/// The borough table sorted ascending by one column, plus its axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoroughView {
    pub column: BoroughColumn,
    pub rows: Vec<BoroughRow>,
    pub axis_label: String,
}

impl BoroughView {
    /// Selected column's values, in row order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.value(self.column)).collect()
    }

    /// Borough names, in row order.
    pub fn boroughs(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.borough.clone()).collect()
    }
}

/// Project the table onto `column`.
pub fn select_borough_view(table: &BoroughMetricTable, column: BoroughColumn) -> BoroughView {
    BoroughView {
        column,
        rows: table.sorted_by(column),
        axis_label: column.axis_label(),
    }
}

/// Project the table onto the column named by two raw option values.
///
/// Fails with [`CovidDataError::InvalidColumn`] when the pair names no column.
pub fn select_borough_view_by_option_values(
    table: &BoroughMetricTable,
    metric: &str,
    kind: &str,
) -> Result<BoroughView, CovidDataError> {
    let column = BoroughColumn::from_option_values(metric, kind)?;
    Ok(select_borough_view(table, column))
}

/// Single count/rate toggle over cases only.
pub fn select_case_toggle_view(table: &BoroughMetricTable, use_actual_count: bool) -> BoroughView {
    let (kind, label) = if use_actual_count {
        (Kind::Count, NUMBER_OF_CASES_LABEL)
    } else {
        (Kind::Rate, CASE_RATE_LABEL)
    };
    let column = BoroughColumn::new(Metric::Case, kind);
    BoroughView {
        column,
        rows: table.sorted_by(column),
        axis_label: label.to_string(),
    }
}
