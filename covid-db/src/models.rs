//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the chart layer
//! or dumped as JSON from the CLI.

use serde::Serialize;

/// A single (date, value) pair used for line chart data points.
///
/// Dates are ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: f64,
}

/// One day of `tests.csv`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestDay {
    pub date: String,
    pub total_tests: i64,
    pub positive_tests: i64,
}

/// One day of `case-hosp-death.csv`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyCounts {
    pub date: String,
    pub cases: i64,
    pub hospitalized: i64,
    pub deaths: i64,
}

/// Case, hospitalization and death rates for one demographic group.
///
/// Rates are per 100,000 people (age-adjusted for race and poverty).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupRates {
    pub group: String,
    pub case_rate: f64,
    pub hospitalized_rate: f64,
    pub death_rate: f64,
}
