//! Typed query methods for retrieving dataset snapshots from the database.
//!
//! All queries return typed structs from [`crate::models`] or the
//! validated tables from `covid_data`, ready for the view layer.

use crate::models::{DailyCounts, DateValue, GroupRates, TestDay};
use crate::Database;
use covid_data::borough::{BoroughMetricTable, BoroughRow};
use covid_data::groups::GroupDataset;
use covid_data::summary::{SummaryEntry, SummaryTable};
use rusqlite::params;

impl Database {
    /// Get the headline counts in file order.
    pub fn query_summary(&self) -> anyhow::Result<SummaryTable> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT key, value FROM summary ORDER BY position")?;
        let entries = stmt
            .query_map([], |row| {
                Ok(SummaryEntry {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COVID] query: query_summary returned {} entries",
            entries.len()
        );
        Ok(SummaryTable::new(entries))
    }

    /// Get the borough table in file order.
    ///
    /// Fails unless exactly five distinct boroughs were loaded.
    pub fn query_borough_table(&self) -> anyhow::Result<BoroughMetricTable> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT borough, case_count, case_rate, hospitalized_count,
                    hospitalized_rate, death_count, death_rate
             FROM boroughs
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BoroughRow {
                    borough: row.get(0)?,
                    case_count: row.get(1)?,
                    case_rate: row.get(2)?,
                    hospitalized_count: row.get(3)?,
                    hospitalized_rate: row.get(4)?,
                    death_count: row.get(5)?,
                    death_rate: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COVID] query: query_borough_table returned {} rows",
            rows.len()
        );
        Ok(BoroughMetricTable::new(rows)?)
    }

    /// Get daily test counts, ordered chronologically.
    pub fn query_tests(&self) -> anyhow::Result<Vec<TestDay>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, total_tests, positive_tests FROM tests ORDER BY date",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TestDay {
                    date: row.get(0)?,
                    total_tests: row.get(1)?,
                    positive_tests: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[COVID] query: query_tests returned {} records", rows.len());
        Ok(rows)
    }

    /// Get daily case, hospitalization and death counts, ordered chronologically.
    pub fn query_daily_counts(&self) -> anyhow::Result<Vec<DailyCounts>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, case_count, hospitalized_count, death_count
             FROM case_hosp_death
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DailyCounts {
                    date: row.get(0)?,
                    cases: row.get(1)?,
                    hospitalized: row.get(2)?,
                    deaths: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COVID] query: query_daily_counts returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the rates for one demographic breakdown.
    ///
    /// Rows come back in file order, except race which is ordered by
    /// ascending case rate (file order breaks ties).
    pub fn query_group_rates(&self, group: GroupDataset) -> anyhow::Result<Vec<GroupRates>> {
        let conn = self.conn.borrow();
        let order = if group.sort_by_case_rate() {
            "case_rate, position"
        } else {
            "position"
        };
        let mut stmt = conn.prepare(&format!(
            "SELECT group_name, case_rate, hospitalized_rate, death_rate
             FROM group_rates
             WHERE dataset = ?1
             ORDER BY {}",
            order
        ))?;
        let rows = stmt
            .query_map(params![group.key()], |row| {
                Ok(GroupRates {
                    group: row.get(0)?,
                    case_rate: row.get(1)?,
                    hospitalized_rate: row.get(2)?,
                    death_rate: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COVID] query: query_group_rates({}) returned {} rows",
            group.key(),
            rows.len()
        );
        Ok(rows)
    }

    /// Get one syndromic series (e.g. `Visit All ages`), ordered chronologically.
    ///
    /// An unknown series returns an empty vector.
    pub fn query_syndromic_series(&self, series: &str) -> anyhow::Result<Vec<DateValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, value FROM syndromic WHERE series = ?1 ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![series], |row| {
                Ok(DateValue {
                    date: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COVID] query: query_syndromic_series({}) returned {} records",
            series,
            rows.len()
        );
        Ok(rows)
    }
}
