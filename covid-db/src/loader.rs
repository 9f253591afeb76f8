//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. Columns are located by header name.
//!
//! # CSV Formats
//!
//! - **Summary** (no headers): `KEY,VALUE`, first four rows only
//! - **Tests** (headers): `DATE,TOTAL_TESTS,POSITIVE_TESTS,...`
//! - **Case/Hosp/Death** (headers): `DATE_OF_INTEREST,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT`
//! - **By borough** (headers): `BOROUGH_GROUP,CASE_RATE,...,DEATH_COUNT`, first five rows only
//! - **By sex/race/poverty/age** (headers): `<GROUP>_GROUP,CASE_RATE[_ADJ],...`
//! - **Syndromic** (headers): `Date,<series>,<series>,...`

use crate::Database;
use anyhow::Context;
use covid_data::borough::{BoroughColumn, BOROUGH_COUNT, BOROUGH_GROUP_COLUMN};
use covid_data::datasets::Dataset;
use covid_data::groups::GroupDataset;
use covid_data::summary::SUMMARY_ROWS;
use covid_data::syndromic::DATE_COLUMN;
use covid_data::{column_index, CovidDataError};
use covid_utils::dates::normalize_source_date;
use rusqlite::params;
use std::collections::HashSet;

/// Parse an integer count, accepting a trailing `.0` from float exports.
fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| parse_finite(s).map(|v| v.round() as i64))
}

/// Parse a float, rejecting `inf` and `NaN`.
fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_number(field: Option<&str>, column: &str, row: usize) -> anyhow::Result<f64> {
    let raw = field.unwrap_or("").trim();
    parse_finite(raw)
        .with_context(|| format!("Non-numeric {} value {:?} in row {}", column, raw, row + 1))
}

fn reader(csv_data: &str, has_headers: bool) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

impl Database {
    /// Load any dataset from its CSV text.
    pub fn load_dataset(&self, dataset: Dataset, csv_data: &str) -> anyhow::Result<()> {
        match dataset {
            Dataset::Summary => self.load_summary(csv_data),
            Dataset::Tests => self.load_tests(csv_data),
            Dataset::CaseHospDeath => self.load_case_hosp_death(csv_data),
            Dataset::ByBoro => self.load_boroughs(csv_data),
            Dataset::BySex => self.load_group_rates(GroupDataset::Sex, csv_data),
            Dataset::ByRace => self.load_group_rates(GroupDataset::Race, csv_data),
            Dataset::ByPoverty => self.load_group_rates(GroupDataset::Poverty, csv_data),
            Dataset::ByAge => self.load_group_rates(GroupDataset::Age, csv_data),
            Dataset::Syndromic => self.load_syndromic(csv_data),
        }
        .with_context(|| format!("Failed to load {}", dataset))
    }

    /// Load headline counts from `summary.csv`.
    ///
    /// Expected format (no headers): `KEY,VALUE`. Only the first four rows
    /// are kept; the file ends with a free-text "As of" note. A repeated key
    /// fails with [`CovidDataError::DuplicateGroup`]. The table is only
    /// replaced once every row has parsed.
    ///
    /// # Example CSV
    /// ```text
    /// NYC_CASE_COUNT,203792
    /// NYC_HOSPITALIZED_COUNT,52580
    /// ```
    pub fn load_summary(&self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data, false);

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(SUMMARY_ROWS);
        for result in rdr.records().take(SUMMARY_ROWS) {
            let r = result?;
            let key = r.get(0).unwrap_or("").trim().to_string();
            let raw_value = r.get(1).unwrap_or("").trim();
            let value = parse_int(raw_value).with_context(|| {
                format!("Non-integer summary value {:?} for {}", raw_value, key)
            })?;
            if !seen.insert(key.clone()) {
                return Err(CovidDataError::DuplicateGroup {
                    dataset: Dataset::Summary.to_string(),
                    group: key,
                }
                .into());
            }
            entries.push((key, value));
        }

        let conn = self.conn.borrow();
        conn.execute("DELETE FROM summary", [])?;
        for (position, (key, value)) in entries.iter().enumerate() {
            conn.execute(
                "INSERT INTO summary (position, key, value) VALUES (?1, ?2, ?3)",
                params![position as i64, key, value],
            )?;
        }
        log::info!("[COVID] loader: Loaded {} summary entries", entries.len());
        Ok(())
    }

    /// Load daily test counts from `tests.csv`.
    ///
    /// Rows with an unparsable date or count are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// DATE,TOTAL_TESTS,POSITIVE_TESTS,PERCENT_POSITIVE
    /// 03/03/2020,12,1,0.08
    /// ```
    pub fn load_tests(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data, true);
        let headers = rdr.headers()?.clone();
        let date_idx = column_index(&headers, "DATE")?;
        let total_idx = column_index(&headers, "TOTAL_TESTS")?;
        let positive_idx = column_index(&headers, "POSITIVE_TESTS")?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let date = match normalize_source_date(r.get(date_idx).unwrap_or("")) {
                Ok(d) => d,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let (total, positive) = match (
                r.get(total_idx).and_then(parse_int),
                r.get(positive_idx).and_then(parse_int),
            ) {
                (Some(t), Some(p)) => (t, p),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            conn.execute(
                "INSERT OR REPLACE INTO tests (date, total_tests, positive_tests)
                 VALUES (?1, ?2, ?3)",
                params![date, total, positive],
            )?;
            count += 1;
        }
        log::info!("[COVID] loader: Loaded {} test days, skipped {}", count, skipped);
        Ok(())
    }

    /// Load daily case, hospitalization and death counts from `case-hosp-death.csv`.
    ///
    /// Blank counts (the most recent days are often incomplete) load as 0.
    /// Rows with an unparsable date or a non-numeric count are skipped.
    pub fn load_case_hosp_death(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data, true);
        let headers = rdr.headers()?.clone();
        let date_idx = column_index(&headers, "DATE_OF_INTEREST")?;
        let count_idx = [
            column_index(&headers, "CASE_COUNT")?,
            column_index(&headers, "HOSPITALIZED_COUNT")?,
            column_index(&headers, "DEATH_COUNT")?,
        ];

        let mut count = 0u32;
        let mut skipped = 0u32;
        'rows: for result in rdr.records() {
            let r = result?;
            let date = match normalize_source_date(r.get(date_idx).unwrap_or("")) {
                Ok(d) => d,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let mut counts = [0i64; 3];
            for (slot, idx) in counts.iter_mut().zip(count_idx) {
                let raw = r.get(idx).unwrap_or("").trim();
                if raw.is_empty() {
                    continue;
                }
                match parse_int(raw) {
                    Some(v) => *slot = v,
                    None => {
                        skipped += 1;
                        continue 'rows;
                    }
                }
            }

            conn.execute(
                "INSERT OR REPLACE INTO case_hosp_death (date, case_count, hospitalized_count, death_count)
                 VALUES (?1, ?2, ?3, ?4)",
                params![date, counts[0], counts[1], counts[2]],
            )?;
            count += 1;
        }
        log::info!(
            "[COVID] loader: Loaded {} case/hosp/death days, skipped {}",
            count,
            skipped
        );
        Ok(())
    }

    /// Load the borough table from `by-boro.csv`.
    ///
    /// All six `<METRIC>_<KIND>` columns must be present; a missing one fails
    /// with [`CovidDataError::InvalidColumn`] so a schema mismatch surfaces at
    /// load time rather than on the first chart interaction. Only the first
    /// five rows are kept (the file ends with a citywide total). Values must
    /// be finite numbers and borough names unique. Every row is parsed before
    /// the table is touched, so a failed load leaves the previous table in
    /// place.
    ///
    /// # Example CSV
    /// ```text
    /// BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
    /// Bronx,3354.17,950.44,277.38,47854,13560,3958
    /// ```
    pub fn load_boroughs(&self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data, true);
        let headers = rdr.headers()?.clone();
        let group_idx = column_index(&headers, BOROUGH_GROUP_COLUMN)?;
        let mut value_idx = Vec::with_capacity(BoroughColumn::ALL.len());
        for column in BoroughColumn::ALL {
            value_idx.push((column, column_index(&headers, column.key())?));
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(BOROUGH_COUNT);
        for (position, result) in rdr.records().take(BOROUGH_COUNT).enumerate() {
            let r = result?;
            let borough = r.get(group_idx).unwrap_or("").trim().to_string();
            if !seen.insert(borough.clone()) {
                return Err(CovidDataError::DuplicateGroup {
                    dataset: Dataset::ByBoro.to_string(),
                    group: borough,
                }
                .into());
            }

            let mut values = [0f64; 6];
            for (slot, (column, idx)) in values.iter_mut().zip(&value_idx) {
                *slot = parse_number(r.get(*idx), column.key(), position)?;
            }
            rows.push((borough, values));
        }

        let conn = self.conn.borrow();
        conn.execute("DELETE FROM boroughs", [])?;
        for (position, (borough, values)) in rows.iter().enumerate() {
            let [case_rate, hospitalized_rate, death_rate, case_count, hospitalized_count, death_count] = *values;
            conn.execute(
                "INSERT INTO boroughs
                 (position, borough, case_count, case_rate, hospitalized_count,
                  hospitalized_rate, death_count, death_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    position as i64,
                    borough,
                    case_count,
                    case_rate,
                    hospitalized_count,
                    hospitalized_rate,
                    death_count,
                    death_rate
                ],
            )?;
        }
        log::info!("[COVID] loader: Loaded {} boroughs", rows.len());
        Ok(())
    }

    /// Load one of the demographic breakdowns (sex, race, poverty, age).
    ///
    /// Keeps the dataset's leading rows (see [`GroupDataset::row_limit`]).
    /// Rates must be finite numbers and group names unique. Reloading a
    /// dataset replaces its rows once the whole file has parsed.
    ///
    /// # Example CSV
    /// ```text
    /// RACE_GROUP,CASE_RATE_ADJ,HOSPITALIZED_RATE_ADJ,DEATH_RATE_ADJ
    /// Asian/Pacific-Islander,1185.37,380.41,135.52
    /// ```
    pub fn load_group_rates(&self, group: GroupDataset, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data, true);
        let headers = rdr.headers()?.clone();
        let group_idx = column_index(&headers, group.group_column())?;
        let rate_columns = group.rate_columns();
        let mut rate_idx = [0usize; 3];
        for (slot, name) in rate_idx.iter_mut().zip(rate_columns) {
            *slot = column_index(&headers, name)?;
        }

        let limit = group.row_limit().unwrap_or(usize::MAX);
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for (position, result) in rdr.records().take(limit).enumerate() {
            let r = result?;
            let name = r.get(group_idx).unwrap_or("").trim().to_string();
            if !seen.insert(name.clone()) {
                return Err(CovidDataError::DuplicateGroup {
                    dataset: group.dataset().to_string(),
                    group: name,
                }
                .into());
            }
            let mut rates = [0f64; 3];
            for ((slot, idx), column) in rates.iter_mut().zip(rate_idx).zip(rate_columns) {
                *slot = parse_number(r.get(idx), column, position)?;
            }
            rows.push((name, rates));
        }

        let conn = self.conn.borrow();
        conn.execute(
            "DELETE FROM group_rates WHERE dataset = ?1",
            params![group.key()],
        )?;
        for (position, (name, rates)) in rows.iter().enumerate() {
            conn.execute(
                "INSERT INTO group_rates
                 (dataset, position, group_name, case_rate, hospitalized_rate, death_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![group.key(), position as i64, name, rates[0], rates[1], rates[2]],
            )?;
        }
        log::info!("[COVID] loader: Loaded {} {} groups", rows.len(), group.key());
        Ok(())
    }

    /// Load `syndromic_data.csv`, unpivoting every non-date column into
    /// `(series, date, value)` rows.
    ///
    /// Blank, non-numeric or non-finite cells are skipped; a row whose date
    /// cannot be parsed is skipped entirely.
    ///
    /// # Example CSV
    /// ```text
    /// Date,Visit All ages,Admit All ages,Visit 0-17
    /// 3/1/20,10.2,3.1,1.5
    /// ```
    pub fn load_syndromic(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data, true);
        let headers = rdr.headers()?.clone();
        let date_idx = column_index(&headers, DATE_COLUMN)?;
        let series: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, name)| *idx != date_idx && !name.trim().is_empty())
            .map(|(idx, name)| (idx, name.trim().to_string()))
            .collect();

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let date = match normalize_source_date(r.get(date_idx).unwrap_or("")) {
                Ok(d) => d,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            for (idx, name) in &series {
                let value = match r.get(*idx).and_then(parse_finite) {
                    Some(v) => v,
                    None => {
                        skipped += 1;
                        continue;
                    }
                };
                conn.execute(
                    "INSERT OR REPLACE INTO syndromic (series, date, value) VALUES (?1, ?2, ?3)",
                    params![name, date, value],
                )?;
                count += 1;
            }
        }
        log::info!(
            "[COVID] loader: Loaded {} syndromic values across {} series, skipped {}",
            count,
            series.len(),
            skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use covid_data::datasets::Dataset;
    use covid_data::groups::GroupDataset;
    use covid_data::CovidDataError;

    const BY_BORO_CSV: &str = "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
Bronx,3354.17,950.44,277.38,47854,13560,3958
Brooklyn,2276.99,594.65,229.05,58952,15396,5930
Manhattan,1538.69,405.63,136.04,25213,6647,2229
Queens,2799.22,736.39,240.54,63185,16622,5430
Staten Island,2934.03,543.34,174.17,14021,2597,833
Citywide,2428.64,632.04,219.93,209306,54470,18380
";

    fn count_rows(db: &Database, table: &str) -> i64 {
        let conn = db.conn.borrow();
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_summary_keeps_first_four_rows() {
        let db = Database::new().unwrap();
        let csv = "\
NYC_CASE_COUNT,203792
NYC_HOSPITALIZED_COUNT,52580
NYC_CONFIRMED_DEATH_COUNT,17179
NYC_PROBABLE_DEATH_COUNT,4647
As of: May 31 at 1:30 pm,
";
        db.load_summary(csv).unwrap();
        assert_eq!(count_rows(&db, "summary"), 4);

        let conn = db.conn.borrow();
        let value: i64 = conn
            .query_row(
                "SELECT value FROM summary WHERE key = 'NYC_CONFIRMED_DEATH_COUNT'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(value, 17179);
    }

    #[test]
    fn load_summary_rejects_non_integer_value() {
        let db = Database::new().unwrap();
        let result = db.load_summary("NYC_CASE_COUNT,lots\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_summary_rejects_repeated_key() {
        let db = Database::new().unwrap();
        let csv = "\
NYC_CASE_COUNT,1
NYC_HOSPITALIZED_COUNT,2
NYC_CASE_COUNT,3
NYC_PROBABLE_DEATH_COUNT,4
";
        let err = db.load_summary(csv).unwrap_err();
        match err.downcast_ref::<CovidDataError>() {
            Some(CovidDataError::DuplicateGroup { dataset, group }) => {
                assert_eq!(dataset, "summary.csv");
                assert_eq!(group, "NYC_CASE_COUNT");
            }
            other => panic!("expected DuplicateGroup, got {:?}", other),
        }
        assert_eq!(count_rows(&db, "summary"), 0);
    }

    #[test]
    fn load_summary_replaces_on_reload() {
        let db = Database::new().unwrap();
        db.load_summary("NYC_CASE_COUNT,1\nNYC_HOSPITALIZED_COUNT,2\n")
            .unwrap();
        db.load_summary("NYC_CASE_COUNT,5\n").unwrap();
        assert_eq!(count_rows(&db, "summary"), 1);
    }

    #[test]
    fn load_tests_normalizes_dates_and_skips_bad_rows() {
        let db = Database::new().unwrap();
        let csv = "\
DATE,TOTAL_TESTS,POSITIVE_TESTS,PERCENT_POSITIVE
03/03/2020,12,1,0.08
03/04/2020,20,x,0.10
not a date,5,1,0.2
03/05/2020,44,6,0.14
";
        db.load_tests(csv).unwrap();
        assert_eq!(count_rows(&db, "tests"), 2);

        let conn = db.conn.borrow();
        let total: i64 = conn
            .query_row(
                "SELECT total_tests FROM tests WHERE date = '2020-03-05'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(total, 44);
    }

    #[test]
    fn load_tests_requires_columns() {
        let db = Database::new().unwrap();
        let err = db.load_tests("DATE,TOTAL\n03/03/2020,12\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CovidDataError>(),
            Some(CovidDataError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn load_case_hosp_death_blank_counts_are_zero() {
        let db = Database::new().unwrap();
        let csv = "\
DATE_OF_INTEREST,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
02/29/2020,1,5,0
03/01/2020,0,,
03/02/2020,bad,1,1
";
        db.load_case_hosp_death(csv).unwrap();
        assert_eq!(count_rows(&db, "case_hosp_death"), 2);

        let conn = db.conn.borrow();
        let hospitalized: i64 = conn
            .query_row(
                "SELECT hospitalized_count FROM case_hosp_death WHERE date = '2020-03-01'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(hospitalized, 0);
    }

    #[test]
    fn load_boroughs_keeps_first_five_rows() {
        let db = Database::new().unwrap();
        db.load_boroughs(BY_BORO_CSV).unwrap();
        assert_eq!(count_rows(&db, "boroughs"), 5);

        let conn = db.conn.borrow();
        let citywide: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM boroughs WHERE borough = 'Citywide'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(citywide, 0);
    }

    #[test]
    fn load_boroughs_reports_missing_metric_column() {
        let db = Database::new().unwrap();
        let csv = "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT
Bronx,3354.17,950.44,277.38,47854,13560
";
        let err = db.load_boroughs(csv).unwrap_err();
        match err.downcast_ref::<CovidDataError>() {
            Some(CovidDataError::InvalidColumn { column }) => assert_eq!(column, "DEATH_COUNT"),
            other => panic!("expected InvalidColumn, got {:?}", other),
        }
    }

    #[test]
    fn load_boroughs_rejects_duplicates() {
        let db = Database::new().unwrap();
        let csv = "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
Bronx,1,1,1,1,1,1
Bronx,2,2,2,2,2,2
";
        let err = db.load_boroughs(csv).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CovidDataError>(),
            Some(CovidDataError::DuplicateGroup { .. })
        ));
    }

    #[test]
    fn load_boroughs_rejects_non_numeric_values() {
        let db = Database::new().unwrap();
        let csv = "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
Bronx,n/a,1,1,1,1,1
";
        assert!(db.load_boroughs(csv).is_err());
    }

    #[test]
    fn load_boroughs_rejects_non_finite_values() {
        let db = Database::new().unwrap();
        for bad in ["inf", "NaN", "-inf"] {
            let csv = format!(
                "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
Bronx,1,1,1,1,1,1
Brooklyn,{},1,1,1,1,1
",
                bad
            );
            let err = db.load_boroughs(&csv).unwrap_err();
            assert!(
                err.to_string().contains("Non-numeric CASE_RATE"),
                "unexpected error for {}: {}",
                bad,
                err
            );
            assert_eq!(count_rows(&db, "boroughs"), 0, "nothing inserted for {}", bad);
        }
    }

    #[test]
    fn failed_borough_reload_keeps_previous_table() {
        let db = Database::new().unwrap();
        db.load_boroughs(BY_BORO_CSV).unwrap();
        let bad = BY_BORO_CSV.replace("Queens,2799.22", "Queens,inf");
        assert!(db.load_boroughs(&bad).is_err());
        assert_eq!(count_rows(&db, "boroughs"), 5);
    }

    #[test]
    fn load_group_rates_rejects_nan() {
        let db = Database::new().unwrap();
        let csv = "\
SEX_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE
Female,2244.16,535.38,160.71
Male,NaN,728.12,276.84
";
        assert!(db.load_group_rates(GroupDataset::Sex, csv).is_err());
        assert_eq!(count_rows(&db, "group_rates"), 0);
    }

    #[test]
    fn load_boroughs_replaces_on_reload() {
        let db = Database::new().unwrap();
        db.load_boroughs(BY_BORO_CSV).unwrap();
        db.load_boroughs(BY_BORO_CSV).unwrap();
        assert_eq!(count_rows(&db, "boroughs"), 5);
    }

    #[test]
    fn load_group_rates_applies_row_limit() {
        let db = Database::new().unwrap();
        let csv = "\
SEX_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE
Female,2244.16,535.38,160.71
Male,2611.44,728.12,276.84
Citywide,2428.64,632.04,219.93
";
        db.load_group_rates(GroupDataset::Sex, csv).unwrap();
        assert_eq!(count_rows(&db, "group_rates"), 2);
    }

    #[test]
    fn load_group_rates_uses_adjusted_columns() {
        let db = Database::new().unwrap();
        let unadjusted = "\
RACE_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE
White,1,1,1
";
        assert!(db.load_group_rates(GroupDataset::Race, unadjusted).is_err());

        let adjusted = "\
RACE_GROUP,CASE_RATE_ADJ,HOSPITALIZED_RATE_ADJ,DEATH_RATE_ADJ
White,1185.37,380.41,135.52
";
        db.load_group_rates(GroupDataset::Race, adjusted).unwrap();
        assert_eq!(count_rows(&db, "group_rates"), 1);
    }

    #[test]
    fn load_syndromic_unpivots_columns() {
        let db = Database::new().unwrap();
        let csv = "\
Date,Visit All ages,Admit All ages
3/1/20,10.5,2.0
3/2/20,11.0,
3/3/20,inf,2.5
";
        db.load_syndromic(csv).unwrap();
        assert_eq!(
            count_rows(&db, "syndromic"),
            4,
            "blank and non-finite cells should be skipped"
        );
    }

    #[test]
    fn load_dataset_dispatches_by_file() {
        let db = Database::new().unwrap();
        db.load_dataset(Dataset::ByBoro, BY_BORO_CSV).unwrap();
        assert_eq!(count_rows(&db, "boroughs"), 5);

        let err = db.load_dataset(Dataset::ByAge, "AGE_GROUP\n0-17\n").unwrap_err();
        assert!(err.to_string().contains("by-age.csv"));
    }
}
