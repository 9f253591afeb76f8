//! Headline counts shown in the "At a Glance" table.

use covid_data::summary::{
    SummaryTable, NYC_CASE_COUNT, NYC_CONFIRMED_DEATH_COUNT, NYC_HOSPITALIZED_COUNT,
    NYC_PROBABLE_DEATH_COUNT,
};
use covid_data::CovidDataError;
use covid_utils::numbers::format_thousands;
use serde::Serialize;

/// The four citywide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineCounts {
    pub cases: i64,
    pub hospitalized: i64,
    pub confirmed_deaths: i64,
    pub probable_deaths: i64,
}

/// One formatted cell of the headline table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineItem {
    pub label: &'static str,
    pub value: String,
}

impl HeadlineCounts {
    /// Pull the four counts out of the summary table.
    ///
    /// A missing key is an error, never a zero.
    pub fn extract(summary: &SummaryTable) -> Result<Self, CovidDataError> {
        Ok(Self {
            cases: summary.get(NYC_CASE_COUNT)?,
            hospitalized: summary.get(NYC_HOSPITALIZED_COUNT)?,
            confirmed_deaths: summary.get(NYC_CONFIRMED_DEATH_COUNT)?,
            probable_deaths: summary.get(NYC_PROBABLE_DEATH_COUNT)?,
        })
    }

    /// Display order and labels for the headline table.
    pub fn items(&self) -> Vec<HeadlineItem> {
        [
            ("Cases", self.cases),
            ("Hospitalized", self.hospitalized),
            ("Confirmed Deaths", self.confirmed_deaths),
            ("Probable Deaths", self.probable_deaths),
        ]
        .into_iter()
        .map(|(label, value)| HeadlineItem {
            label,
            value: format_thousands(value),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_data::summary::SummaryEntry;

    fn entry(key: &str, value: i64) -> SummaryEntry {
        SummaryEntry {
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn extract_and_format() {
        let table = SummaryTable::new(vec![
            entry(NYC_CASE_COUNT, 203792),
            entry(NYC_HOSPITALIZED_COUNT, 52580),
            entry(NYC_CONFIRMED_DEATH_COUNT, 17179),
            entry(NYC_PROBABLE_DEATH_COUNT, 4647),
        ]);
        let counts = HeadlineCounts::extract(&table).unwrap();
        assert_eq!(counts.confirmed_deaths, 17179);

        let items = counts.items();
        let rendered: Vec<(&str, &str)> =
            items.iter().map(|i| (i.label, i.value.as_str())).collect();
        assert_eq!(
            rendered,
            vec![
                ("Cases", "203,792"),
                ("Hospitalized", "52,580"),
                ("Confirmed Deaths", "17,179"),
                ("Probable Deaths", "4,647"),
            ]
        );
    }

    #[test]
    fn extract_reports_first_missing_key() {
        let table = SummaryTable::new(vec![
            entry(NYC_CASE_COUNT, 1),
            entry(NYC_HOSPITALIZED_COUNT, 2),
            entry(NYC_PROBABLE_DEATH_COUNT, 4),
        ]);
        match HeadlineCounts::extract(&table) {
            Err(CovidDataError::MissingKey { key }) => assert_eq!(key, NYC_CONFIRMED_DEATH_COUNT),
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }
}
