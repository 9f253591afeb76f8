//! Demographic breakdown datasets that share the group/rate layout.

use crate::datasets::Dataset;
use serde::Serialize;

/// A breakdown dataset plotted as Deaths/Hospitalizations/Cases rate bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupDataset {
    Sex,
    Race,
    Poverty,
    Age,
}

impl GroupDataset {
    pub const ALL: [GroupDataset; 4] = [
        GroupDataset::Sex,
        GroupDataset::Race,
        GroupDataset::Poverty,
        GroupDataset::Age,
    ];

    /// Short identifier stored alongside each row in the database.
    pub fn key(&self) -> &'static str {
        match self {
            GroupDataset::Sex => "sex",
            GroupDataset::Race => "race",
            GroupDataset::Poverty => "poverty",
            GroupDataset::Age => "age",
        }
    }

    pub fn dataset(&self) -> Dataset {
        match self {
            GroupDataset::Sex => Dataset::BySex,
            GroupDataset::Race => Dataset::ByRace,
            GroupDataset::Poverty => Dataset::ByPoverty,
            GroupDataset::Age => Dataset::ByAge,
        }
    }

    pub fn group_column(&self) -> &'static str {
        match self {
            GroupDataset::Sex => "SEX_GROUP",
            GroupDataset::Race => "RACE_GROUP",
            GroupDataset::Poverty => "POVERTY_GROUP",
            GroupDataset::Age => "AGE_GROUP",
        }
    }

    /// Race and poverty publish age-adjusted rates only.
    pub fn age_adjusted(&self) -> bool {
        matches!(self, GroupDataset::Race | GroupDataset::Poverty)
    }

    /// Case, hospitalized and death rate column names, in that order.
    pub fn rate_columns(&self) -> [&'static str; 3] {
        if self.age_adjusted() {
            ["CASE_RATE_ADJ", "HOSPITALIZED_RATE_ADJ", "DEATH_RATE_ADJ"]
        } else {
            ["CASE_RATE", "HOSPITALIZED_RATE", "DEATH_RATE"]
        }
    }

    /// Leading rows kept; trailing rows are citywide or unknown-group totals.
    pub fn row_limit(&self) -> Option<usize> {
        match self {
            GroupDataset::Sex => Some(2),
            GroupDataset::Age => Some(5),
            GroupDataset::Race | GroupDataset::Poverty => None,
        }
    }

    /// Race bars are ordered by case rate rather than file order.
    pub fn sort_by_case_rate(&self) -> bool {
        matches!(self, GroupDataset::Race)
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            GroupDataset::Sex => "COVID-19 Rate by Sex (per 100,000 People)",
            GroupDataset::Race => "Age-Adjusted COVID-19 Rate by Race (per 100,000 People)",
            GroupDataset::Poverty => {
                "Age-Adjusted COVID-19 Rate by Poverty Level (per 100,000 People)"
            }
            GroupDataset::Age => "COVID-19 Rate by Age Group (per 100,000 People)",
        }
    }

    /// Section heading on the dashboard page.
    pub fn section_title(&self) -> &'static str {
        match self {
            GroupDataset::Sex => "Cases by Sex",
            GroupDataset::Race => "Cases by Race",
            GroupDataset::Poverty => "Cases by Poverty Level",
            GroupDataset::Age => "Cases by Age Group",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_rates_for_race_and_poverty() {
        assert_eq!(GroupDataset::Race.rate_columns()[0], "CASE_RATE_ADJ");
        assert_eq!(GroupDataset::Poverty.rate_columns()[2], "DEATH_RATE_ADJ");
        assert_eq!(GroupDataset::Age.rate_columns()[1], "HOSPITALIZED_RATE");
    }

    #[test]
    fn datasets_map_to_files() {
        assert_eq!(GroupDataset::Sex.dataset().file_name(), "by-sex.csv");
        assert_eq!(GroupDataset::Age.dataset().file_name(), "by-age.csv");
    }
}
