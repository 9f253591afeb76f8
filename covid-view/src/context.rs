//! The read-only dashboard context.
//!
//! Every dataset is queried once when the context is built; after that the
//! context is immutable and shared by every selection change.

use crate::charts;
use crate::figure::Figure;
use crate::summary::HeadlineCounts;
use anyhow::Context;
use covid_data::borough::BoroughMetricTable;
use covid_data::datasets::Dataset;
use covid_data::groups::GroupDataset;
use covid_data::syndromic::{admit_series, visit_series, ADMIT_ALL_AGES, AGE_BANDS, VISIT_ALL_AGES};
use covid_data::CovidDataError;
use covid_db::models::{DailyCounts, DateValue, GroupRates, TestDay};
use covid_db::Database;

/// Emergency department visit and admission series.
#[derive(Debug, Clone, PartialEq)]
pub struct SyndromicData {
    pub visits_all_ages: Vec<DateValue>,
    pub admits_all_ages: Vec<DateValue>,
    /// `(band, series)` in [`AGE_BANDS`] order.
    pub visits_by_age: Vec<(String, Vec<DateValue>)>,
    pub admits_by_age: Vec<(String, Vec<DateValue>)>,
}

/// Figures that never change after load.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFigures {
    pub tests: Figure,
    pub daily_counts: Figure,
    /// One figure per group dataset, in [`GroupDataset::ALL`] order.
    pub groups: Vec<(GroupDataset, Figure)>,
    pub visits_admissions: Figure,
    pub visits_by_age: Figure,
    pub admits_by_age: Figure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    pub headline: HeadlineCounts,
    pub boroughs: BoroughMetricTable,
    pub tests: Vec<TestDay>,
    pub daily_counts: Vec<DailyCounts>,
    pub group_rates: Vec<(GroupDataset, Vec<GroupRates>)>,
    pub syndromic: SyndromicData,
}

fn required_series(db: &Database, series: &str) -> anyhow::Result<Vec<DateValue>> {
    let points = db.query_syndromic_series(series)?;
    if points.is_empty() {
        return Err(CovidDataError::MissingSeries {
            series: series.to_string(),
        }
        .into());
    }
    Ok(points)
}

fn band_series(
    db: &Database,
    name: impl Fn(&str) -> String,
) -> anyhow::Result<Vec<(String, Vec<DateValue>)>> {
    AGE_BANDS
        .iter()
        .map(|band| Ok((band.to_string(), required_series(db, &name(*band))?)))
        .collect()
}

impl DashboardContext {
    /// Query every dataset and extract the headline counts.
    pub fn from_database(db: &Database) -> anyhow::Result<Self> {
        let summary = db.query_summary()?;
        let headline = HeadlineCounts::extract(&summary)?;
        let boroughs = db.query_borough_table()?;

        let group_rates = GroupDataset::ALL
            .iter()
            .map(|&group| Ok((group, db.query_group_rates(group)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let syndromic = SyndromicData {
            visits_all_ages: required_series(db, VISIT_ALL_AGES)?,
            admits_all_ages: required_series(db, ADMIT_ALL_AGES)?,
            visits_by_age: band_series(db, visit_series)?,
            admits_by_age: band_series(db, admit_series)?,
        };

        let context = Self {
            headline,
            boroughs,
            tests: db.query_tests()?,
            daily_counts: db.query_daily_counts()?,
            group_rates,
            syndromic,
        };
        log::info!(
            "[COVID] context: {} test days, {} daily counts",
            context.tests.len(),
            context.daily_counts.len()
        );
        Ok(context)
    }

    /// Load `(dataset, csv)` pairs into a fresh database and build the context.
    pub fn load(sources: &[(Dataset, &str)]) -> anyhow::Result<Self> {
        let db = Database::new()?;
        for &(dataset, csv_data) in sources {
            db.load_dataset(dataset, csv_data)?;
        }
        Self::from_database(&db).context("Failed to build dashboard context")
    }

    pub fn static_figures(&self) -> StaticFigures {
        let syndromic = &self.syndromic;
        StaticFigures {
            tests: charts::tests_figure(&self.tests),
            daily_counts: charts::daily_counts_figure(&self.daily_counts),
            groups: self
                .group_rates
                .iter()
                .map(|(group, rows)| (*group, charts::group_rate_figure(*group, rows)))
                .collect(),
            visits_admissions: charts::visits_admissions_figure(
                &syndromic.visits_all_ages,
                &syndromic.admits_all_ages,
            ),
            visits_by_age: charts::age_band_figure(
                charts::VISITS_BY_AGE_CHART_TITLE,
                &syndromic.visits_by_age,
            ),
            admits_by_age: charts::age_band_figure(
                charts::ADMITS_BY_AGE_CHART_TITLE,
                &syndromic.admits_by_age,
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SUMMARY: &str = "\
NYC_CASE_COUNT,203792
NYC_HOSPITALIZED_COUNT,52580
NYC_CONFIRMED_DEATH_COUNT,17179
NYC_PROBABLE_DEATH_COUNT,4647
As of June 1 2020,
";

    const TESTS: &str = "\
DATE,TOTAL_TESTS,POSITIVE_TESTS
03/03/2020,12,1
03/04/2020,20,3
";

    const CASE_HOSP_DEATH: &str = "\
DATE_OF_INTEREST,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
02/29/2020,1,5,0
03/01/2020,0,6,
";

    pub(crate) const BY_BORO: &str = "\
BOROUGH_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE,CASE_COUNT,HOSPITALIZED_COUNT,DEATH_COUNT
Bronx,3354.17,950.44,277.38,47854,13560,3958
Brooklyn,2276.99,594.65,229.05,58952,15396,5930
Manhattan,1538.69,405.63,136.04,25213,6647,2229
Queens,2799.22,736.39,240.54,63185,16622,5430
Staten Island,2934.03,543.34,174.17,14021,2597,833
Citywide,2426.37,626.04,209.50,209225,54822,18380
";

    const BY_SEX: &str = "\
SEX_GROUP,CASE_RATE,HOSPITALIZED_RATE,DEATH_RATE
Female,2244.16,535.38,160.71
Male,2617.54,752.98,262.12
Boroughwide,2426.37,626.04,209.50
";

    const SYNDROMIC: &str = "\
Date,Visit All ages,Visit 0-17,Visit 18-44,Visit 45-64,Visit 65-74,Visit 75+,Admit All ages,Admit 0-17,Admit 18-44,Admit 45-64,Admit 65-74,Admit 75+
3/1/20,10.5,1.0,8.2,12.1,15.0,20.3,2.0,0.1,0.9,2.5,4.1,7.7
3/2/20,11.0,1.2,8.8,12.9,16.2,21.0,2.5,0.1,1.1,3.0,4.8,8.4
";

    pub(crate) fn sample_sources() -> Vec<(Dataset, &'static str)> {
        vec![
            (Dataset::Summary, SUMMARY),
            (Dataset::Tests, TESTS),
            (Dataset::CaseHospDeath, CASE_HOSP_DEATH),
            (Dataset::ByBoro, BY_BORO),
            (Dataset::BySex, BY_SEX),
            (Dataset::Syndromic, SYNDROMIC),
        ]
    }

    pub(crate) fn sample_context() -> DashboardContext {
        DashboardContext::load(&sample_sources()).unwrap()
    }

    #[test]
    fn load_builds_every_table() {
        let context = sample_context();
        assert_eq!(context.headline.cases, 203_792);
        assert_eq!(context.boroughs.rows().len(), 5);
        assert_eq!(context.tests.len(), 2);
        assert_eq!(context.daily_counts[1].deaths, 0);
        assert_eq!(context.group_rates.len(), GroupDataset::ALL.len());
        assert_eq!(context.syndromic.visits_by_age.len(), AGE_BANDS.len());
        assert_eq!(context.syndromic.admits_by_age[4].0, "75+");
        assert_eq!(context.syndromic.admits_all_ages[1].value, 2.5);
    }

    #[test]
    fn group_rates_follow_dataset_order() {
        let context = sample_context();
        let (group, sex) = &context.group_rates[0];
        assert_eq!(*group, GroupDataset::Sex);
        assert_eq!(sex.len(), 2);
        assert_eq!(sex[0].group, "Female");
        let (group, race) = &context.group_rates[1];
        assert_eq!(*group, GroupDataset::Race);
        assert!(race.is_empty());
    }

    #[test]
    fn missing_summary_key_fails_startup() {
        let mut sources = sample_sources();
        sources[0] = (
            Dataset::Summary,
            "NYC_CASE_COUNT,1\nNYC_HOSPITALIZED_COUNT,2\nNYC_CONFIRMED_DEATH_COUNT,3\nOTHER,4\n",
        );
        let err = DashboardContext::load(&sources).unwrap_err();
        match err.downcast_ref::<CovidDataError>() {
            Some(CovidDataError::MissingKey { key }) => {
                assert_eq!(key, "NYC_PROBABLE_DEATH_COUNT")
            }
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn missing_series_fails_startup() {
        let mut sources = sample_sources();
        sources[5] = (
            Dataset::Syndromic,
            "Date,Visit All ages,Admit All ages\n3/1/20,10.5,2.0\n",
        );
        let err = DashboardContext::load(&sources).unwrap_err();
        match err.downcast_ref::<CovidDataError>() {
            Some(CovidDataError::MissingSeries { series }) => assert_eq!(series, "Visit 0-17"),
            other => panic!("expected MissingSeries, got {:?}", other),
        }
    }

    #[test]
    fn static_figures_cover_every_panel() {
        let figures = sample_context().static_figures();
        assert_eq!(figures.tests.data.len(), 2);
        assert_eq!(figures.daily_counts.data.len(), 3);
        assert_eq!(figures.groups.len(), 4);
        assert_eq!(figures.groups[0].0, GroupDataset::Sex);
        assert_eq!(figures.visits_admissions.layout.shapes.len(), 2);
        assert_eq!(figures.visits_by_age.data.len(), 5);
        assert_eq!(figures.admits_by_age.layout.title.text, charts::ADMITS_BY_AGE_CHART_TITLE);
    }
}
