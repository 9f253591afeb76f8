//! Offline commands over a directory of downloaded CSVs.

use anyhow::Context;
use covid_data::datasets::Dataset;
use covid_view::selector::{select_borough_view, BoroughView};
use covid_view::summary::HeadlineCounts;
use covid_view::{handle_selection_change, DashboardContext, Selection};
use log::info;
use std::path::Path;

/// Read all nine files from `data_dir` and build the dashboard context.
pub fn load_context(data_dir: &str) -> anyhow::Result<DashboardContext> {
    let dir = Path::new(data_dir);
    let texts = Dataset::ALL
        .iter()
        .map(|dataset| {
            let path = dir.join(dataset.file_name());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))
                .map(|text| (*dataset, text))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let sources: Vec<(Dataset, &str)> = texts.iter().map(|(d, t)| (*d, t.as_str())).collect();
    DashboardContext::load(&sources)
}

/// One line per headline count: `Label: 1,234`.
pub fn format_headline(counts: &HeadlineCounts) -> String {
    counts
        .items()
        .iter()
        .map(|item| format!("{}: {}", item.label, item.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Axis label followed by one `borough<TAB>value` line per row.
pub fn format_borough_view(view: &BoroughView) -> String {
    let mut lines = vec![format!("{} ({})", view.axis_label, view.column)];
    lines.extend(
        view.rows
            .iter()
            .map(|row| format!("{}\t{}", row.borough, row.value(view.column))),
    );
    lines.join("\n")
}

pub fn run_validate(data_dir: &str) -> anyhow::Result<()> {
    let context = load_context(data_dir)?;
    let figures = context.static_figures();
    info!("Validated datasets in {}", data_dir);
    println!(
        "OK: {} test days, {} daily counts, {} boroughs, {} group charts, {} visit series by age",
        context.tests.len(),
        context.daily_counts.len(),
        context.boroughs.rows().len(),
        figures.groups.len(),
        context.syndromic.visits_by_age.len(),
    );
    Ok(())
}

pub fn run_summary(data_dir: &str) -> anyhow::Result<()> {
    let context = load_context(data_dir)?;
    println!("{}", format_headline(&context.headline));
    Ok(())
}

pub fn run_boroughs(data_dir: &str, metric: &str, kind: &str) -> anyhow::Result<()> {
    let selection = Selection::from_option_values(metric, kind)?;
    let context = load_context(data_dir)?;
    let view = select_borough_view(&context.boroughs, selection.column());
    println!("{}", format_borough_view(&view));
    Ok(())
}

pub fn run_figure(data_dir: &str, metric: &str, kind: &str) -> anyhow::Result<()> {
    let selection = Selection::from_option_values(metric, kind)?;
    let context = load_context(data_dir)?;
    let figure = handle_selection_change(&context, selection);
    println!("{}", serde_json::to_string_pretty(&figure)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_data::borough::{BoroughColumn, BoroughMetricTable, BoroughRow, Kind, Metric};
    use covid_data::CovidDataError;

    fn table() -> BoroughMetricTable {
        let rows = [
            ("Bronx", 3958.0),
            ("Brooklyn", 5930.0),
            ("Manhattan", 2229.0),
            ("Queens", 5430.0),
            ("Staten Island", 833.0),
        ]
        .into_iter()
        .map(|(name, deaths)| BoroughRow {
            borough: name.to_string(),
            case_count: 0.0,
            case_rate: 0.0,
            hospitalized_count: 0.0,
            hospitalized_rate: 0.0,
            death_count: deaths,
            death_rate: 0.0,
        })
        .collect();
        BoroughMetricTable::new(rows).unwrap()
    }

    #[test]
    fn borough_view_lines() {
        let view = select_borough_view(&table(), BoroughColumn::new(Metric::Death, Kind::Count));
        let text = format_borough_view(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Deaths (DEATH_COUNT)");
        assert_eq!(lines[1], "Staten Island\t833");
        assert_eq!(lines[5], "Brooklyn\t5930");
    }

    #[test]
    fn headline_lines() {
        let counts = HeadlineCounts {
            cases: 203792,
            hospitalized: 52580,
            confirmed_deaths: 17179,
            probable_deaths: 4647,
        };
        assert_eq!(
            format_headline(&counts),
            "Cases: 203,792\nHospitalized: 52,580\nConfirmed Deaths: 17,179\nProbable Deaths: 4,647"
        );
    }

    #[test]
    fn invalid_option_values_fail_before_reading_files() {
        let err = run_boroughs("/nonexistent/covid-data", "FOO", "COUNT").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CovidDataError>(),
            Some(CovidDataError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn missing_data_dir_is_reported() {
        let err = load_context("/nonexistent/covid-data").unwrap_err();
        assert!(err.to_string().contains("summary.csv"));
    }
}
