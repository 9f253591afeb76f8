//! Figure builders for each dashboard panel.

use crate::figure::{Align, Annotation, AxisValue, Figure, Layout, LineStyle, Shape, Trace};
use crate::selector::BoroughView;
use covid_data::groups::GroupDataset;
use covid_db::models::{DailyCounts, DateValue, GroupRates, TestDay};

pub const DEATHS_COLOR: &str = "#d62728";
pub const HOSPITALIZATIONS_COLOR: &str = "#ff7f0e";
pub const CASES_COLOR: &str = "#1f77b4";

pub const BOROUGH_CHART_TITLE: &str = "COVID-19 Cases by Borough";
pub const TESTS_CHART_TITLE: &str = "Number of Cases Performed vs Number of New COVID-19 Cases";
pub const DAILY_COUNTS_CHART_TITLE: &str = "Daily COVID-19 Cases, Hospitalizations and Deaths";
pub const VISITS_ADMISSIONS_CHART_TITLE: &str =
    "COVID-19 Rate of Hospital Visits vs Admissions (per 100,000 People)";
pub const VISITS_BY_AGE_CHART_TITLE: &str =
    "COVID-19 Rate of Hospital Visits by Age Group (per 100,000 People)";
pub const ADMITS_BY_AGE_CHART_TITLE: &str =
    "COVID-19 Rate of Hospital Admissions by Age Group (per 100,000 People)";

/// Policy milestones marked on the visits/admissions chart:
/// (date, label, text alignment, arrow x offset, arrow y offset).
const POLICY_MARKERS: [(&str, &str, Align, f64, f64); 2] = [
    (
        "2020-03-07",
        "Cuomo Declares State of Emergency",
        Align::Right,
        -85.0,
        -20.0,
    ),
    (
        "2020-03-22",
        "State-Wide Stay-at-Home Order",
        Align::Left,
        90.0,
        -15.0,
    ),
];

fn dates<T>(rows: &[T], date: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| date(r).to_string()).collect()
}

fn series_line(name: &str, series: &[DateValue]) -> Trace {
    Trace::line(
        name,
        dates(series, |p| p.date.as_str()),
        series.iter().map(|p| p.value).collect(),
    )
}

/// Horizontal bar chart of the selected borough column.
pub fn borough_figure(view: &BoroughView) -> Figure {
    let trace = Trace::horizontal_bar(view.values(), view.boroughs());
    Figure::new(
        vec![trace],
        Layout::titled(BOROUGH_CHART_TITLE).x_title(&view.axis_label),
    )
}

/// Total vs positive tests over time, with end-of-line labels.
pub fn tests_figure(tests: &[TestDay]) -> Figure {
    let x = dates(tests, |t| t.date.as_str());
    let total = Trace::line(
        "Total Tests",
        x.clone(),
        tests.iter().map(|t| t.total_tests as f64).collect(),
    );
    let positive = Trace::line(
        "Positive Tests",
        x,
        tests.iter().map(|t| t.positive_tests as f64).collect(),
    );

    let mut layout = Layout::titled(TESTS_CHART_TITLE)
        .show_legend(false)
        .y_title("Number of People");
    if let Some(last) = tests.last() {
        let at = || AxisValue::Text(last.date.clone());
        layout = layout
            .annotation(Annotation::arrow(
                at(),
                last.total_tests as f64,
                "Total Tests",
                Align::Left,
                30.0,
                0.0,
            ))
            .annotation(Annotation::arrow(
                at(),
                last.positive_tests as f64,
                "Positive Tests",
                Align::Left,
                40.0,
                0.0,
            ));
    }
    Figure::new(vec![total, positive], layout)
}

/// Deaths, hospitalizations and cases rate bars per demographic group.
pub fn group_rate_figure(group: GroupDataset, rows: &[GroupRates]) -> Figure {
    let labels: Vec<String> = rows.iter().map(|r| r.group.clone()).collect();
    let bars = [
        ("Deaths", DEATHS_COLOR, rows.iter().map(|r| r.death_rate).collect()),
        (
            "Hospitalizations",
            HOSPITALIZATIONS_COLOR,
            rows.iter().map(|r| r.hospitalized_rate).collect(),
        ),
        ("Cases", CASES_COLOR, rows.iter().map(|r| r.case_rate).collect()),
    ];
    let data = bars
        .into_iter()
        .map(|(name, color, values): (&str, &str, Vec<f64>)| {
            Trace::horizontal_bar(values, labels.clone())
                .named(name)
                .colored(color)
        })
        .collect();
    Figure::new(data, Layout::titled(group.chart_title()))
}

/// Daily cases, hospitalizations and deaths over time.
pub fn daily_counts_figure(days: &[DailyCounts]) -> Figure {
    let x = dates(days, |d| d.date.as_str());
    let data = vec![
        Trace::line("Cases", x.clone(), days.iter().map(|d| d.cases as f64).collect())
            .colored(CASES_COLOR),
        Trace::line(
            "Hospitalizations",
            x.clone(),
            days.iter().map(|d| d.hospitalized as f64).collect(),
        )
        .colored(HOSPITALIZATIONS_COLOR),
        Trace::line("Deaths", x, days.iter().map(|d| d.deaths as f64).collect())
            .colored(DEATHS_COLOR),
    ];
    Figure::new(
        data,
        Layout::titled(DAILY_COUNTS_CHART_TITLE).show_legend(true),
    )
}

/// All-ages visits vs admissions, with the March 2020 policy milestones.
pub fn visits_admissions_figure(visits: &[DateValue], admits: &[DateValue]) -> Figure {
    let y_max = visits
        .iter()
        .chain(admits)
        .map(|p| p.value)
        .fold(0.0, f64::max);

    let mut layout = Layout::titled(VISITS_ADMISSIONS_CHART_TITLE).show_legend(true);
    for (date, text, align, ax, ay) in POLICY_MARKERS {
        layout = layout
            .shape(Shape::vertical_line(
                AxisValue::Text(date.to_string()),
                y_max,
                0.0,
                LineStyle {
                    color: "gray".to_string(),
                    width: 3.0,
                },
                0.5,
            ))
            .annotation(Annotation::arrow(
                AxisValue::Text(date.to_string()),
                y_max,
                text,
                align,
                ax,
                ay,
            ));
    }

    Figure::new(
        vec![series_line("Admissions", admits), series_line("Visits", visits)],
        layout,
    )
}

/// One line per age band.
pub fn age_band_figure(title: &str, bands: &[(String, Vec<DateValue>)]) -> Figure {
    let data = bands
        .iter()
        .map(|(band, series)| series_line(band, series))
        .collect();
    Figure::new(data, Layout::titled(title).show_legend(true))
}
