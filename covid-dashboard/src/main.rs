//! NYC COVID-19 Dashboard
//!
//! Single-page dashboard over the NYC Department of Health and Mental
//! Hygiene COVID-19 data: headline counts, testing, borough comparison,
//! daily counts, demographic breakdowns and hospital visits.
//!
//! Data flow:
//! 1. `build.rs` copies the nine CSVs from `fixtures/` into `OUT_DIR`.
//! 2. `include_str!` embeds these CSVs into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database and
//!    the read-only `DashboardContext` is built from it.
//! 4. Static figures are rendered once. The borough chart re-renders
//!    whenever either radio group changes.

use covid_chart_ui::components::{
    BoroughMetricSelector, ChartContainer, ChartHeader, ErrorDisplay, HeadlineTable,
    LoadingSpinner,
};
use covid_chart_ui::js_bridge;
use covid_chart_ui::state::AppState;
use covid_data::datasets::Dataset;
use covid_data::groups::GroupDataset;
use covid_view::{handle_selection_change, DashboardContext};
use dioxus::prelude::*;

const SUMMARY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/summary.csv"));
const TESTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/tests.csv"));
const CASE_HOSP_DEATH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/case-hosp-death.csv"));
const BY_BORO_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/by-boro.csv"));
const BY_SEX_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/by-sex.csv"));
const BY_RACE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/by-race.csv"));
const BY_POVERTY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/by-poverty.csv"));
const BY_AGE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/by-age.csv"));
const SYNDROMIC_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/syndromic_data.csv"));

/// Chart container DOM element IDs used by Plotly to render into.
const CHART_TESTS_ID: &str = "tests-chart";
const CHART_BOROUGH_ID: &str = "borough-chart";
const CHART_DAILY_ID: &str = "daily-counts-chart";
const CHART_VISITS_ADMITS_ID: &str = "visits-admissions-chart";
const CHART_VISITS_AGE_ID: &str = "visits-by-age-chart";
const CHART_ADMITS_AGE_ID: &str = "admits-by-age-chart";

const SOURCE_URL: &str = "https://github.com/nychealth/coronavirus-data";

fn group_chart_id(group: GroupDataset) -> String {
    format!("{}-chart", group.key())
}

fn sources() -> [(Dataset, &'static str); 9] {
    [
        (Dataset::Summary, SUMMARY_CSV),
        (Dataset::Tests, TESTS_CSV),
        (Dataset::CaseHospDeath, CASE_HOSP_DEATH_CSV),
        (Dataset::ByBoro, BY_BORO_CSV),
        (Dataset::BySex, BY_SEX_CSV),
        (Dataset::ByRace, BY_RACE_CSV),
        (Dataset::ByPoverty, BY_POVERTY_CSV),
        (Dataset::ByAge, BY_AGE_CSV),
        (Dataset::Syndromic, SYNDROMIC_CSV),
    ]
}

fn all_chart_ids() -> Vec<String> {
    let mut ids: Vec<String> = [
        CHART_TESTS_ID,
        CHART_BOROUGH_ID,
        CHART_DAILY_ID,
        CHART_VISITS_ADMITS_ID,
        CHART_VISITS_AGE_ID,
        CHART_ADMITS_AGE_ID,
    ]
    .iter()
    .map(|id| id.to_string())
    .collect();
    ids.extend(GroupDataset::ALL.iter().map(|g| group_chart_id(*g)));
    ids
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Build the context on mount
    use_effect(move || {
        match DashboardContext::load(&sources()) {
            Ok(context) => {
                state.context.set(Some(context));
            }
            Err(e) => {
                log::error!("Failed to load dashboard data: {:#}", e);
                state.error_msg.set(Some(format!("{:?}", e)));
            }
        }
        state.loading.set(false);
    });

    // Render the non-interactive charts after data loaded
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let figures = match &*state.context.read() {
            Some(context) => context.static_figures(),
            None => return,
        };

        js_bridge::init_charts();

        js_bridge::render_figure(CHART_TESTS_ID, &figures.tests);
        js_bridge::render_figure(CHART_DAILY_ID, &figures.daily_counts);
        for (group, figure) in &figures.groups {
            js_bridge::render_figure(&group_chart_id(*group), figure);
        }
        js_bridge::render_figure(CHART_VISITS_ADMITS_ID, &figures.visits_admissions);
        js_bridge::render_figure(CHART_VISITS_AGE_ID, &figures.visits_by_age);
        js_bridge::render_figure(CHART_ADMITS_AGE_ID, &figures.admits_by_age);
    });

    // Borough chart follows the radio groups
    use_effect(move || {
        let selection = state.selection();
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let figure = match &*state.context.read() {
            Some(context) => handle_selection_change(context, selection),
            None => return,
        };
        js_bridge::init_charts();
        js_bridge::render_figure(CHART_BOROUGH_ID, &figure);
    });

    use_drop(|| {
        for id in all_chart_ids() {
            js_bridge::destroy_chart(&id);
        }
    });

    let headline = state.context.read().as_ref().map(|c| c.headline);

    rsx! {
        div {
            style: "padding: 16px; max-width: 1000px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 { style: "margin-bottom: 0;", "NYC COVID-19 Dashboard" }
            p { style: "margin-top: 4px; color: #666;", "by Austin Poor" }
            p {
                "A look at how COVID-19 has spread through New York City, using data published daily by the NYC Department of Health and Mental Hygiene."
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartHeader { title: "At a Glance".to_string() }
                if let Some(counts) = headline {
                    HeadlineTable { counts }
                }

                ChartHeader {
                    title: "Testing".to_string(),
                    description: "Tests performed each day against the number that came back positive.".to_string(),
                }
                ChartContainer { id: CHART_TESTS_ID.to_string() }

                ChartHeader { title: "Cases by Borough".to_string() }
                ChartContainer { id: CHART_BOROUGH_ID.to_string(), height: 400 }
                BoroughMetricSelector {}

                ChartHeader { title: "Daily Counts".to_string() }
                ChartContainer { id: CHART_DAILY_ID.to_string() }

                for group in GroupDataset::ALL {
                    div {
                        key: "{group.key()}",
                        ChartHeader { title: group.section_title().to_string() }
                        ChartContainer { id: group_chart_id(group), height: 400 }
                    }
                }

                ChartHeader {
                    title: "Hospital Visits and Admissions".to_string(),
                    description: "Emergency department visits and admissions for influenza-like illness and/or pneumonia.".to_string(),
                }
                ChartContainer { id: CHART_VISITS_ADMITS_ID.to_string() }
                ChartContainer { id: CHART_VISITS_AGE_ID.to_string() }
                ChartContainer { id: CHART_ADMITS_AGE_ID.to_string() }

                ChartHeader { title: "Source".to_string() }
                div {
                    style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                    "Data provided by the NYC Department of Health and Mental Hygiene: "
                    a { href: SOURCE_URL, "{SOURCE_URL}" }
                }
            }
        }
    }
}
