//! Reusable Dioxus RSX components for the COVID dashboard.

mod borough_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod headline_table;
mod loading_spinner;

pub use borough_selector::BoroughMetricSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use headline_table::HeadlineTable;
pub use loading_spinner::LoadingSpinner;
