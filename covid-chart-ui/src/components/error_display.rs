//! Load failure panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Full error chain, one cause per line
    pub message: String,
}

/// Replaces the dashboard body when the data could not be loaded.
///
/// No figures are drawn from partial data; the page shows the error chain
/// instead.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        section {
            "role": "alert",
            style: "margin: 16px 0; border-left: 4px solid #d62728; background: #fdf0f0; padding: 12px 16px;",
            h3 {
                style: "margin: 0 0 8px 0; color: #a11d1e;",
                "The dashboard data could not be loaded"
            }
            pre {
                style: "margin: 0; font-size: 12px; white-space: pre-wrap; color: #5c1010;",
                "{props.message}"
            }
        }
    }
}
