//! "At a Glance" headline numbers.

use covid_view::summary::HeadlineCounts;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeadlineTableProps {
    pub counts: HeadlineCounts,
}

/// Four big formatted numbers with their labels underneath.
#[component]
pub fn HeadlineTable(props: HeadlineTableProps) -> Element {
    let items = props.counts.items();

    rsx! {
        div {
            style: "display: flex; justify-content: space-around; flex-wrap: wrap; margin: 16px 0;",
            for item in items {
                div {
                    key: "{item.label}",
                    style: "text-align: center; min-width: 140px; margin: 8px;",
                    div {
                        style: "font-size: 32px; font-weight: bold;",
                        "{item.value}"
                    }
                    div {
                        style: "font-size: 14px; color: #666;",
                        "{item.label}"
                    }
                }
            }
        }
    }
}
