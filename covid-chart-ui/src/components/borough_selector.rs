//! Radio groups for the borough chart.
//!
//! Options are generated from [`Metric::ALL`] and [`Kind::ALL`], so only
//! combinations that name a real column can be picked.

use crate::state::AppState;
use covid_data::borough::{Kind, Metric};
use dioxus::prelude::*;

#[component]
pub fn BoroughMetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let metric = (state.metric)();
    let kind = (state.kind)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 24px; flex-wrap: wrap;",
            fieldset {
                style: "border: none; padding: 0; margin: 0;",
                legend { style: "font-weight: bold;", "Metric" }
                for m in Metric::ALL {
                    label {
                        key: "{m.key()}",
                        style: "margin-right: 12px;",
                        input {
                            r#type: "radio",
                            name: "borough-metric",
                            value: m.key(),
                            checked: m == metric,
                            onchange: move |_| state.metric.set(m),
                        }
                        " {m.label()}"
                    }
                }
            }
            fieldset {
                style: "border: none; padding: 0; margin: 0;",
                legend { style: "font-weight: bold;", "Measure" }
                for k in Kind::ALL {
                    label {
                        key: "{k.key()}",
                        style: "margin-right: 12px;",
                        input {
                            r#type: "radio",
                            name: "borough-kind",
                            value: k.key(),
                            checked: k == kind,
                            onchange: move |_| state.kind.set(k),
                        }
                        " {k.label()}"
                    }
                }
            }
        }
    }
}
