//! Plotly target element.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Plot height in pixels
    #[props(default = 450)]
    pub height: u32,
}

/// Fixed-height div that `js_bridge::render_figure` draws into.
///
/// The figure is drawn after mount, so the div starts empty.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            class: "chart",
            style: "width: 100%; margin-bottom: 12px;",
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.height}px;",
            }
        }
    }
}
