//! Placeholder shown while the embedded CSVs are parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading NYC Health data...".to_string())]
    pub label: String,
}

/// Centered status line with a `progress` bar in indeterminate state.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            "role": "status",
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 48px 0; color: #555;",
            progress { style: "width: 200px;" }
            span { "{props.label}" }
        }
    }
}
