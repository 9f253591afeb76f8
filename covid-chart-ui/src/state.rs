//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use covid_data::borough::{Kind, Metric};
use covid_view::{DashboardContext, Selection};
use dioxus::prelude::*;

/// Shared state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded datasets (None until loaded)
    pub context: Signal<Option<DashboardContext>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// Borough chart metric radio group
    pub metric: Signal<Metric>,
    /// Borough chart count/rate radio group
    pub kind: Signal<Kind>,
}

impl AppState {
    /// Create a new AppState with the default borough selection.
    pub fn new() -> Self {
        let selection = Selection::default();
        Self {
            context: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            metric: Signal::new(selection.metric),
            kind: Signal::new(selection.kind),
        }
    }

    /// Current borough selection.
    pub fn selection(&self) -> Selection {
        Selection {
            metric: (self.metric)(),
            kind: (self.kind)(),
        }
    }
}
