//! Views over the loaded datasets.
//!
//! This crate turns the immutable tables from `covid-db` into what the
//! dashboard displays:
//! - `selector`: the borough chart selection (sorted projection + axis label)
//! - `summary`: headline counts with thousands separators
//! - `figure` / `charts`: Plotly figure specifications
//! - `context` / `handler`: the read-only dashboard context and the
//!   selection-change entry point

pub mod charts;
pub mod context;
pub mod figure;
pub mod handler;
pub mod selector;
pub mod summary;

pub use context::{DashboardContext, StaticFigures};
pub use handler::{handle_selection_change, Selection};
