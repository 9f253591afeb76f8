//! Shared Dioxus components and Plotly.js bridge for the COVID dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand figure JSON to Plotly via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
