//! Shared Dioxus components and Plotly bridge for the weather dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly chart calls via `js_sys::eval()`
//! - `fetch`: browser-side dataset fetch returning plain text
//! - `components`: Reusable RSX components (toggle, badges, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
