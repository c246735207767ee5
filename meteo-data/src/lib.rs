//! Derived data for the weather dashboard.
//!
//! This crate transforms parsed observation datasets into forms suitable
//! for charting: error statistics, renderer-agnostic chart traces, and the
//! per-page view state machine. Everything here is pure and synchronous;
//! fetching and rendering live in the neighboring crates.

pub mod compare;
pub mod events;
pub mod meteogram;
pub mod metrics;
pub mod trace;
pub mod view;
