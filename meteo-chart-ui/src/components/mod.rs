//! Reusable Dioxus RSX components for the weather dashboard apps.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod metric_badge;
mod source_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_badge::MetricBadge;
pub use source_toggle::SourceToggle;
