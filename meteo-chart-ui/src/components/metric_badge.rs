//! RMSE/Bias stat badge for the comparison charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricBadgeProps {
    /// Short metric name, e.g. "RMSE".
    pub label: String,
    /// Pre-rounded value, or "no data" when the metric was unavailable.
    pub value: String,
    /// Unit suffix, e.g. "hPa". May be empty.
    #[props(default = String::new())]
    pub unit: String,
    /// One-sentence explanation shown as native tooltip.
    #[props(default = String::new())]
    pub description: String,
    /// Value text color.
    #[props(default = String::from("#C62828"))]
    pub color: String,
}

/// Small stat box showing one error metric next to a comparison chart.
#[component]
pub fn MetricBadge(props: MetricBadgeProps) -> Element {
    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 6px; background: #F3F4F6; border-radius: 6px; padding: 4px 10px; box-shadow: 0 1px 2px rgba(0,0,0,0.15);",
            title: "{props.description}",
            span {
                style: "font-size: 12px; font-weight: 600; color: #374151;",
                "{props.label}"
            }
            span {
                style: "font-size: 13px; font-weight: 600; color: {props.color};",
                "{props.value} {props.unit}"
            }
        }
    }
}
