//! Static load-failure indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown when a page's dataset load fails. There is no automatic retry;
/// the page stays in this state until the user reloads.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load weather data: " }
            "{props.message}"
            p {
                style: "margin: 4px 0 0 0; font-size: 12px;",
                "Reload the page to try again."
            }
        }
    }
}
