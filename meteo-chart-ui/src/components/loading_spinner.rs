//! Loading spinner component.

use dioxus::prelude::*;

const SPINNER_KEYFRAMES: &str = "@keyframes meteo-spin { to { transform: rotate(360deg); } }";

/// Animated loading indicator shown while a page's datasets are in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        style { "{SPINNER_KEYFRAMES}" }
        div {
            style: "display: flex; justify-content: center; align-items: center; height: 160px;",
            div {
                style: "width: 40px; height: 40px; border: 4px solid #d1d5db; border-top-color: #111; border-radius: 50%; animation: meteo-spin 1s linear infinite;",
            }
        }
    }
}
