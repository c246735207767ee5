//! METAR/ERA5 dataset toggle.

use dioxus::prelude::*;
use meteo_data::view::DataSource;

#[derive(Props, Clone, PartialEq)]
pub struct SourceToggleProps {
    /// The dataset currently feeding the charts.
    pub active: DataSource,
    /// Fired when the user flips the switch.
    pub ontoggle: EventHandler<()>,
}

/// Pill-shaped switch between the station reports and the reanalysis model.
/// Purely presentational: the active source lives in the page's view
/// controller, and flipping never triggers a new fetch.
#[component]
pub fn SourceToggle(props: SourceToggleProps) -> Element {
    let era5_active = props.active == DataSource::Era5;
    let knob_style = format!(
        "width: 22px; height: 22px; border-radius: 50%; background: #fff; transition: transform 0.2s; transform: translateX({}px);",
        if era5_active { 26 } else { 0 }
    );

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; background: #27445D; color: #fff; padding: 8px 16px; border-radius: 24px; width: fit-content; margin: 0 auto 24px auto;",
            span {
                style: "font-weight: 600;",
                "{DataSource::Metar.label()}"
            }
            div {
                style: "width: 52px; height: 26px; border-radius: 13px; background: #4A6B8A; padding: 2px; cursor: pointer;",
                onclick: move |_| props.ontoggle.call(()),
                div { style: "{knob_style}" }
            }
            span {
                style: "font-weight: 600;",
                "{DataSource::Era5.label()}"
            }
        }
    }
}
