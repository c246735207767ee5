//! Meteogram page.
//!
//! Shows one day of hourly weather at Istanbul Airport from two sources:
//! ERA5 reanalysis output and decoded METAR station reports. A toggle swaps
//! which source feeds the charts without re-fetching anything.
//!
//! Data flow:
//! 1. On mount: fetch both CSVs, parse them into observation vectors, and
//!    settle the page's view controller (`Loading -> Ready/Failed`).
//! 2. On every controller change (initial load or toggle): rebuild the
//!    traces from the active dataset and hand them to Plotly.

use dioxus::prelude::*;
use meteo_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SourceToggle,
};
use meteo_chart_ui::{fetch, js_bridge};
use meteo_data::meteogram;
use meteo_data::view::{DataSource, DatasetPair, ViewController};
use meteo_obs::observation::Observation;
use meteo_obs::weather_code::WeatherCodeTable;
use serde_json::json;

/// Static dataset resources, served next to the app bundle.
const ERA5_CSV_URL: &str = "/data/era5_iga_20220125.csv";
const METAR_CSV_URL: &str = "/data/metar_decoded_LTFM_2022-01-25.csv";

/// DOM ids for the Plotly container divs.
const TEMP_PRESSURE_CONTAINER_ID: &str = "meteogram-temp-pressure";
const PRECIPITATION_CONTAINER_ID: &str = "meteogram-precipitation";
const WEATHER_EVENTS_CONTAINER_ID: &str = "meteogram-weather-events";
const WIND_CONTAINER_ID: &str = "meteogram-wind";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("meteogram-root"))
        .launch(App);
}

/// Fetch and parse both hourly datasets. Any failure fails the whole page.
async fn load_datasets() -> Result<DatasetPair<Vec<Observation>>, String> {
    let era5_text = fetch::fetch_text(ERA5_CSV_URL)
        .await
        .map_err(|e| e.to_string())?;
    let metar_text = fetch::fetch_text(METAR_CSV_URL)
        .await
        .map_err(|e| e.to_string())?;

    let era5 = Observation::parse_dataset(&era5_text).map_err(|e| e.to_string())?;
    let metar = Observation::parse_dataset(&metar_text).map_err(|e| e.to_string())?;

    if era5.is_empty() || metar.is_empty() {
        return Err("No weather data available.".to_string());
    }
    Ok(DatasetPair { era5, metar })
}

/// Rebuild every chart from the active dataset. Pure recomputation plus the
/// renderer call; no fetching happens here.
fn render_charts(records: &[Observation], source: DataSource) {
    let temp_traces = meteogram::temperature_pressure_traces(records);
    js_bridge::render_plot(
        TEMP_PRESSURE_CONTAINER_ID,
        &serde_json::to_string(&temp_traces).unwrap_or_default(),
        &json!({
            "yaxis": { "title": "Temperature (°C)" },
            "yaxis2": { "title": "Pressure (hPa)", "overlaying": "y", "side": "right" },
            "height": 300,
            "margin": { "l": 50, "r": 50, "t": 10, "b": 40 },
            "legend": { "x": 0.5, "y": -0.2, "xanchor": "center", "yanchor": "top", "orientation": "h" },
        })
        .to_string(),
    );

    match source {
        DataSource::Era5 => {
            let precipitation = vec![meteogram::precipitation_trace(records)];
            js_bridge::render_plot(
                PRECIPITATION_CONTAINER_ID,
                &serde_json::to_string(&precipitation).unwrap_or_default(),
                &json!({
                    "yaxis": { "title": "Precipitation (mm)" },
                    "xaxis": { "title": "Time" },
                    "height": 300,
                    "margin": { "l": 50, "r": 30, "t": 10, "b": 40 },
                })
                .to_string(),
            );
        }
        DataSource::Metar => {
            let codes = WeatherCodeTable::default();
            let events = vec![meteogram::weather_event_trace(records, &codes)];
            js_bridge::render_plot(
                WEATHER_EVENTS_CONTAINER_ID,
                &serde_json::to_string(&events).unwrap_or_default(),
                &json!({
                    "yaxis": { "showticklabels": false, "showgrid": false },
                    "xaxis": { "title": "Time" },
                    "height": 300,
                    "margin": { "l": 50, "r": 30, "t": 10, "b": 40 },
                })
                .to_string(),
            );
        }
    }

    let wind_traces = meteogram::wind_traces(records);
    js_bridge::render_plot(
        WIND_CONTAINER_ID,
        &serde_json::to_string(&wind_traces).unwrap_or_default(),
        &json!({
            "yaxis": { "title": "Wind Speed (kt)" },
            "xaxis": { "title": "Time" },
            "height": 300,
            "margin": { "l": 50, "r": 30, "t": 10, "b": 40 },
        })
        .to_string(),
    );
}

#[component]
fn App() -> Element {
    let mut controller: Signal<ViewController<Vec<Observation>>> = use_signal(ViewController::new);

    // ─── Fetch both datasets once on mount ───
    use_future(move || async move {
        let result = load_datasets().await;
        // If the page already settled (e.g. replaced meanwhile), this is a no-op.
        controller.with_mut(|c| c.phase.resolve(result));
    });

    // ─── Re-render charts on load and on every toggle ───
    use_effect(move || {
        let state = controller.read();
        if let Some(records) = state.active() {
            render_charts(records, state.source());
        }
    });

    let is_loading = controller.read().phase.is_loading();
    let error_msg = controller.read().phase.error().map(str::to_string);
    let is_ready = !is_loading && error_msg.is_none();
    let source = controller.read().source();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error_msg {
                ErrorDisplay { message: err }
            }

            if is_loading {
                LoadingSpinner {}
            }

            if is_ready {
                SourceToggle {
                    active: source,
                    ontoggle: move |_| controller.with_mut(|c| c.toggle()),
                }

                ChartHeader {
                    title: "Temperature (°C) & Pressure (hPa)".to_string(),
                }
                ChartContainer {
                    id: TEMP_PRESSURE_CONTAINER_ID.to_string(),
                }

                if source == DataSource::Era5 {
                    ChartHeader {
                        title: "Hourly Precipitation (mm)".to_string(),
                    }
                    ChartContainer {
                        id: PRECIPITATION_CONTAINER_ID.to_string(),
                    }
                } else {
                    ChartHeader {
                        title: "Weather Events (METAR)".to_string(),
                    }
                    ChartContainer {
                        id: WEATHER_EVENTS_CONTAINER_ID.to_string(),
                    }
                }

                ChartHeader {
                    title: "Wind Speed".to_string(),
                    unit_description: "Knots; points above 20 kt are highlighted".to_string(),
                }
                ChartContainer {
                    id: WIND_CONTAINER_ID.to_string(),
                }
            }
        }
    }
}
