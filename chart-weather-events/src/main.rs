//! Weather-events page.
//!
//! Renders the day's raw METAR reports as an icon timeline: one slot per
//! report, icons for every present-weather code found in the report text.
//! The first report of the day also drives a cloud-cover banner (layer base
//! height and estimated total cover).

use dioxus::prelude::*;
use meteo_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use meteo_chart_ui::{fetch, js_bridge};
use meteo_data::events::report_event_trace;
use meteo_data::view::ViewPhase;
use meteo_obs::report::{extract_cloud_cover, parse_raw_reports, RawReport};
use meteo_obs::weather_code::WeatherCodeTable;
use serde_json::json;

const REPORTS_CSV_URL: &str = "/data/metar_report.csv";

const EVENTS_CONTAINER_ID: &str = "weather-events-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-events-root"))
        .launch(App);
}

async fn load_reports() -> Result<Vec<RawReport>, String> {
    let text = fetch::fetch_text(REPORTS_CSV_URL)
        .await
        .map_err(|e| e.to_string())?;
    let reports = parse_raw_reports(&text).map_err(|e| e.to_string())?;
    if reports.is_empty() {
        return Err("No METAR reports available.".to_string());
    }
    Ok(reports)
}

fn render_chart(reports: &[RawReport]) {
    let codes = WeatherCodeTable::default();
    let traces = vec![report_event_trace(reports, &codes)];
    js_bridge::render_plot(
        EVENTS_CONTAINER_ID,
        &serde_json::to_string(&traces).unwrap_or_default(),
        &json!({
            "title": "Weather Events Over Time",
            "yaxis": { "showticklabels": false, "showgrid": false },
            "xaxis": { "title": "Time" },
            "height": 300,
            "margin": { "l": 40, "r": 30, "t": 40, "b": 40 },
            "paper_bgcolor": "rgba(0,0,0,0)",
        })
        .to_string(),
    );
}

#[component]
fn App() -> Element {
    let mut phase: Signal<ViewPhase<Vec<RawReport>>> = use_signal(ViewPhase::default);

    use_future(move || async move {
        let result = load_reports().await;
        phase.with_mut(|p| p.resolve(result));
    });

    use_effect(move || {
        if let ViewPhase::Ready(reports) = &*phase.read() {
            render_chart(reports);
        }
    });

    let is_loading = phase.read().is_loading();
    let error_msg = phase.read().error().map(str::to_string);
    let is_ready = !is_loading && error_msg.is_none();
    let cloud_banner = match &*phase.read() {
        ViewPhase::Ready(reports) => reports.first().map(|first| {
            let cover = extract_cloud_cover(&first.report);
            match cover.layer_heights_ft.first() {
                Some(base) => format!(
                    "Estimated cloud cover {}%, lowest layer at {} ft.",
                    cover.cover_percent, base
                ),
                None => "No cloud layers reported.".to_string(),
            }
        }),
        _ => None,
    };

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error_msg {
                ErrorDisplay { message: err }
            }

            if is_loading {
                LoadingSpinner {}
            }

            if is_ready {
                ChartHeader {
                    title: "Weather Events (METAR)".to_string(),
                }
                if let Some(banner) = cloud_banner {
                    p {
                        style: "font-size: 12px; color: #666; margin: 0 0 8px 0;",
                        "{banner}"
                    }
                }
                ChartContainer {
                    id: EVENTS_CONTAINER_ID.to_string(),
                }
            }
        }
    }
}
