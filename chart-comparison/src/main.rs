//! Comparison page.
//!
//! One chart per variable of the paired dataset (temperature, pressure,
//! relative humidity, wind speed), each showing the ERA5 and METAR series
//! side by side with RMSE and Bias badges underneath. Metrics are computed
//! once when the dataset resolves; a variable whose pairs are all missing
//! shows "no data" instead of numbers.

use dioxus::prelude::*;
use meteo_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricBadge};
use meteo_chart_ui::{fetch, js_bridge};
use meteo_data::compare;
use meteo_data::view::ViewPhase;
use meteo_obs::comparison::{parse_comparison, ComparisonSeries, ComparisonVariable};
use serde_json::json;

const COMPARISON_CSV_URL: &str = "/data/era5_metar_comparison.csv";

const RMSE_DESCRIPTION: &str = "Measures the average error magnitude; higher RMSE indicates greater prediction variability and inaccuracies.";
const BIAS_DESCRIPTION: &str = "Shows the systematic deviation of model predictions; positive bias means overestimation, negative bias means underestimation.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("comparison-root"))
        .launch(App);
}

fn container_id(variable: ComparisonVariable) -> &'static str {
    match variable {
        ComparisonVariable::Temperature => "comparison-temperature",
        ComparisonVariable::Pressure => "comparison-pressure",
        ComparisonVariable::RelativeHumidity => "comparison-relative-humidity",
        ComparisonVariable::WindSpeed => "comparison-wind-speed",
    }
}

async fn load_dataset() -> Result<Vec<ComparisonSeries>, String> {
    let text = fetch::fetch_text(COMPARISON_CSV_URL)
        .await
        .map_err(|e| e.to_string())?;
    let series = parse_comparison(&text).map_err(|e| e.to_string())?;
    if series.iter().all(|s| s.is_empty()) {
        return Err("No comparison data available.".to_string());
    }
    Ok(series)
}

fn render_charts(all_series: &[ComparisonSeries]) {
    for series in all_series {
        let traces = compare::comparison_traces(series);
        let label = series.variable.label();
        js_bridge::render_plot(
            container_id(series.variable),
            &serde_json::to_string(&traces).unwrap_or_default(),
            &json!({
                "title": format!("ERA5 vs METAR {label} Comparison"),
                "xaxis": { "title": "Time / Index" },
                "yaxis": { "title": format!("{} ({})", label, series.variable.unit()) },
                "height": 300,
                "margin": { "l": 50, "r": 80, "t": 30, "b": 40 },
                "legend": { "x": 1.0, "y": 1.0, "xanchor": "right", "yanchor": "top" },
            })
            .to_string(),
        );
    }
}

/// Badge values for one variable, pre-formatted for display.
fn badge_values(series: &ComparisonSeries) -> (String, String, String) {
    match compare::comparison_metrics(series) {
        Ok(metrics) => (
            format!("{:.2}", metrics.rmse),
            format!("{:.2}", metrics.bias),
            series.variable.unit().to_string(),
        ),
        Err(_) => ("no data".to_string(), "no data".to_string(), String::new()),
    }
}

#[component]
fn App() -> Element {
    let mut phase: Signal<ViewPhase<Vec<ComparisonSeries>>> = use_signal(ViewPhase::default);

    use_future(move || async move {
        let result = load_dataset().await;
        phase.with_mut(|p| p.resolve(result));
    });

    use_effect(move || {
        if let ViewPhase::Ready(all_series) = &*phase.read() {
            render_charts(all_series);
        }
    });

    let is_loading = phase.read().is_loading();
    let error_msg = phase.read().error().map(str::to_string);
    let ready_series = match &*phase.read() {
        ViewPhase::Ready(all_series) => all_series.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error_msg {
                ErrorDisplay { message: err }
            }

            if is_loading {
                LoadingSpinner {}
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
                for series in ready_series {
                    ComparisonCard { series }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ComparisonCardProps {
    series: ComparisonSeries,
}

/// One variable's chart plus its metric badges.
#[component]
fn ComparisonCard(props: ComparisonCardProps) -> Element {
    let (rmse, bias, unit) = badge_values(&props.series);
    let label = props.series.variable.label();

    rsx! {
        div {
            style: "background: #fff; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.15); padding: 12px;",
            ChartHeader {
                title: format!("{label} Comparison"),
            }
            ChartContainer {
                id: container_id(props.series.variable).to_string(),
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px;",
                MetricBadge {
                    label: "🛑 RMSE".to_string(),
                    value: rmse,
                    unit: unit.clone(),
                    description: RMSE_DESCRIPTION.to_string(),
                    color: "#C62828".to_string(),
                }
                MetricBadge {
                    label: "↔ Bias".to_string(),
                    value: bias,
                    unit,
                    description: BIAS_DESCRIPTION.to_string(),
                    color: "#2E7D32".to_string(),
                }
            }
        }
    }
}
