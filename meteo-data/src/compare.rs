//! Trace assembly and statistics for the ERA5-vs-METAR comparison page.

use crate::metrics::{ErrorMetrics, MetricsError};
use crate::trace::{AxisValue, StyleColor, Trace};
use meteo_obs::comparison::ComparisonSeries;

const ERA5_COLOR: &str = "#509AD1";
const METAR_COLOR: &str = "#CC0000";

/// Both sources of one variable as lines+markers traces over a 1-based
/// index axis, hover text showing the value with its unit.
pub fn comparison_traces(series: &ComparisonSeries) -> Vec<Trace> {
    let x = AxisValue::index_sequence(series.len());
    let era5_name = series.variable.era5_column();
    let metar_name = series.variable.metar_column();
    vec![
        Trace::lines_markers(era5_name, x.clone(), series.era5.clone())
            .with_line(ERA5_COLOR, 2.0)
            .with_marker_color(StyleColor::Single(ERA5_COLOR.to_string()))
            .with_hovertemplate(&hover_template(era5_name, series.variable.unit())),
        Trace::lines_markers(metar_name, x, series.metar.clone())
            .with_line(METAR_COLOR, 2.0)
            .with_marker_color(StyleColor::Single(METAR_COLOR.to_string()))
            .with_hovertemplate(&hover_template(metar_name, series.variable.unit())),
    ]
}

fn hover_template(name: &str, unit: &str) -> String {
    format!("{name}: %{{y:.2f}} {unit}<extra></extra>")
}

/// RMSE/Bias of ERA5 (reference) against METAR (observed) for one variable.
pub fn comparison_metrics(series: &ComparisonSeries) -> Result<ErrorMetrics, MetricsError> {
    ErrorMetrics::compute(&series.era5, &series.metar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meteo_obs::comparison::ComparisonVariable;

    fn series() -> ComparisonSeries {
        ComparisonSeries {
            variable: ComparisonVariable::Temperature,
            era5: vec![0.0, 2.0, 4.0],
            metar: vec![1.0, 1.0, 5.0],
        }
    }

    #[test]
    fn test_two_traces_over_index_axis() {
        let traces = comparison_traces(&series());
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].name.as_deref(), Some("ERA5 Temperature (°C)"));
        assert_eq!(traces[1].name.as_deref(), Some("METAR Temperature (°C)"));
        assert_eq!(traces[0].x, AxisValue::index_sequence(3));
    }

    #[test]
    fn test_hover_template_carries_unit() {
        let traces = comparison_traces(&series());
        assert_eq!(
            traces[0].hovertemplate.as_deref(),
            Some("ERA5 Temperature (°C): %{y:.2f} °C<extra></extra>")
        );
    }

    #[test]
    fn test_end_to_end_metrics() {
        let metrics = comparison_metrics(&series()).unwrap();
        assert_eq!(metrics.rmse, 1.0);
        assert_eq!(metrics.bias, -0.33);
    }

    #[test]
    fn test_fixture_dataset_end_to_end() {
        let all_series = meteo_obs::comparison::parse_comparison(include_str!(
            "../../fixtures/era5_metar_comparison.csv"
        ))
        .unwrap();
        for series in &all_series {
            let metrics = comparison_metrics(series).unwrap();
            assert_eq!(metrics.samples, 24);
            assert!(metrics.rmse >= 0.0);
        }
        // In this fixture the model reads low on pressure all day.
        let pressure = &all_series[1];
        assert!(comparison_metrics(pressure).unwrap().bias < 0.0);
    }
}
