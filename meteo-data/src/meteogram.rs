//! Trace assembly for the meteogram page.
//!
//! Every function here is `f(active dataset) -> traces`: pure, synchronous,
//! and re-run whenever the active dataset changes (initial load or source
//! toggle).

use crate::trace::{AxisValue, StyleColor, Trace};
use meteo_obs::observation::Observation;
use meteo_obs::weather_code::WeatherCodeTable;

/// Wind speed above which a point is highlighted, in knots.
pub const STRONG_WIND_KNOTS: f64 = 20.0;

const STRONG_WIND_COLOR: &str = "#B41919";
const CALM_WIND_COLOR: &str = "#757575";
const STRONG_ARROW_COLOR: &str = "#A5485D";

fn time_axis(records: &[Observation]) -> Vec<AxisValue> {
    AxisValue::labels(records.iter().map(|r| r.time.clone()))
}

/// Temperature, dew point, and surface pressure (secondary axis) traces.
pub fn temperature_pressure_traces(records: &[Observation]) -> Vec<Trace> {
    let x = time_axis(records);
    vec![
        Trace::lines(
            "Temperature (°C)",
            x.clone(),
            records.iter().map(|r| r.temperature).collect(),
        )
        .with_line("#D93232", 2.0),
        Trace::lines(
            "Dew Point (°C)",
            x.clone(),
            records.iter().map(|r| r.dew_point).collect(),
        )
        .with_line("#467EAC", 2.0),
        Trace::lines(
            "Pressure (hPa)",
            x,
            records.iter().map(|r| r.pressure).collect(),
        )
        .with_line("#3D8241", 2.0)
        .on_secondary_axis(),
    ]
}

/// Hourly precipitation bar trace.
pub fn precipitation_trace(records: &[Observation]) -> Trace {
    Trace::bar(
        "Precipitation (mm)",
        time_axis(records),
        records.iter().map(|r| r.precipitation).collect(),
    )
    .with_marker_color(StyleColor::Single("#2A90BD".to_string()))
    .with_marker_opacity(0.7)
}

/// Weather-event icon overlay, one entry per record whose METAR report
/// matches at least one known code.
pub fn weather_event_trace(records: &[Observation], codes: &WeatherCodeTable) -> Trace {
    let mut x = Vec::new();
    let mut text = Vec::new();
    let mut hovertext = Vec::new();
    for record in records {
        let matched = codes.classify(&record.metar_report);
        if matched.is_empty() {
            continue;
        }
        x.push(AxisValue::Label(record.time.clone()));
        text.push(codes.icons(&record.metar_report));
        hovertext.push(format!("{} ({})", codes.labels(&record.metar_report), record.time));
    }
    let y = vec![1.0; x.len()];
    Trace::text_overlay(x, y, text)
        .with_textfont(14, None)
        .with_hovertext(hovertext)
}

/// Wind speed line with strong-wind highlighting, plus a direction-arrow
/// overlay floating one knot above each point.
pub fn wind_traces(records: &[Observation]) -> Vec<Trace> {
    let x = time_axis(records);
    let speeds: Vec<f64> = records.iter().map(|r| r.wind_speed).collect();

    let point_colors: Vec<String> = speeds
        .iter()
        .map(|&speed| {
            if speed > STRONG_WIND_KNOTS {
                STRONG_WIND_COLOR.to_string()
            } else {
                CALM_WIND_COLOR.to_string()
            }
        })
        .collect();

    let arrow_colors: Vec<String> = speeds
        .iter()
        .map(|&speed| {
            if speed > STRONG_WIND_KNOTS {
                STRONG_ARROW_COLOR.to_string()
            } else {
                CALM_WIND_COLOR.to_string()
            }
        })
        .collect();

    let speed_trace = Trace::lines_markers("Wind Speed (kt)", x.clone(), speeds.clone())
        .with_line(CALM_WIND_COLOR, 1.0)
        .with_marker_color(StyleColor::PerPoint(point_colors));

    // NAN speeds stay NAN here, so arrows gap together with their points.
    let arrow_trace = Trace::text_overlay(
        x,
        speeds.iter().map(|&speed| speed + 1.0).collect(),
        records
            .iter()
            .map(|r| direction_arrow(r.wind_direction).to_string())
            .collect(),
    )
    .with_textfont(14, Some(StyleColor::PerPoint(arrow_colors)));

    vec![speed_trace, arrow_trace]
}

/// Glyph for the 45° sector a wind direction falls into. Directions outside
/// 0-360 (including the missing sentinel) get the fallback glyph.
pub fn direction_arrow(angle: f64) -> &'static str {
    if angle.is_nan() || !(0.0..=360.0).contains(&angle) {
        return "❓";
    }
    if !(22.5..337.5).contains(&angle) {
        return "🡩";
    }
    if angle < 67.5 {
        "🡥"
    } else if angle < 112.5 {
        "🡲"
    } else if angle < 157.5 {
        "🡦"
    } else if angle < 202.5 {
        "🡣"
    } else if angle < 247.5 {
        "🡧"
    } else if angle < 292.5 {
        "🡰"
    } else {
        "🡤"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(time: &str, wind_speed: f64, metar_report: &str) -> Observation {
        Observation {
            time: time.to_string(),
            temperature: -2.0,
            dew_point: -4.0,
            pressure: 1024.0,
            precipitation: 0.1,
            wind_speed,
            wind_direction: 290.0,
            weather_event: String::new(),
            metar_report: metar_report.to_string(),
        }
    }

    #[test]
    fn test_temperature_pressure_traces_share_x() {
        let records = vec![observation("00:00", 10.0, ""), observation("01:00", 12.0, "")];
        let traces = temperature_pressure_traces(&records);
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0].x, traces[2].x);
        assert_eq!(traces[2].yaxis.as_deref(), Some("y2"));
    }

    #[test]
    fn test_strong_wind_points_are_highlighted() {
        let records = vec![observation("00:00", 25.0, ""), observation("01:00", 10.0, "")];
        let traces = wind_traces(&records);
        let json = traces[0].to_json();
        assert_eq!(json["marker"]["color"][0], "#B41919");
        assert_eq!(json["marker"]["color"][1], "#757575");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let records = vec![observation("00:00", 20.0, "")];
        let traces = wind_traces(&records);
        assert_eq!(traces[0].to_json()["marker"]["color"][0], "#757575");
    }

    #[test]
    fn test_weather_event_trace_skips_clear_hours() {
        let codes = WeatherCodeTable::default();
        let records = vec![
            observation("00:00", 5.0, "LTFM 250050Z -SHSN BKN008"),
            observation("01:00", 5.0, "LTFM 250150Z CAVOK"),
        ];
        let trace = weather_event_trace(&records, &codes);
        assert_eq!(trace.x.len(), 1);
        assert_eq!(trace.y, vec![1.0]);
        let hovertext = trace.hovertext.unwrap();
        assert_eq!(hovertext[0], "Light Snow Showers, Snow Showers (00:00)");
    }

    #[test]
    fn test_empty_dataset_builds_empty_traces() {
        let traces = wind_traces(&[]);
        assert!(traces[0].x.is_empty());
        let trace = precipitation_trace(&[]);
        assert!(trace.y.is_empty());
    }

    #[test]
    fn test_direction_arrow_sectors() {
        assert_eq!(direction_arrow(0.0), "🡩");
        assert_eq!(direction_arrow(350.0), "🡩");
        assert_eq!(direction_arrow(45.0), "🡥");
        assert_eq!(direction_arrow(90.0), "🡲");
        assert_eq!(direction_arrow(135.0), "🡦");
        assert_eq!(direction_arrow(180.0), "🡣");
        assert_eq!(direction_arrow(225.0), "🡧");
        assert_eq!(direction_arrow(270.0), "🡰");
        assert_eq!(direction_arrow(315.0), "🡤");
        assert_eq!(direction_arrow(f64::NAN), "❓");
        assert_eq!(direction_arrow(400.0), "❓");
    }
}
