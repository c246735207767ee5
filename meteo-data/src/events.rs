//! Trace assembly for the weather-events page over raw METAR reports.

use crate::trace::{AxisValue, Trace};
use meteo_obs::report::RawReport;
use meteo_obs::weather_code::WeatherCodeTable;

/// Icon overlay across every report of the day, hover text naming the
/// phenomena (or the no-weather fallback) with the report time.
///
/// Unlike the meteogram overlay this keeps clear hours in the series, so
/// the x axis spans the full day.
pub fn report_event_trace(reports: &[RawReport], codes: &WeatherCodeTable) -> Trace {
    let x = AxisValue::labels(reports.iter().map(|r| r.time.clone()));
    let y = vec![1.0; reports.len()];
    let text = reports
        .iter()
        .map(|r| codes.icons(&r.report))
        .collect::<Vec<_>>();
    let hovertext = reports
        .iter()
        .map(|r| format!("{} ({})", codes.labels(&r.report), r.time))
        .collect::<Vec<_>>();

    Trace::text_overlay(x, y, text)
        .with_textfont(20, None)
        .with_hovertext(hovertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(time: &str, body: &str) -> RawReport {
        RawReport {
            time: time.to_string(),
            report: body.to_string(),
        }
    }

    #[test]
    fn test_every_report_keeps_a_slot() {
        let codes = WeatherCodeTable::default();
        let reports = vec![
            report("00:50", "LTFM 250050Z -SHSN BKN008"),
            report("01:50", "LTFM 250150Z CAVOK"),
        ];
        let trace = report_event_trace(&reports, &codes);
        assert_eq!(trace.x.len(), 2);
        let text = trace.text.unwrap();
        assert_eq!(text[0], "❄️ ❄️");
        assert_eq!(text[1], "");
        let hovertext = trace.hovertext.unwrap();
        assert_eq!(hovertext[1], "No significant weather (01:50)");
    }

    #[test]
    fn test_empty_reports_build_empty_trace() {
        let codes = WeatherCodeTable::default();
        let trace = report_event_trace(&[], &codes);
        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
    }
}
