//! Present-weather code classification.
//!
//! A fixed table maps the short codes that appear inside a METAR string to
//! a display icon and label. The table is built once at startup and handed
//! to callers by reference; it is never mutated.

use serde::Serialize;

/// Label used when a report matches no code.
pub const NO_SIGNIFICANT_WEATHER: &str = "No significant weather";

/// One entry of the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCode {
    pub code: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Codes the dashboard knows how to render, in display order.
///
/// Matching is case-sensitive substring containment with no token
/// boundaries, so `SHSN` also matches a report carrying `-SHSN`; both
/// entries are then reported. That is the intended behavior.
const CODES: &[WeatherCode] = &[
    WeatherCode { code: "-SHSN", icon: "❄️", label: "Light Snow Showers" },
    WeatherCode { code: "SHSN", icon: "❄️", label: "Snow Showers" },
    WeatherCode { code: "-SHRA", icon: "🌧️", label: "Light Rain Showers" },
    WeatherCode { code: "SHRA", icon: "🌧️", label: "Rain Showers" },
    WeatherCode { code: "TSRA", icon: "⛈️", label: "Thunderstorm Rain" },
    WeatherCode { code: "DZ", icon: "🌫️", label: "Drizzle" },
    WeatherCode { code: "FG", icon: "🌁", label: "Fog" },
];

/// The process-wide, read-only code table.
#[derive(Debug, Clone, Copy)]
pub struct WeatherCodeTable {
    codes: &'static [WeatherCode],
}

impl Default for WeatherCodeTable {
    fn default() -> Self {
        WeatherCodeTable { codes: CODES }
    }
}

impl WeatherCodeTable {
    /// All codes whose text occurs in the report, in table order.
    /// Empty when nothing matches ("no significant weather").
    pub fn classify(&self, report: &str) -> Vec<&'static WeatherCode> {
        self.codes
            .iter()
            .filter(|entry| report.contains(entry.code))
            .collect()
    }

    /// Icons of every match, space-joined, e.g. `"❄️ 🌁"`.
    pub fn icons(&self, report: &str) -> String {
        self.classify(report)
            .iter()
            .map(|entry| entry.icon)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Labels of every match, comma-joined, falling back to
    /// [`NO_SIGNIFICANT_WEATHER`].
    pub fn labels(&self, report: &str) -> String {
        let matched = self.classify(report);
        if matched.is_empty() {
            return NO_SIGNIFICANT_WEATHER.to_string();
        }
        matched
            .iter()
            .map(|entry| entry.label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
