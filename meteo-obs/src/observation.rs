//! Typed observation records for the meteogram datasets.
//!
//! Both hourly datasets (ERA5 reanalysis and decoded METAR station reports)
//! share one column schema. Raw string fields are converted into an
//! [`Observation`] immediately after parse; a numeric field that is absent
//! or unparsable becomes `f64::NAN` so one corrupt row never takes down the
//! rest of the series.

use crate::loader::{DataTable, LoadError};
use csv::StringRecord;
use serde::Serialize;

/// Column names shared by the ERA5 and decoded-METAR hourly datasets.
pub const TIME: &str = "Time";
pub const TEMPERATURE: &str = "Temperature (°C)";
pub const DEW_POINT: &str = "Dew Point (°C)";
pub const PRESSURE: &str = "Surface Pressure (hPa)";
pub const PRECIPITATION: &str = "Hourly Precipitation (mm)";
pub const WIND_SPEED: &str = "Wind Speed (knots)";
pub const WIND_DIRECTION: &str = "Wind Direction (°)";
pub const WEATHER_EVENT: &str = "Weather Event";
pub const METAR_REPORT: &str = "METAR Report";

/// One timestamped row of weather data.
///
/// `time` stays a source-defined label (e.g. `"2022-01-25 03:00"`); it is an
/// x-axis category, never parsed into a calendar type. Missing numeric
/// fields are `NAN`.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    pub time: String,
    pub temperature: f64,
    pub dew_point: f64,
    pub pressure: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub weather_event: String,
    pub metar_report: String,
}

/// Extract a numeric field by column name.
///
/// Missing column, empty cell, or non-numeric text all degrade to `NAN`;
/// this never fails hard.
pub fn number_field(table: &DataTable, record: &StringRecord, column: &str) -> f64 {
    table
        .column_index(column)
        .and_then(|i| record.get(i))
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Extract a text field by column name, defaulting to the empty string.
pub fn text_field(table: &DataTable, record: &StringRecord, column: &str) -> String {
    table
        .column_index(column)
        .and_then(|i| record.get(i))
        .map(|raw| raw.trim().to_string())
        .unwrap_or_default()
}

impl Observation {
    /// Build one observation from a raw row via column-name lookup.
    pub fn from_record(table: &DataTable, record: &StringRecord) -> Observation {
        Observation {
            time: text_field(table, record, TIME),
            temperature: number_field(table, record, TEMPERATURE),
            dew_point: number_field(table, record, DEW_POINT),
            pressure: number_field(table, record, PRESSURE),
            precipitation: number_field(table, record, PRECIPITATION),
            wind_speed: number_field(table, record, WIND_SPEED),
            wind_direction: number_field(table, record, WIND_DIRECTION),
            weather_event: text_field(table, record, WEATHER_EVENT),
            metar_report: text_field(table, record, METAR_REPORT),
        }
    }

    /// Parse a whole hourly dataset into observations, preserving row order.
    pub fn parse_dataset(text: &str) -> Result<Vec<Observation>, LoadError> {
        let table = DataTable::parse(text)?;
        Ok(table
            .records()
            .iter()
            .map(|record| Observation::from_record(&table, record))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_RESULT: &str = "\
Time,Temperature (°C),Dew Point (°C),Surface Pressure (hPa),Hourly Precipitation (mm),Wind Speed (knots),Wind Direction (°),Weather Event,METAR Report
2022-01-25 00:00,-2.1,-3.4,1024.2,0.0,22.0,290,Snow,LTFM 250050Z 29022KT 9999 -SHSN BKN008 M02/M03 Q1024
2022-01-25 01:00,-2.4,,1024.0,0.1,24.0,300,Snow,LTFM 250150Z 30024KT 5000 SHSN OVC010 M02/M04 Q1024
";

    #[test]
    fn test_parse_dataset() {
        let observations = Observation::parse_dataset(STR_RESULT).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].time, "2022-01-25 00:00");
        assert_eq!(observations[0].temperature, -2.1);
        assert_eq!(observations[0].wind_direction, 290.0);
        assert_eq!(observations[1].weather_event, "Snow");
    }

    #[test]
    fn test_missing_numeric_field_is_nan_not_fatal() {
        let observations = Observation::parse_dataset(STR_RESULT).unwrap();
        // Second row has an empty dew point cell.
        assert!(observations[1].dew_point.is_nan());
        // The rest of the row still parses.
        assert_eq!(observations[1].pressure, 1024.0);
    }

    #[test]
    fn test_unparsable_number_degrades_to_nan() {
        let csv = "Time,Temperature (°C)\n00:00,n/a\n";
        let observations = Observation::parse_dataset(csv).unwrap();
        assert!(observations[0].temperature.is_nan());
    }

    #[test]
    fn test_parse_fixture_datasets() {
        let era5 =
            Observation::parse_dataset(include_str!("../../fixtures/era5_iga_20220125.csv"))
                .unwrap();
        let metar = Observation::parse_dataset(include_str!(
            "../../fixtures/metar_decoded_LTFM_2022-01-25.csv"
        ))
        .unwrap();
        assert_eq!(era5.len(), 24);
        assert_eq!(metar.len(), 24);
        // Model output carries no raw reports; the station dataset does.
        assert!(era5[0].metar_report.is_empty());
        assert!(metar[0].metar_report.starts_with("LTFM"));
        assert!(era5.iter().all(|o| !o.time.is_empty()));
    }

    #[test]
    fn test_absent_column_degrades_per_field() {
        // Two-column table: every schema field it lacks becomes NAN / "".
        let csv = "Time,Value\n00:00,1.0\n01:00,2.5\n02:00,\n";
        let table = DataTable::parse(csv).unwrap();
        assert_eq!(table.len(), 3);
        let third = &table.records()[2];
        assert!(number_field(&table, third, "Value").is_nan());
        let obs = Observation::from_record(&table, third);
        assert!(obs.temperature.is_nan());
        assert_eq!(obs.metar_report, "");
        assert_eq!(obs.time, "02:00");
    }
}
