//! The paired ERA5-vs-METAR comparison dataset.
//!
//! One file carries both sources side by side, one column pair per
//! variable. Pairing is positional: row `i` of the ERA5 column lines up
//! with row `i` of the METAR column because both were sampled hourly on
//! the same day.

use crate::loader::{DataTable, LoadError};
use crate::observation::number_field;

/// A variable present in the comparison dataset as an ERA5/METAR column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonVariable {
    Temperature,
    Pressure,
    RelativeHumidity,
    WindSpeed,
}

impl ComparisonVariable {
    pub const ALL: [ComparisonVariable; 4] = [
        ComparisonVariable::Temperature,
        ComparisonVariable::Pressure,
        ComparisonVariable::RelativeHumidity,
        ComparisonVariable::WindSpeed,
    ];

    pub fn era5_column(self) -> &'static str {
        match self {
            ComparisonVariable::Temperature => "ERA5 Temperature (°C)",
            ComparisonVariable::Pressure => "ERA5 Pressure (hPa)",
            ComparisonVariable::RelativeHumidity => "ERA5 Relative Humidity (%)",
            ComparisonVariable::WindSpeed => "ERA5 Wind Speed (knots)",
        }
    }

    pub fn metar_column(self) -> &'static str {
        match self {
            ComparisonVariable::Temperature => "METAR Temperature (°C)",
            ComparisonVariable::Pressure => "METAR Pressure (hPa)",
            ComparisonVariable::RelativeHumidity => "METAR Relative Humidity (%)",
            ComparisonVariable::WindSpeed => "METAR Wind Speed (knots)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonVariable::Temperature => "Temperature",
            ComparisonVariable::Pressure => "Pressure",
            ComparisonVariable::RelativeHumidity => "Relative Humidity",
            ComparisonVariable::WindSpeed => "Wind Speed",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ComparisonVariable::Temperature => "°C",
            ComparisonVariable::Pressure => "hPa",
            ComparisonVariable::RelativeHumidity => "%",
            ComparisonVariable::WindSpeed => "knots",
        }
    }
}

/// Reference and observed series for one variable, equal length by
/// construction (both extracted from the same rows).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries {
    pub variable: ComparisonVariable,
    pub era5: Vec<f64>,
    pub metar: Vec<f64>,
}

impl ComparisonSeries {
    /// Extract the ERA5/METAR column pair for one variable. Missing cells
    /// come through as `NAN` and are dealt with by the metric calculator.
    pub fn from_table(table: &DataTable, variable: ComparisonVariable) -> ComparisonSeries {
        let era5 = table
            .records()
            .iter()
            .map(|record| number_field(table, record, variable.era5_column()))
            .collect();
        let metar = table
            .records()
            .iter()
            .map(|record| number_field(table, record, variable.metar_column()))
            .collect();
        ComparisonSeries {
            variable,
            era5,
            metar,
        }
    }

    /// Extract every variable of the dataset, in declaration order.
    pub fn all_from_table(table: &DataTable) -> Vec<ComparisonSeries> {
        ComparisonVariable::ALL
            .iter()
            .map(|&variable| ComparisonSeries::from_table(table, variable))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.era5.len()
    }

    pub fn is_empty(&self) -> bool {
        self.era5.is_empty()
    }
}

/// Parse the comparison dataset file.
pub fn parse_comparison(text: &str) -> Result<Vec<ComparisonSeries>, LoadError> {
    let table = DataTable::parse(text)?;
    Ok(ComparisonSeries::all_from_table(&table))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_RESULT: &str = "\
ERA5 Temperature (°C),METAR Temperature (°C),ERA5 Pressure (hPa),METAR Pressure (hPa),ERA5 Relative Humidity (%),METAR Relative Humidity (%),ERA5 Wind Speed (knots),METAR Wind Speed (knots)
0,1,1020.0,1022.0,85,90,20,22
2,1,1019.5,1021.5,86,88,18,20
4,5,1019.0,1020.0,84,85,15,14
";

    #[test]
    fn test_series_are_positionally_paired() {
        let table = DataTable::parse(STR_RESULT).unwrap();
        let series = ComparisonSeries::from_table(&table, ComparisonVariable::Temperature);
        assert_eq!(series.era5, vec![0.0, 2.0, 4.0]);
        assert_eq!(series.metar, vec![1.0, 1.0, 5.0]);
        assert_eq!(series.era5.len(), series.metar.len());
    }

    #[test]
    fn test_all_variables_extracted_in_order() {
        let series = parse_comparison(STR_RESULT).unwrap();
        let variables: Vec<_> = series.iter().map(|s| s.variable).collect();
        assert_eq!(variables, ComparisonVariable::ALL.to_vec());
    }

    #[test]
    fn test_parse_fixture_comparison() {
        let series =
            parse_comparison(include_str!("../../fixtures/era5_metar_comparison.csv")).unwrap();
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|s| s.len() == 24));
        assert!(series.iter().all(|s| s.era5.iter().all(|v| v.is_finite())));
    }

    #[test]
    fn test_missing_column_yields_nan_series() {
        let table = DataTable::parse("ERA5 Temperature (°C)\n1.0\n").unwrap();
        let series = ComparisonSeries::from_table(&table, ComparisonVariable::Pressure);
        assert!(series.era5[0].is_nan());
        assert!(series.metar[0].is_nan());
    }
}
