//! The raw METAR report dataset and report-string helpers.
//!
//! The raw dataset has two columns, timestamp and the undecoded METAR
//! string, with no header-name contract; access is positional and the
//! first row is still skipped as a header.

use crate::loader::LoadError;
use csv::ReaderBuilder;
use serde::Serialize;

/// One raw station report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawReport {
    pub time: String,
    pub report: String,
}

/// Parse the raw-report dataset. Rows with fewer than two columns are
/// dropped rather than failing the load.
pub fn parse_raw_reports(text: &str) -> Result<Vec<RawReport>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut reports = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|_| LoadError::Malformed)?;
        if record.len() < 2 {
            continue;
        }
        reports.push(RawReport {
            time: record.get(0).unwrap_or("").trim().to_string(),
            report: record.get(1).unwrap_or("").trim().to_string(),
        });
    }
    Ok(reports)
}

/// Cloud information decoded from a METAR string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudCover {
    /// Estimated total cover, 0-100.
    pub cover_percent: u32,
    /// Layer base altitudes in feet, in report order.
    pub layer_heights_ft: Vec<u32>,
}

/// Scan a METAR string for cloud groups (`FEW`/`SCT`/`BKN`/`OVC` + 3-digit
/// height in hundreds of feet) and estimate total cover.
///
/// FEW adds 10%, SCT 30%, BKN 60%; OVC means the sky is fully covered.
pub fn extract_cloud_cover(report: &str) -> CloudCover {
    let mut cover_percent = 0u32;
    let mut layer_heights_ft = Vec::new();

    for token in report.split_whitespace() {
        let Some((kind, height)) = split_cloud_group(token) else {
            continue;
        };
        layer_heights_ft.push(height * 100);
        match kind {
            "FEW" => cover_percent += 10,
            "SCT" => cover_percent += 30,
            "BKN" => cover_percent += 60,
            "OVC" => cover_percent = 100,
            _ => unreachable!(),
        }
    }

    CloudCover {
        cover_percent: cover_percent.min(100),
        layer_heights_ft,
    }
}

fn split_cloud_group(token: &str) -> Option<(&str, u32)> {
    let kind = token.get(..3)?;
    if !matches!(kind, "FEW" | "SCT" | "BKN" | "OVC") {
        return None;
    }
    let digits = token.get(3..6)?;
    if token.len() != 6 {
        return None;
    }
    digits.parse::<u32>().ok().map(|height| (kind, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_RESULT: &str = "\
time,metar
2022-01-25 00:50,LTFM 250050Z 29022KT 9999 -SHSN BKN008 OVC020 M02/M03 Q1024
2022-01-25 01:50,LTFM 250150Z 30024KT 5000 SHSN OVC010 M02/M04 Q1024
broken-row
";

    #[test]
    fn test_parse_raw_reports_positional() {
        let reports = parse_raw_reports(STR_RESULT).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].time, "2022-01-25 00:50");
        assert!(reports[0].report.starts_with("LTFM 250050Z"));
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let reports = parse_raw_reports("time,metar\nonly-one-column\n").unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_parse_fixture_reports() {
        let reports = parse_raw_reports(include_str!("../../fixtures/metar_report.csv")).unwrap();
        assert_eq!(reports.len(), 24);
        let cover = extract_cloud_cover(&reports[0].report);
        assert_eq!(cover.cover_percent, 100);
        assert_eq!(cover.layer_heights_ft, vec![800, 1500]);
    }

    #[test]
    fn test_extract_cloud_cover_single_layer() {
        let cover = extract_cloud_cover("LTFM 250050Z 29022KT 9999 BKN008 M02/M03 Q1024");
        assert_eq!(cover.cover_percent, 60);
        assert_eq!(cover.layer_heights_ft, vec![800]);
    }

    #[test]
    fn test_overcast_caps_cover() {
        let cover = extract_cloud_cover("FEW005 SCT010 OVC020");
        assert_eq!(cover.cover_percent, 100);
        assert_eq!(cover.layer_heights_ft, vec![500, 1000, 2000]);
    }

    #[test]
    fn test_no_cloud_groups() {
        let cover = extract_cloud_cover("LTFM 250050Z 29022KT CAVOK M02/M03 Q1024");
        assert_eq!(cover.cover_percent, 0);
        assert!(cover.layer_heights_ft.is_empty());
    }

    #[test]
    fn test_malformed_cloud_token_is_ignored(){
        let cover = extract_cloud_cover("BKN08 OVC1000 SCTXYZ");
        assert_eq!(cover.cover_percent, 0);
        assert!(cover.layer_heights_ft.is_empty());
    }
}
