//! Renderer-agnostic chart traces.
//!
//! A [`Trace`] is the series-of-points description handed to the renderer:
//! paired x/y arrays, a draw mode, and optional styling and hover hints. It
//! serializes directly to the JSON shape the plotting library consumes.
//! Building traces is pure; traces are rebuilt on every render pass and own
//! no state.
//!
//! Missing values stay `NAN` in the y array; JSON serialization turns them
//! into `null`, which the renderer draws as a gap instead of a zero.

use serde::Serialize;

/// An x-axis value: a time label or a 1-based sequential index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Index(u32),
    Label(String),
}

impl AxisValue {
    /// Label axis from anything string-like.
    pub fn labels<I, S>(values: I) -> Vec<AxisValue>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values.into_iter().map(|v| AxisValue::Label(v.into())).collect()
    }

    /// 1-based index axis: `1, 2, ..., len`.
    pub fn index_sequence(len: usize) -> Vec<AxisValue> {
        (1..=len as u32).map(AxisValue::Index).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceKind {
    #[serde(rename = "scatter")]
    Scatter,
    #[serde(rename = "bar")]
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "text")]
    Text,
}

/// Marker/text color: one color for the whole series, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TextFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleColor>,
}

/// One named series plus rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<TextFont>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Trace {
    fn scatter(name: &str, x: Vec<AxisValue>, y: Vec<f64>, mode: TraceMode) -> Trace {
        Trace {
            kind: TraceKind::Scatter,
            x,
            y,
            mode: Some(mode),
            name: Some(name.to_string()),
            line: None,
            marker: None,
            text: None,
            textfont: None,
            hovertemplate: None,
            hoverinfo: None,
            hovertext: None,
            showlegend: None,
            yaxis: None,
        }
    }

    pub fn lines(name: &str, x: Vec<AxisValue>, y: Vec<f64>) -> Trace {
        Trace::scatter(name, x, y, TraceMode::Lines)
    }

    pub fn lines_markers(name: &str, x: Vec<AxisValue>, y: Vec<f64>) -> Trace {
        Trace::scatter(name, x, y, TraceMode::LinesMarkers)
    }

    pub fn bar(name: &str, x: Vec<AxisValue>, y: Vec<f64>) -> Trace {
        Trace {
            kind: TraceKind::Bar,
            mode: None,
            ..Trace::scatter(name, x, y, TraceMode::Lines)
        }
    }

    /// A text-only overlay (weather icons, wind arrows): no legend entry,
    /// hover comes from `hovertext` when set.
    pub fn text_overlay(x: Vec<AxisValue>, y: Vec<f64>, text: Vec<String>) -> Trace {
        Trace {
            text: Some(text),
            showlegend: Some(false),
            name: None,
            ..Trace::scatter("", x, y, TraceMode::Text)
        }
    }

    pub fn with_line(mut self, color: &str, width: f64) -> Trace {
        self.line = Some(Line {
            color: color.to_string(),
            width: Some(width),
        });
        self
    }

    pub fn with_marker_color(mut self, color: StyleColor) -> Trace {
        self.marker.get_or_insert_with(Marker::default).color = Some(color);
        self
    }

    pub fn with_marker_opacity(mut self, opacity: f64) -> Trace {
        self.marker.get_or_insert_with(Marker::default).opacity = Some(opacity);
        self
    }

    pub fn with_textfont(mut self, size: u32, color: Option<StyleColor>) -> Trace {
        self.textfont = Some(TextFont {
            size: Some(size),
            color,
        });
        self
    }

    pub fn with_hovertemplate(mut self, template: &str) -> Trace {
        self.hovertemplate = Some(template.to_string());
        self
    }

    pub fn with_hovertext(mut self, hovertext: Vec<String>) -> Trace {
        self.hoverinfo = Some("text".to_string());
        self.hovertext = Some(hovertext);
        self
    }

    /// Put this series on the secondary y axis.
    pub fn on_secondary_axis(mut self) -> Trace {
        self.yaxis = Some("y2".to_string());
        self
    }

    /// Serialize for the renderer boundary.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_sequence_is_one_based() {
        let x = AxisValue::index_sequence(3);
        assert_eq!(
            x,
            vec![AxisValue::Index(1), AxisValue::Index(2), AxisValue::Index(3)]
        );
    }

    #[test]
    fn test_empty_series_is_allowed() {
        let trace = Trace::lines("empty", Vec::new(), Vec::new());
        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
        let json = trace.to_json();
        assert_eq!(json["x"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_nan_serializes_to_null_gap() {
        let trace = Trace::lines(
            "gappy",
            AxisValue::labels(["00:00", "01:00"]),
            vec![1.5, f64::NAN],
        );
        let json = trace.to_json();
        assert_eq!(json["y"][0], 1.5);
        assert!(json["y"][1].is_null());
    }

    #[test]
    fn test_unset_style_fields_are_omitted() {
        let trace = Trace::lines("t", Vec::new(), Vec::new());
        let json = trace.to_json();
        assert!(json.get("marker").is_none());
        assert!(json.get("hovertemplate").is_none());
        assert_eq!(json["mode"], "lines");
        assert_eq!(json["type"], "scatter");
    }

    #[test]
    fn test_per_point_marker_colors() {
        let trace = Trace::lines_markers("wind", AxisValue::index_sequence(2), vec![25.0, 10.0])
            .with_marker_color(StyleColor::PerPoint(vec![
                "#B41919".to_string(),
                "#757575".to_string(),
            ]));
        let json = trace.to_json();
        assert_eq!(json["marker"]["color"][0], "#B41919");
    }

    #[test]
    fn test_secondary_axis_and_bar_kind() {
        let bar = Trace::bar("precip", Vec::new(), Vec::new());
        assert_eq!(bar.to_json()["type"], "bar");
        let second = Trace::lines("p", Vec::new(), Vec::new()).on_secondary_axis();
        assert_eq!(second.to_json()["yaxis"], "y2");
    }
}
