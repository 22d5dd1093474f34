use eframe::egui::Color32;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of chart kinds the rendering capability accepts. Deserializing
/// anything outside this set is a configuration error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Area,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Area => "area",
        }
    }
}

/// One chart entry: an open JSON object per data point, keyed series and
/// positional colors. This is the input shape of the charting primitive.
pub type DataPoint = serde_json::Map<String, Value>;

/// Coerce a JSON literal into a data point. Non-object values become an empty
/// point.
pub fn point(value: Value) -> DataPoint {
    match value {
        Value::Object(map) => map,
        _ => DataPoint::default(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub data_keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// One plottable series: a data key paired with its resolved color.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    pub key: &'a str,
    pub color: Color32,
}

static FALLBACK_PALETTE: Lazy<Vec<Color32>> = Lazy::new(|| {
    ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA94D", "#B197FC"]
        .iter()
        .filter_map(|hex| parse_hex_color(hex))
        .collect()
});

/// Parse a `#RRGGBB` color. Anything else yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

impl ChartConfig {
    /// Pair every data key with a color. Colors are consumed positionally;
    /// when the color list runs short the fallback palette cycles in, so a
    /// short list degrades styling instead of failing.
    pub fn series(&self) -> Vec<Series<'_>> {
        self.data_keys
            .iter()
            .enumerate()
            .map(|(i, key)| Series {
                key: key.as_str(),
                color: self
                    .colors
                    .get(i)
                    .and_then(|hex| parse_hex_color(hex))
                    .unwrap_or_else(|| FALLBACK_PALETTE[i % FALLBACK_PALETTE.len()]),
            })
            .collect()
    }

    /// Names from `data_keys` that are absent from the given data point.
    pub fn missing_keys<'a>(&'a self, data: &DataPoint) -> Vec<&'a str> {
        self.data_keys
            .iter()
            .filter(|key| !data.contains_key(key.as_str()))
            .map(|key| key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart(data_keys: &[&str], colors: &[&str]) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            data_keys: data_keys.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            data: Vec::new(),
        }
    }

    #[test]
    fn short_color_list_falls_back_to_palette() {
        let chart = chart(&["calls", "answered", "missed"], &["#FF6B6B"]);
        let series = chart.series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].color, Color32::from_rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(series[1].color, FALLBACK_PALETTE[1]);
        assert_eq!(series[2].color, FALLBACK_PALETTE[2]);
    }

    #[test]
    fn excess_colors_are_ignored() {
        let chart = chart(&["calls"], &["#FF6B6B", "#4ECDC4"]);
        assert_eq!(chart.series().len(), 1);
    }

    #[test]
    fn invalid_color_degrades_to_palette() {
        let chart = chart(&["calls"], &["not-a-color"]);
        assert_eq!(chart.series()[0].color, FALLBACK_PALETTE[0]);
    }

    #[test]
    fn unknown_chart_kind_is_rejected() {
        let err = serde_json::from_value::<ChartConfig>(json!({
            "type": "sunburst",
            "dataKeys": ["value"],
        }));
        assert!(err.is_err());
    }

    #[test]
    fn missing_keys_reports_absent_fields() {
        let chart = chart(&["calls", "answered"], &[]);
        let data = point(json!({ "date": "2023-07-01", "calls": 50 }));
        assert_eq!(chart.missing_keys(&data), vec!["answered"]);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            parse_hex_color("#45B7D1"),
            Some(Color32::from_rgb(0x45, 0xB7, 0xD1))
        );
        assert_eq!(parse_hex_color("45B7D1"), None);
        assert_eq!(parse_hex_color("#45B7"), None);
    }
}
