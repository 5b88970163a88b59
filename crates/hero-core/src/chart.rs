//! Power-stats bar chart model.
//!
//! Serializes to the `{data, layout}` JSON a plotly-style renderer consumes.

use crate::api::HeroPowerStats;
use serde::Serialize;

/// Category labels in the fixed chart order.
pub const CATEGORIES: [&str; 6] = [
    "intelligence",
    "strength",
    "speed",
    "durability",
    "power",
    "combat",
];

const FONT_FAMILY: &str = "Courier New, monospace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// One bar series. `x` holds the ratings, `y` the category labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<Option<f64>>,
    pub y: Vec<&'static str>,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
    pub pad: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: &'static str,
    pub font: Font,
    pub xref: &'static str,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub autosize: bool,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub title: ChartTitle,
    pub xaxis: Axis,
}

impl ChartLayout {
    /// The fixed 480x640 "Super Hero Powers" layout.
    pub fn hero_powers() -> Self {
        Self {
            autosize: false,
            width: 480,
            height: 640,
            margin: Margin {
                l: 80,
                r: 50,
                b: 100,
                t: 100,
                pad: 4,
            },
            title: ChartTitle {
                text: "Super Hero Powers",
                font: Font {
                    family: FONT_FAMILY,
                    size: 24,
                    color: None,
                },
                xref: "paper",
                x: 0.05,
            },
            xaxis: Axis {
                title: AxisTitle {
                    text: "Power Ratings",
                    font: Font {
                        family: FONT_FAMILY,
                        size: 18,
                        color: Some("#7f7f7f"),
                    },
                },
            },
        }
    }
}

/// A complete chart: one horizontal bar trace plus the fixed layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerChart {
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

impl PowerChart {
    pub fn from_stats(stats: &HeroPowerStats) -> Self {
        Self {
            data: vec![BarTrace {
                kind: "bar",
                x: stats.ratings().to_vec(),
                y: CATEGORIES.to_vec(),
                orientation: Orientation::Horizontal,
            }],
            layout: ChartLayout::hero_powers(),
        }
    }

    pub fn categories() -> &'static [&'static str] {
        &CATEGORIES
    }

    /// Ratings of the single trace, in category order.
    pub fn values(&self) -> &[Option<f64>] {
        self.data.first().map(|t| t.x.as_slice()).unwrap_or(&[])
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stats() -> HeroPowerStats {
        serde_json::from_value(json!({
            "intelligence": 1, "strength": 2, "speed": 3,
            "durability": 4, "power": 5, "combat": 6
        }))
        .unwrap()
    }

    #[test]
    fn categories_and_values_in_fixed_order() {
        let chart = PowerChart::from_stats(&stats());
        let trace = &chart.data[0];
        assert_eq!(
            trace.y,
            ["intelligence", "strength", "speed", "durability", "power", "combat"]
        );
        assert_eq!(
            chart.values(),
            [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)]
        );
        assert_eq!(trace.orientation, Orientation::Horizontal);
    }

    #[test]
    fn serializes_plotly_shape() {
        let v = PowerChart::from_stats(&stats()).to_json();
        assert_eq!(v["data"][0]["type"], "bar");
        assert_eq!(v["data"][0]["orientation"], "h");
        assert_eq!(v["data"][0]["x"], json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        assert_eq!(v["layout"]["width"], 480);
        assert_eq!(v["layout"]["height"], 640);
        assert_eq!(v["layout"]["autosize"], false);
        assert_eq!(
            v["layout"]["margin"],
            json!({"l": 80, "r": 50, "b": 100, "t": 100, "pad": 4})
        );
        assert_eq!(v["layout"]["title"]["text"], "Super Hero Powers");
        assert_eq!(v["layout"]["title"]["font"]["size"], 24);
        assert!(v["layout"]["title"]["font"].get("color").is_none());
        assert_eq!(v["layout"]["xaxis"]["title"]["text"], "Power Ratings");
        assert_eq!(v["layout"]["xaxis"]["title"]["font"]["color"], "#7f7f7f");
    }

    #[test]
    fn null_ratings_serialize_as_gaps() {
        let s: HeroPowerStats = serde_json::from_value(json!({
            "intelligence": null, "strength": "10", "speed": 3,
            "durability": 4, "power": 5, "combat": 6
        }))
        .unwrap();
        let v = PowerChart::from_stats(&s).to_json();
        assert!(v["data"][0]["x"][0].is_null());
        assert_eq!(v["data"][0]["x"][1], 10.0);
    }
}
