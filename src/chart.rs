//! Comparison chart specification.
//!
//! The host UI draws the chart; this module only decides what it contains:
//! one vertical bar for the similarity score, colored by band, against a
//! fixed [0, 110] axis with the two threshold reference lines.

use serde::Serialize;

pub const GOOD_COLOR: &str = "#3498db";
pub const WARNING_COLOR: &str = "#f39c12";
pub const BAD_COLOR: &str = "#e74c3c";

/// Score at or above which the result is "good".
pub const GOOD_THRESHOLD: f64 = 70.0;
/// Score at or above which the result is "acceptable".
pub const ACCEPTABLE_THRESHOLD: f64 = 50.0;

/// Upper bound of the Y axis. Fixed so the value label above the bar
/// always has room.
pub const Y_AXIS_MAX: f64 = 110.0;

pub const CHART_TITLE: &str = "Comparación con la solución ideal";
pub const Y_AXIS_LABEL: &str = "Porcentaje de similitud (%)";
pub const BAR_CATEGORY: &str = "Similitud con la solución ideal";

/// Quality band of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Warning,
    Bad,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= ACCEPTABLE_THRESHOLD {
            Self::Warning
        } else {
            Self::Bad
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => GOOD_COLOR,
            Self::Warning => WARNING_COLOR,
            Self::Bad => BAD_COLOR,
        }
    }
}

/// A dashed horizontal threshold line with a label right of the plot area.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Renderable single-bar chart for one similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonChart {
    pub title: &'static str,
    pub y_axis_label: &'static str,
    /// Always `[0, 110]`.
    pub y_range: [f64; 2],
    pub category: &'static str,
    /// The raw score, possibly outside [0, 100] when the extraction was
    /// noisy.
    pub value: f64,
    /// Bar geometry, clamped to the axis so an out-of-range score cannot
    /// break the drawing.
    pub bar_height: f64,
    pub bar_color: &'static str,
    pub band: ScoreBand,
    /// Centered above the bar: one decimal place plus `%`.
    pub value_label: String,
    /// The two fixed threshold lines, in ascending order.
    pub reference_lines: [ReferenceLine; 2],
}

/// Build the chart spec for a similarity score.
pub fn comparison_chart(score: f64) -> ComparisonChart {
    let band = ScoreBand::of(score);
    ComparisonChart {
        title: CHART_TITLE,
        y_axis_label: Y_AXIS_LABEL,
        y_range: [0.0, Y_AXIS_MAX],
        category: BAR_CATEGORY,
        value: score,
        bar_height: score.clamp(0.0, Y_AXIS_MAX),
        bar_color: band.color(),
        band,
        value_label: format!("{score:.1}%"),
        reference_lines: [
            ReferenceLine {
                y: ACCEPTABLE_THRESHOLD,
                label: "Aceptable (50%)",
                color: WARNING_COLOR,
            },
            ReferenceLine {
                y: GOOD_THRESHOLD,
                label: "Bueno (70%)",
                color: GOOD_COLOR,
            },
        ],
    }
}
