use serde::{Deserialize, Serialize};

/// Upper bound of the documented [`LineConfig::line_smooth_force`] range.
///
/// Larger values are accepted by the merge path but produce undefined
/// smoothing; [`crate::XyChartConfig::validate`] rejects them.
pub const LINE_SMOOTH_FORCE_MAX: f64 = 0.2;

/// Line series styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub line_smooth: bool,
    /// Curve tension used when `line_smooth` is on, in `0..=0.2`.
    pub line_smooth_force: f64,
    /// Draws a background-colored casing under each line stroke.
    pub line_sheathed: bool,
    pub line_stroke_width: f64,
    pub line_area_opacity: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            line_smooth: false,
            line_smooth_force: 0.15,
            line_sheathed: true,
            line_stroke_width: 1.0,
            line_area_opacity: 0.2,
        }
    }
}

/// Point marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub plot_radius: f64,
    pub plot_stroke: String,
    pub plot_stroke_width: f64,
    /// Radius applied to the marker under the selector.
    pub plot_focus_radius: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_radius: 3.0,
            plot_stroke: "#FFFFFF".to_owned(),
            plot_stroke_width: 1.0,
            plot_focus_radius: 5.0,
        }
    }
}

/// Bar series styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub bar_border_radius: f64,
    /// Share of each category slot left as gap between bar groups.
    pub bar_group_gap_proportion: f64,
    pub bar_stroke: String,
    pub bar_stroke_width: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bar_border_radius: 2.0,
            bar_group_gap_proportion: 0.3,
            bar_stroke: "#FFFFFF".to_owned(),
            bar_stroke_width: 0.75,
        }
    }
}

/// Series stacking layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesLayoutConfig {
    pub series_stacked: bool,
    /// Vertical gap between stacked lanes, in pixels.
    pub series_stack_gap: f64,
}

impl Default for SeriesLayoutConfig {
    fn default() -> Self {
        Self {
            series_stacked: false,
            series_stack_gap: 20.0,
        }
    }
}
