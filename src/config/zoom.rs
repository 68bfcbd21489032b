use serde::{Deserialize, Serialize};

/// Zoom selection overlay styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub zoom_background: String,
    pub zoom_stroke: String,
    pub zoom_stroke_width: f64,
    pub zoom_opacity: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_background: "#91edc2".to_owned(),
            zoom_stroke: "#40c98a".to_owned(),
            zoom_stroke_width: 1.0,
            zoom_opacity: 0.2,
        }
    }
}

/// Floating badge that names the hovered period on the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodHighlighterConfig {
    pub period_highlighter_show: bool,
    pub period_highlighter_font_size: f64,
    pub period_highlighter_offset_y: f64,
    pub period_highlighter_background: String,
    pub period_highlighter_color: String,
    pub period_highlighter_width: f64,
    pub period_highlighter_height: f64,
    pub period_highlighter_box_shadow: String,
}

impl Default for PeriodHighlighterConfig {
    fn default() -> Self {
        Self {
            period_highlighter_show: true,
            period_highlighter_font_size: 10.0,
            period_highlighter_offset_y: 6.0,
            period_highlighter_background: "#e1e5e8".to_owned(),
            period_highlighter_color: "#1A1A1A".to_owned(),
            period_highlighter_width: 64.0,
            period_highlighter_height: 18.0,
            period_highlighter_box_shadow: "0 0 6px -3px rgba(0,0,0,0.3)".to_owned(),
        }
    }
}
