use serde::{Deserialize, Serialize};

/// Legend strip styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub legend_show: bool,
    pub legend_background: String,
    pub legend_color: String,
    pub legend_font_size: f64,
    pub legend_marker_size: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            legend_show: true,
            legend_background: "#FFFFFF".to_owned(),
            legend_color: "#1A1A1A".to_owned(),
            legend_font_size: 14.0,
            legend_marker_size: 14.0,
        }
    }
}
