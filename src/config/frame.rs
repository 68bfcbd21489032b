use serde::{Deserialize, Serialize};

/// Chart frame geometry and background fills.
///
/// Field names double as the flat serialized keys, so overrides stay
/// self-describing (`chart_height`, `chart_background`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub chart_height: u32,
    pub chart_width: u32,
    pub chart_padding_top: f64,
    pub chart_padding_left: f64,
    pub chart_padding_right: f64,
    pub chart_padding_bottom: f64,
    pub chart_background: String,
    /// Toggles the tinted wash drawn over the plot area only.
    pub chart_area_background_show: bool,
    pub chart_area_background: String,
    pub chart_area_background_opacity: f64,
    /// Empty means "use the built-in series palette".
    pub chart_custom_palette: Vec<String>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            chart_height: 309,
            chart_width: 500,
            chart_padding_top: 24.0,
            chart_padding_left: 48.0,
            chart_padding_right: 12.0,
            chart_padding_bottom: 48.0,
            chart_background: "#FFFFFF".to_owned(),
            chart_area_background_show: true,
            chart_area_background: "#1A1A1A".to_owned(),
            chart_area_background_opacity: 0.01,
            chart_custom_palette: Vec::new(),
        }
    }
}
