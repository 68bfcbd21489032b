use serde::{Deserialize, Serialize};

/// Axis tick-label styling for both axes plus the shared prefix/suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelConfig {
    pub label_axis_y_bold: bool,
    pub label_axis_y_color: String,
    pub label_axis_y_font_size: f64,
    /// Decimal places used when formatting y-axis values.
    pub label_axis_y_rounding: u8,
    pub label_axis_y_show: bool,
    pub label_axis_y_offset_x: f64,
    pub label_axis_y_offset_y: f64,
    /// Prepended to every formatted value, e.g. a currency sign.
    pub label_prefix: String,
    pub label_suffix: String,
    /// Explicit x-axis category labels; empty means "derive from data".
    pub label_axis_x_values: Vec<String>,
    pub label_axis_x_bold: bool,
    pub label_axis_x_color: String,
    pub label_axis_x_font_size: f64,
    pub label_axis_x_rounding: u8,
    pub label_axis_x_show: bool,
    pub label_axis_x_offset_x: f64,
    pub label_axis_x_offset_y: f64,
    /// Rotation in degrees applied to x-axis labels.
    pub label_axis_x_rotation: f64,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            label_axis_y_bold: false,
            label_axis_y_color: "#1A1A1A".to_owned(),
            label_axis_y_font_size: 10.0,
            label_axis_y_rounding: 1,
            label_axis_y_show: true,
            label_axis_y_offset_x: 0.0,
            label_axis_y_offset_y: 0.0,
            label_prefix: String::new(),
            label_suffix: String::new(),
            label_axis_x_values: Vec::new(),
            label_axis_x_bold: false,
            label_axis_x_color: "#1A1A1A".to_owned(),
            label_axis_x_font_size: 12.0,
            label_axis_x_rounding: 1,
            label_axis_x_show: true,
            label_axis_x_offset_x: 0.0,
            label_axis_x_offset_y: 0.0,
            label_axis_x_rotation: 0.0,
        }
    }
}

/// In-plot value labels drawn next to each datapoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLabelConfig {
    pub datalabel_show: bool,
    /// When enabled, labels inherit their series color instead of the default.
    pub datalabel_use_serie_color: bool,
    pub datalabel_default_color: String,
    pub datalabel_font_size: f64,
    pub datalabel_rounding: u8,
    pub datalabel_offset_y: f64,
}

impl Default for DataLabelConfig {
    fn default() -> Self {
        Self {
            datalabel_show: true,
            datalabel_use_serie_color: true,
            datalabel_default_color: "#1A1A1A".to_owned(),
            datalabel_font_size: 10.0,
            datalabel_rounding: 1,
            datalabel_offset_y: -6.0,
        }
    }
}
