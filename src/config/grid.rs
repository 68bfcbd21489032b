use serde::{Deserialize, Serialize};

/// Axis frame and grid-line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub grid_axis_x_name: String,
    pub grid_axis_y_name: String,
    /// Horizontal shift applied to the y-axis name, negative moves it left.
    pub grid_axis_y_name_offset_x: f64,
    pub grid_axis_x_name_offset_y: f64,
    pub grid_axis_names_font_size: f64,
    pub grid_axis_names_color: String,
    pub grid_axis_stroke: String,
    pub grid_axis_stroke_width: f64,
    pub grid_axis_x_show: bool,
    pub grid_axis_y_show: bool,
    /// Number of tick stops on the y scale.
    pub grid_axis_y_scale_ticks: u32,
    pub grid_lines_y_show: bool,
    pub grid_lines_y_stroke: String,
    pub grid_lines_y_stroke_width: f64,
    pub grid_lines_y_stroke_dasharray: f64,
    pub grid_lines_x_show: bool,
    pub grid_lines_x_stroke: String,
    pub grid_lines_x_stroke_width: f64,
    pub grid_lines_x_stroke_dasharray: f64,
    pub grid_lines_x_stroke_opacity: f64,
    pub grid_lines_y_stroke_opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_axis_x_name: String::new(),
            grid_axis_y_name: String::new(),
            grid_axis_y_name_offset_x: -30.0,
            grid_axis_x_name_offset_y: 40.0,
            grid_axis_names_font_size: 10.0,
            grid_axis_names_color: "#1A1A1A".to_owned(),
            grid_axis_stroke: "#CCCCCC".to_owned(),
            grid_axis_stroke_width: 0.5,
            grid_axis_x_show: true,
            grid_axis_y_show: true,
            grid_axis_y_scale_ticks: 5,
            grid_lines_y_show: true,
            grid_lines_y_stroke: "#CCCCCC".to_owned(),
            grid_lines_y_stroke_width: 0.5,
            grid_lines_y_stroke_dasharray: 0.0,
            grid_lines_x_show: true,
            grid_lines_x_stroke: "#CCCCCC".to_owned(),
            grid_lines_x_stroke_width: 0.5,
            grid_lines_x_stroke_dasharray: 2.0,
            grid_lines_x_stroke_opacity: 0.5,
            grid_lines_y_stroke_opacity: 0.3,
        }
    }
}
