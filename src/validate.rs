//! Opt-in range validation for configuration records.
//!
//! The merge path accepts any well-typed value; out-of-range styling is the
//! renderer's problem by contract. Hosts that prefer failing fast call
//! [`XyChartConfig::validate`] on the merged record.

use crate::config::{LINE_SMOOTH_FORCE_MAX, XyChartConfig};
use crate::error::{ConfigError, ConfigResult};

impl XyChartConfig {
    /// Checks every range-bounded field: opacities and proportions must lie
    /// in `[0, 1]`, `line_smooth_force` in `[0, 0.2]`, and pixel measures
    /// (stroke widths, radii, font sizes, paddings, dash patterns) must be
    /// non-negative. The first violation is returned.
    ///
    /// The default record validates clean.
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, value) in self.unit_interval_fields() {
            check_range(key, value, 0.0, 1.0)?;
        }
        check_range(
            "line_smooth_force",
            self.line.line_smooth_force,
            0.0,
            LINE_SMOOTH_FORCE_MAX,
        )?;
        for (key, value) in self.pixel_measure_fields() {
            check_range(key, value, 0.0, f64::INFINITY)?;
        }
        Ok(())
    }

    fn unit_interval_fields(&self) -> [(&'static str, f64); 6] {
        [
            (
                "chart_area_background_opacity",
                self.frame.chart_area_background_opacity,
            ),
            (
                "grid_lines_x_stroke_opacity",
                self.grid.grid_lines_x_stroke_opacity,
            ),
            (
                "grid_lines_y_stroke_opacity",
                self.grid.grid_lines_y_stroke_opacity,
            ),
            ("line_area_opacity", self.line.line_area_opacity),
            ("zoom_opacity", self.zoom.zoom_opacity),
            ("bar_group_gap_proportion", self.bar.bar_group_gap_proportion),
        ]
    }

    fn pixel_measure_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("chart_padding_top", self.frame.chart_padding_top),
            ("chart_padding_left", self.frame.chart_padding_left),
            ("chart_padding_right", self.frame.chart_padding_right),
            ("chart_padding_bottom", self.frame.chart_padding_bottom),
            ("grid_axis_names_font_size", self.grid.grid_axis_names_font_size),
            ("grid_axis_stroke_width", self.grid.grid_axis_stroke_width),
            (
                "grid_lines_y_stroke_width",
                self.grid.grid_lines_y_stroke_width,
            ),
            (
                "grid_lines_y_stroke_dasharray",
                self.grid.grid_lines_y_stroke_dasharray,
            ),
            (
                "grid_lines_x_stroke_width",
                self.grid.grid_lines_x_stroke_width,
            ),
            (
                "grid_lines_x_stroke_dasharray",
                self.grid.grid_lines_x_stroke_dasharray,
            ),
            (
                "label_axis_y_font_size",
                self.axis_labels.label_axis_y_font_size,
            ),
            (
                "label_axis_x_font_size",
                self.axis_labels.label_axis_x_font_size,
            ),
            ("datalabel_font_size", self.data_labels.datalabel_font_size),
            ("tooltip_font_size", self.tooltip.tooltip_font_size),
            ("tooltip_padding", self.tooltip.tooltip_padding),
            ("tooltip_border_radius", self.tooltip.tooltip_border_radius),
            ("tooltip_max_width", self.tooltip.tooltip_max_width),
            ("tooltip_marker_size", self.tooltip.tooltip_marker_size),
            ("line_stroke_width", self.line.line_stroke_width),
            ("plot_radius", self.plot.plot_radius),
            ("plot_stroke_width", self.plot.plot_stroke_width),
            ("plot_focus_radius", self.plot.plot_focus_radius),
            ("bar_border_radius", self.bar.bar_border_radius),
            ("bar_stroke_width", self.bar.bar_stroke_width),
            ("selector_stroke_width", self.selector.selector_stroke_width),
            (
                "selector_stroke_dasharray",
                self.selector.selector_stroke_dasharray,
            ),
            ("series_stack_gap", self.series.series_stack_gap),
            ("legend_font_size", self.legend.legend_font_size),
            ("legend_marker_size", self.legend.legend_marker_size),
            ("title_font_size", self.title.title_font_size),
            ("subtitle_font_size", self.title.subtitle_font_size),
            ("table_font_size", self.table.table_font_size),
            ("zoom_stroke_width", self.zoom.zoom_stroke_width),
            (
                "period_highlighter_font_size",
                self.period_highlighter.period_highlighter_font_size,
            ),
            (
                "period_highlighter_width",
                self.period_highlighter.period_highlighter_width,
            ),
            (
                "period_highlighter_height",
                self.period_highlighter.period_highlighter_height,
            ),
        ]
    }
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> ConfigResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}
