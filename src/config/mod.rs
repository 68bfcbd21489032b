pub mod frame;
pub mod grid;
pub mod labels;
pub mod legend;
pub mod selector;
pub mod series;
pub mod table;
pub mod title;
pub mod tooltip;
pub mod zoom;

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

pub use frame::FrameConfig;
pub use grid::GridConfig;
pub use labels::{AxisLabelConfig, DataLabelConfig};
pub use legend::LegendConfig;
pub use selector::SelectorConfig;
pub use series::{BarConfig, LINE_SMOOTH_FORCE_MAX, LineConfig, PlotConfig, SeriesLayoutConfig};
pub use table::TableConfig;
pub use title::{TitleAlign, TitleConfig};
pub use tooltip::{TooltipConfig, TooltipRenderer, TooltipRendererHook};
pub use zoom::{PeriodHighlighterConfig, ZoomConfig};

/// Complete XY-chart styling configuration.
///
/// Grouped in memory, flat on the wire: every group struct is
/// `#[serde(flatten)]`ed, so the serialized form is the single flat key
/// namespace host applications override against. Group order here fixes the
/// key order of the flat view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XyChartConfig {
    #[serde(flatten)]
    pub frame: FrameConfig,
    #[serde(flatten)]
    pub grid: GridConfig,
    #[serde(flatten)]
    pub axis_labels: AxisLabelConfig,
    #[serde(flatten)]
    pub data_labels: DataLabelConfig,
    #[serde(flatten)]
    pub tooltip: TooltipConfig,
    #[serde(flatten)]
    pub line: LineConfig,
    #[serde(flatten)]
    pub plot: PlotConfig,
    #[serde(flatten)]
    pub bar: BarConfig,
    #[serde(flatten)]
    pub selector: SelectorConfig,
    #[serde(flatten)]
    pub series: SeriesLayoutConfig,
    #[serde(flatten)]
    pub legend: LegendConfig,
    #[serde(flatten)]
    pub title: TitleConfig,
    #[serde(flatten)]
    pub table: TableConfig,
    #[serde(flatten)]
    pub zoom: ZoomConfig,
    #[serde(flatten)]
    pub period_highlighter: PeriodHighlighterConfig,
}

static DEFAULTS: OnceLock<XyChartConfig> = OnceLock::new();

impl XyChartConfig {
    /// Returns the process-wide default configuration record.
    ///
    /// The record is built once and never mutated; concurrent readers need no
    /// synchronization. Per-chart configuration is derived from it with
    /// [`XyChartConfig::apply_overrides`], which copies rather than mutates.
    #[must_use]
    pub fn defaults() -> &'static Self {
        DEFAULTS.get_or_init(Self::default)
    }

    /// Sets chart frame dimensions in pixels.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.frame.chart_width = width;
        self.frame.chart_height = height;
        self
    }

    /// Sets the custom series palette; an empty palette restores the built-in one.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.frame.chart_custom_palette = palette;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.title.title_text = text.into();
        self
    }

    /// Sets the subtitle text.
    #[must_use]
    pub fn with_subtitle_text(mut self, text: impl Into<String>) -> Self {
        self.title.subtitle_text = text.into();
        self
    }

    /// Sets explicit x-axis category labels.
    #[must_use]
    pub fn with_axis_x_values(mut self, values: Vec<String>) -> Self {
        self.axis_labels.label_axis_x_values = values;
        self
    }

    /// Enables stacked series layout with the given lane gap.
    #[must_use]
    pub fn with_stacked_series(mut self, stack_gap: f64) -> Self {
        self.series.series_stacked = true;
        self.series.series_stack_gap = stack_gap;
        self
    }

    /// Installs a custom tooltip renderer hook.
    #[must_use]
    pub fn with_tooltip_renderer(mut self, renderer: Arc<dyn TooltipRenderer>) -> Self {
        self.tooltip.tooltip_custom = Some(TooltipRendererHook::new(renderer));
        self
    }
}
