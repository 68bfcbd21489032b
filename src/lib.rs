//! xychart-config: default styling schema for XY-chart renderers.
//!
//! This crate owns the configuration contract of an XY chart: one structured
//! record per styling group (frame, grid, labels, tooltip, series, legend,
//! title, table, zoom, period highlighter) composed into [`XyChartConfig`],
//! plus the flat-key serialization and override-merge contract consumed by
//! rendering hosts.

pub mod config;
pub mod contract;
pub mod error;
pub mod flat;
pub mod telemetry;
pub mod validate;

pub use config::{TitleAlign, TooltipRenderer, TooltipRendererHook, XyChartConfig};
pub use error::{ConfigError, ConfigResult};
