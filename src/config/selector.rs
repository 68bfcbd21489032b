use serde::{Deserialize, Serialize};

/// Vertical hover-selector line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub selector_show: bool,
    pub selector_stroke: String,
    pub selector_stroke_width: f64,
    pub selector_stroke_dasharray: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            selector_show: true,
            selector_stroke: "#CCCCCC".to_owned(),
            selector_stroke_width: 1.0,
            selector_stroke_dasharray: 2.0,
        }
    }
}
