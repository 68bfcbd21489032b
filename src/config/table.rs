use serde::{Deserialize, Serialize};

/// Tabular data view shown under the chart when enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub table_details_title: String,
    pub table_background: String,
    pub table_color: String,
    pub table_show: bool,
    pub table_caption: String,
    pub table_font_size: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_details_title: String::new(),
            table_background: "#FFFFFF".to_owned(),
            table_color: "#1A1A1A".to_owned(),
            table_show: false,
            table_caption: String::new(),
            table_font_size: 14.0,
        }
    }
}
