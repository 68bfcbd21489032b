use serde::{Deserialize, Serialize};

/// Horizontal alignment of the title block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Title and subtitle styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub title_show: bool,
    pub title_background: String,
    pub title_align: TitleAlign,
    pub title_text: String,
    pub title_color: String,
    pub title_font_size: f64,
    pub title_bold: bool,
    pub subtitle_text: String,
    pub subtitle_color: String,
    pub subtitle_font_size: f64,
    pub subtitle_bold: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            title_show: true,
            title_background: "#FFFFFF".to_owned(),
            title_align: TitleAlign::Center,
            title_text: String::new(),
            title_color: "#1A1A1A".to_owned(),
            title_font_size: 20.0,
            title_bold: true,
            subtitle_text: String::new(),
            subtitle_color: "#8A8A8A".to_owned(),
            subtitle_font_size: 16.0,
            subtitle_bold: false,
        }
    }
}
