use std::fmt;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Caller-supplied tooltip rendering capability.
///
/// The host renderer invokes this instead of its built-in tooltip markup when
/// a hook is installed. The payload is the datapoint context the renderer
/// would otherwise format itself; the returned string is trusted markup.
pub trait TooltipRenderer: Send + Sync {
    fn render(&self, payload: &serde_json::Value) -> String;
}

/// Shared handle around an installed [`TooltipRenderer`].
///
/// Hooks are opaque: they serialize as `null` and can only be installed
/// through the typed API, never reconstructed from serialized data.
/// Equality is handle identity, not behavioral equivalence.
#[derive(Clone)]
pub struct TooltipRendererHook(Arc<dyn TooltipRenderer>);

impl TooltipRendererHook {
    #[must_use]
    pub fn new(renderer: Arc<dyn TooltipRenderer>) -> Self {
        Self(renderer)
    }

    #[must_use]
    pub fn render(&self, payload: &serde_json::Value) -> String {
        self.0.render(payload)
    }
}

impl fmt::Debug for TooltipRendererHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipRendererHook(..)")
    }
}

impl PartialEq for TooltipRendererHook {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Tooltip box styling and behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub tooltip_show: bool,
    pub tooltip_value_rounding: u8,
    pub tooltip_background_color: String,
    pub tooltip_font_size: f64,
    pub tooltip_color: String,
    pub tooltip_padding: f64,
    pub tooltip_border_radius: f64,
    /// CSS border shorthand, kept as a composite style string.
    pub tooltip_border: String,
    pub tooltip_box_shadow: String,
    pub tooltip_max_width: f64,
    /// Optional custom renderer; absent by default, serialized as `null`.
    #[serde(
        serialize_with = "serialize_hook",
        deserialize_with = "deserialize_hook"
    )]
    pub tooltip_custom: Option<TooltipRendererHook>,
    pub tooltip_marker_size: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            tooltip_show: true,
            tooltip_value_rounding: 1,
            tooltip_background_color: "#FFFFFF".to_owned(),
            tooltip_font_size: 14.0,
            tooltip_color: "#1A1A1A".to_owned(),
            tooltip_padding: 12.0,
            tooltip_border_radius: 4.0,
            tooltip_border: "1px solid #e1e5e8".to_owned(),
            tooltip_box_shadow: "0 0 12px -6px rgba(0,0,0,0.3)".to_owned(),
            tooltip_max_width: 255.0,
            tooltip_custom: None,
            tooltip_marker_size: 14.0,
        }
    }
}

fn serialize_hook<S>(_: &Option<TooltipRendererHook>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Hooks are process-local capabilities; the wire form is always null.
    serializer.serialize_none()
}

fn deserialize_hook<'de, D>(deserializer: D) -> Result<Option<TooltipRendererHook>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(other) => Err(D::Error::custom(format!(
            "tooltip_custom accepts only null, got {other}; \
             hooks are installed through with_tooltip_renderer"
        ))),
    }
}
