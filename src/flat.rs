//! Flat-key view of [`XyChartConfig`] and the override-merge contract.
//!
//! The serialized form of the configuration is one flat string-keyed object.
//! Hosts override against that namespace; this module turns a full record
//! into its flat entries and layers partial overrides back onto a record.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{LINE_SMOOTH_FORCE_MAX, XyChartConfig};
use crate::error::{ConfigError, ConfigResult};

impl XyChartConfig {
    /// Returns the flat key/value view of this record, in declaration order.
    ///
    /// Numbers serialize as numbers, colors and composite style strings as
    /// strings, the two sequence fields as ordered lists, and an absent
    /// `tooltip_custom` as `null`.
    pub fn flat_entries(&self) -> ConfigResult<IndexMap<String, Value>> {
        Ok(self.to_flat_object()?.into_iter().collect())
    }

    /// Returns the full recognized flat key set, in declaration order.
    pub fn recognized_keys() -> ConfigResult<Vec<String>> {
        Ok(Self::defaults()
            .to_flat_object()?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }

    /// Produces a new record with `overrides` layered over `self`, per-key
    /// and shallow. `self` is never mutated; merging with an empty override
    /// set yields a structurally equal copy.
    ///
    /// Every override key must belong to the recognized key set and carry a
    /// value of the key's type; otherwise no partial result is produced.
    /// An installed tooltip hook survives the merge unless the override set
    /// carries `"tooltip_custom": null`, which clears it.
    pub fn apply_overrides(&self, overrides: &Map<String, Value>) -> ConfigResult<Self> {
        let mut object = self.to_flat_object()?;

        for key in overrides.keys() {
            if !object.contains_key(key) {
                return Err(ConfigError::UnknownKey(key.clone()));
            }
        }
        let clears_tooltip_hook = match overrides.get("tooltip_custom") {
            None => false,
            Some(Value::Null) => true,
            Some(other) => {
                return Err(ConfigError::InvalidData(format!(
                    "tooltip_custom accepts only null in overrides, got {other}; \
                     install hooks through with_tooltip_renderer"
                )));
            }
        };

        if overrides.is_empty() {
            return Ok(self.clone());
        }

        for (key, value) in overrides {
            object.insert(key.clone(), value.clone());
        }

        let mut merged: Self = serde_json::from_value(Value::Object(object))
            .map_err(|e| ConfigError::InvalidData(format!("failed to apply overrides: {e}")))?;

        // The hook is a process-local capability and does not round-trip
        // through the flat object.
        if !clears_tooltip_hook {
            merged.tooltip.tooltip_custom = self.tooltip.tooltip_custom.clone();
        }

        if !(0.0..=LINE_SMOOTH_FORCE_MAX).contains(&merged.line.line_smooth_force) {
            warn!(
                line_smooth_force = merged.line.line_smooth_force,
                "line_smooth_force outside documented range, smoothing behavior is undefined"
            );
        }
        debug!(override_count = overrides.len(), "applied config overrides");

        Ok(merged)
    }

    /// Parses a flat JSON object and applies it as overrides over `self`.
    pub fn apply_overrides_json(&self, input: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(input)
            .map_err(|e| ConfigError::InvalidData(format!("failed to parse overrides: {e}")))?;
        match parsed {
            Value::Object(overrides) => self.apply_overrides(&overrides),
            other => Err(ConfigError::InvalidData(format!(
                "overrides must be a JSON object, got {other}"
            ))),
        }
    }

    fn to_flat_object(&self) -> ConfigResult<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(other) => Err(ConfigError::InvalidData(format!(
                "config serialized to a non-object value: {other}"
            ))),
            Err(e) => Err(ConfigError::InvalidData(format!(
                "failed to serialize config: {e}"
            ))),
        }
    }
}
