//! Versioned JSON document contract for persisted configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::XyChartConfig;
use crate::error::{ConfigError, ConfigResult};

pub const FLAT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Persisted envelope: schema version plus the flat configuration object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatConfigDocumentV1 {
    pub schema_version: u32,
    pub config: XyChartConfig,
}

impl XyChartConfig {
    /// Serializes the bare flat object to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Serializes the v1 envelope to pretty JSON.
    pub fn to_json_contract_v1_pretty(&self) -> ConfigResult<String> {
        let payload = FlatConfigDocumentV1 {
            schema_version: FLAT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ConfigError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Deserializes from either the v1 envelope or a bare flat object.
    ///
    /// Dispatch is by document shape: an object carrying a `schema_version`
    /// key is an envelope and its parse or version errors propagate, so a
    /// corrupt persisted document can never degrade into an all-defaults
    /// record. `schema_version` is not a recognized flat key, so bare objects
    /// never carry it.
    pub fn from_json_compat_str(input: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(input)
            .map_err(|e| ConfigError::InvalidData(format!("failed to parse config: {e}")))?;

        let is_envelope = parsed
            .as_object()
            .is_some_and(|object| object.contains_key("schema_version"));
        if is_envelope {
            let payload: FlatConfigDocumentV1 = serde_json::from_value(parsed).map_err(|e| {
                ConfigError::InvalidData(format!("failed to parse config contract envelope: {e}"))
            })?;
            if payload.schema_version != FLAT_CONFIG_JSON_SCHEMA_V1 {
                return Err(ConfigError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }

        serde_json::from_value(parsed)
            .map_err(|e| ConfigError::InvalidData(format!("failed to parse config: {e}")))
    }
}
