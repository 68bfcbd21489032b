use serde_json::{Value, json};
use xychart_config::contract::FLAT_CONFIG_JSON_SCHEMA_V1;
use xychart_config::{ConfigError, XyChartConfig};

#[test]
fn contract_v1_roundtrip() {
    let config = XyChartConfig::default()
        .with_dimensions(800, 450)
        .with_title_text("Throughput");

    let json = config
        .to_json_contract_v1_pretty()
        .expect("contract serializes");
    let restored = XyChartConfig::from_json_compat_str(&json).expect("contract parses");
    assert_eq!(restored, config);
}

#[test]
fn contract_envelope_carries_schema_version() {
    let json = XyChartConfig::defaults()
        .to_json_contract_v1_pretty()
        .expect("contract serializes");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(
        value["schema_version"],
        json!(FLAT_CONFIG_JSON_SCHEMA_V1)
    );
    assert_eq!(value["config"]["chart_width"], json!(500));
}

#[test]
fn bare_flat_object_is_accepted_by_compat_reader() {
    let json = XyChartConfig::defaults()
        .to_json_pretty()
        .expect("bare form serializes");
    let restored = XyChartConfig::from_json_compat_str(&json).expect("bare form parses");
    assert_eq!(&restored, XyChartConfig::defaults());
}

#[test]
fn partial_bare_object_falls_back_to_defaults_per_key() {
    let restored =
        XyChartConfig::from_json_compat_str(r#"{ "chart_width": 640, "legend_show": false }"#)
            .expect("partial doc parses");
    assert_eq!(restored.frame.chart_width, 640);
    assert!(!restored.legend.legend_show);
    assert_eq!(restored.frame.chart_height, 309);
    assert!(restored.title.title_show);
}

#[test]
fn malformed_envelope_config_is_rejected_not_defaulted() {
    let doc = json!({
        "schema_version": 1,
        "config": { "chart_height": "oops" }
    })
    .to_string();

    let err = XyChartConfig::from_json_compat_str(&doc)
        .expect_err("type mismatch inside the envelope must surface");
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

#[test]
fn non_integer_schema_version_is_rejected_not_defaulted() {
    let doc = json!({
        "schema_version": "2",
        "config": {}
    })
    .to_string();

    let err = XyChartConfig::from_json_compat_str(&doc)
        .expect_err("string schema_version must surface");
    match err {
        ConfigError::InvalidData(message) => {
            assert!(message.contains("contract envelope"));
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn envelope_missing_config_is_rejected() {
    let err = XyChartConfig::from_json_compat_str(r#"{ "schema_version": 1 }"#)
        .expect_err("envelope without config must surface");
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

#[test]
fn non_null_tooltip_hook_is_rejected_in_documents() {
    let err = XyChartConfig::from_json_compat_str(r#"{ "tooltip_custom": "hook-id" }"#)
        .expect_err("hooks cannot arrive through serialized documents");
    assert!(matches!(err, ConfigError::InvalidData(_)));

    let restored = XyChartConfig::from_json_compat_str(r#"{ "tooltip_custom": null }"#)
        .expect("explicit null is the serialized absent form");
    assert!(restored.tooltip.tooltip_custom.is_none());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let doc = json!({
        "schema_version": 2,
        "config": {}
    })
    .to_string();

    let err = XyChartConfig::from_json_compat_str(&doc).expect_err("v2 must be rejected");
    match err {
        ConfigError::InvalidData(message) => {
            assert!(message.contains("unsupported config schema version"));
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}
