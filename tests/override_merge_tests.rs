use std::sync::Arc;

use serde_json::{Map, Value, json};
use xychart_config::{ConfigError, TooltipRenderer, XyChartConfig};

fn overrides(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

#[test]
fn empty_override_set_yields_structural_copy() {
    let defaults = XyChartConfig::defaults();
    let merged = defaults
        .apply_overrides(&Map::new())
        .expect("empty merge succeeds");
    assert_eq!(&merged, defaults);
}

#[test]
fn single_key_override_replaces_only_that_key() {
    let defaults = XyChartConfig::defaults();
    let merged = defaults
        .apply_overrides(&overrides(&[("tooltip_font_size", json!(18.0))]))
        .expect("merge succeeds");

    assert_eq!(merged.tooltip.tooltip_font_size, 18.0);

    let base_entries = defaults.flat_entries().expect("flatten");
    let merged_entries = merged.flat_entries().expect("flatten");
    for (key, value) in &base_entries {
        if key == "tooltip_font_size" {
            assert_eq!(merged_entries[key], json!(18.0));
        } else {
            assert_eq!(&merged_entries[key], value, "key {key} drifted");
        }
    }
}

#[test]
fn merge_never_mutates_the_shared_defaults() {
    let before = XyChartConfig::default();
    let _ = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[
            ("chart_width", json!(900)),
            ("legend_show", json!(false)),
        ]))
        .expect("merge succeeds");
    assert_eq!(XyChartConfig::defaults(), &before);
}

#[test]
fn unknown_key_is_rejected_without_partial_application() {
    let err = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[
            ("chart_width", json!(900)),
            ("chart_borderline", json!(1)),
        ]))
        .expect_err("unknown key must fail");
    match err {
        ConfigError::UnknownKey(key) => assert_eq!(key, "chart_borderline"),
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn type_mismatch_is_rejected() {
    let err = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[("legend_show", json!("yes"))]))
        .expect_err("string into bool must fail");
    assert!(matches!(err, ConfigError::InvalidData(_)));

    let err = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[("chart_height", json!(309.5))]))
        .expect_err("fractional pixel count must fail");
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

#[test]
fn sequence_overrides_replace_wholesale() {
    let merged = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[
            ("chart_custom_palette", json!(["#111111", "#EE5500"])),
            ("label_axis_x_values", json!(["Q1", "Q2", "Q3"])),
        ]))
        .expect("merge succeeds");
    assert_eq!(merged.frame.chart_custom_palette, ["#111111", "#EE5500"]);
    assert_eq!(merged.axis_labels.label_axis_x_values, ["Q1", "Q2", "Q3"]);
}

#[test]
fn out_of_documented_range_smooth_force_is_accepted() {
    // Accepted by contract; smoothing behavior is the renderer's problem.
    let merged = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[("line_smooth_force", json!(0.35))]))
        .expect("merge accepts out-of-range force");
    assert_eq!(merged.line.line_smooth_force, 0.35);
    assert!(merged.validate().is_err());
}

#[test]
fn overrides_parse_from_json_text() {
    let merged = XyChartConfig::defaults()
        .apply_overrides_json(r#"{ "title_text": "Revenue", "title_align": "left" }"#)
        .expect("merge succeeds");
    assert_eq!(merged.title.title_text, "Revenue");
    assert_eq!(merged.title.title_align, xychart_config::TitleAlign::Left);

    let err = XyChartConfig::defaults()
        .apply_overrides_json("[1, 2, 3]")
        .expect_err("non-object overrides must fail");
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

struct StaticTooltip;

impl TooltipRenderer for StaticTooltip {
    fn render(&self, _payload: &serde_json::Value) -> String {
        "<b>custom</b>".to_owned()
    }
}

#[test]
fn installed_tooltip_hook_survives_unrelated_merge() {
    let base = XyChartConfig::default().with_tooltip_renderer(Arc::new(StaticTooltip));
    let merged = base
        .apply_overrides(&overrides(&[("chart_width", json!(700))]))
        .expect("merge succeeds");

    let hook = merged.tooltip.tooltip_custom.expect("hook preserved");
    assert_eq!(hook.render(&json!({})), "<b>custom</b>");
}

#[test]
fn null_override_clears_tooltip_hook() {
    let base = XyChartConfig::default().with_tooltip_renderer(Arc::new(StaticTooltip));
    let merged = base
        .apply_overrides(&overrides(&[("tooltip_custom", Value::Null)]))
        .expect("merge succeeds");
    assert!(merged.tooltip.tooltip_custom.is_none());
}

#[test]
fn non_null_tooltip_hook_override_is_rejected() {
    let err = XyChartConfig::defaults()
        .apply_overrides(&overrides(&[("tooltip_custom", json!("renderer-id"))]))
        .expect_err("hooks cannot arrive through serialized overrides");
    assert!(matches!(err, ConfigError::InvalidData(_)));
}
