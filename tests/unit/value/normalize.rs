use super::*;
use serde_json::json;

#[test]
fn canonical_shape_passes_through() {
    let raw = json!({
        "lower": {"percent": 0.25, "side": "longest"},
        "upper": {"percent": 0.75, "side": "shortest"},
    });
    let r = normalize_percentage_range(&raw, "opacityRange");
    assert_eq!(r.lower.percent, 0.25);
    assert_eq!(r.lower.side, PercentSide::Longest);
    assert_eq!(r.upper.percent, 0.75);
    assert_eq!(r.upper.side, PercentSide::Shortest);
}

#[test]
fn legacy_min_max_maps_to_endpoints() {
    let r = normalize_percentage_range(&json!({"min": 0.2, "max": 0.8}), "f");
    assert_eq!(r.lower.percent, 0.2);
    assert_eq!(r.lower.side, PercentSide::Shortest);
    assert_eq!(r.upper.percent, 0.8);
    assert_eq!(r.upper.side, PercentSide::Longest);
}

#[test]
fn plain_number_endpoints_get_default_sides() {
    let r = normalize_percentage_range(&json!({"lower": 0.3, "upper": 0.7}), "f");
    assert_eq!(r.lower.percent, 0.3);
    assert_eq!(r.lower.side, PercentSide::Shortest);
    assert_eq!(r.upper.side, PercentSide::Longest);
}

#[test]
fn degraded_placeholders_repair_to_defaults() {
    let raw = json!({"lower": "[object Object]", "upper": "[object Object]"});
    let r = normalize_percentage_range(&raw, "f");
    assert_eq!(r, PercentageRange::default());
}

#[test]
fn percent_scale_values_rescale() {
    let r = normalize_percentage_range(&json!({"lower": 30, "upper": 70}), "f");
    assert_eq!(r.lower.percent, 0.3);
    assert_eq!(r.upper.percent, 0.7);
}

#[test]
fn garbage_maps_whole_to_default() {
    assert_eq!(
        normalize_percentage_range(&json!("[object Object]"), "f"),
        PercentageRange::default()
    );
    assert_eq!(
        normalize_percentage_range(&json!(null), "f"),
        PercentageRange::default()
    );
}

#[test]
fn unknown_side_falls_back_per_endpoint() {
    let raw = json!({
        "lower": {"percent": 0.1, "side": "diagonal"},
        "upper": {"percent": 0.9},
    });
    let r = normalize_percentage_range(&raw, "f");
    assert_eq!(r.lower.side, PercentSide::Shortest);
    assert_eq!(r.upper.side, PercentSide::Longest);
}

#[test]
fn range_repair_keeps_bounds_unordered() {
    let r = normalize_range(&json!({"lower": 5.0, "upper": 1.0}));
    assert_eq!(r, Range::new(5.0, 1.0));
    assert_eq!(normalize_range(&json!("junk")), Range::default());
}

#[test]
fn dynamic_range_repairs_each_half() {
    let raw = json!({"bottom": {"lower": 0.1, "upper": 0.2}, "top": "junk"});
    let d = normalize_dynamic_range(&raw);
    assert_eq!(d.bottom, Range::new(0.1, 0.2));
    assert_eq!(d.top, DynamicRange::default().top);
}

#[test]
fn color_selection_repairs_mode_and_hex() {
    let c = normalize_color_selection(&json!({"selectionType": "sparkle"}));
    assert_eq!(c.selection_type, ColorMode::ColorBucket);
    assert_eq!(c.color_value, None);

    let c = normalize_color_selection(&json!({"selectionType": "color", "colorValue": "zzz"}));
    assert_eq!(c.selection_type, ColorMode::Color);
    assert_eq!(c.color_value.as_deref(), Some("#000000"));

    let c = normalize_color_selection(
        &json!({"selectionType": "neutral-bucket", "colorValue": "#fff"}),
    );
    assert_eq!(c.selection_type, ColorMode::NeutralBucket);
    assert_eq!(c.color_value.as_deref(), Some("#fff"));
}
