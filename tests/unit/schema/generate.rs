use super::*;
use serde_json::json;

#[test]
fn labels_space_before_capitals() {
    assert_eq!(format_label("flareOffset"), "Flare Offset");
    assert_eq!(format_label("numberOfFlareRings"), "Number Of Flare Rings");
    assert_eq!(format_label("speed"), "Speed");
    assert_eq!(format_label(""), "");
}

#[test]
fn max_heuristic_matches_field_vocabulary() {
    assert_eq!(guess_max_value("strokeWidth", 3.0), 10.0);
    assert_eq!(guess_max_value("thickness", 80.0), 10.0);
    assert_eq!(guess_max_value("rotationSpeed", 2.0), 10.0);
    assert_eq!(guess_max_value("numberOfRings", 50.0), 200.0);
    assert_eq!(guess_max_value("count", 10.0), 100.0);
    assert_eq!(guess_max_value("radius", 40.0), 80.0);
    assert_eq!(guess_max_value("size", 10.0), 50.0);
    assert_eq!(guess_max_value("lifetime", 30.0), 90.0);
    assert_eq!(guess_max_value("rotationSpeed", 15.0), 45.0);
    assert_eq!(guess_max_value("layers", 2.0), 100.0);
    assert_eq!(guess_max_value("offset", 120.0), 240.0);
}

#[test]
fn range_shaped_property_yields_range_field() {
    let f = analyze_property("flareOffset", &json!({"lower": 0.01, "upper": 0.06})).unwrap();
    assert_eq!(f.kind, FieldKind::Range);
    assert_eq!(f.label, "Flare Offset");
}

#[test]
fn point_shaped_property_yields_point2d_field() {
    let f = analyze_property("center", &json!({"x": 10, "y": 20})).unwrap();
    assert_eq!(f.kind, FieldKind::Point2d);
}

#[test]
fn canonical_percentage_range_yields_percentagerange_field() {
    let f = analyze_property(
        "opacityRange",
        &json!({
            "lower": {"percent": 0.1, "side": "shortest"},
            "upper": {"percent": 0.9, "side": "longest"},
        }),
    )
    .unwrap();
    assert_eq!(f.kind, FieldKind::PercentageRange);
}

#[test]
fn opacity_named_numbers_become_percentages() {
    let f = analyze_property("layerOpacity", &json!(0.7)).unwrap();
    assert_eq!(f.kind, FieldKind::Percentage);
    assert_eq!(f.min, Some(0.0));
    assert_eq!(f.max, Some(1.0));

    let f = analyze_property("underLayerSectionPercentage", &json!(0.5)).unwrap();
    assert_eq!(f.kind, FieldKind::Percentage);
}

#[test]
fn plain_numbers_get_heuristic_bounds_and_step() {
    let f = analyze_property("radius", &json!(40)).unwrap();
    assert_eq!(f.kind, FieldKind::Number);
    assert_eq!(f.min, Some(0.0));
    assert_eq!(f.max, Some(80.0));
    assert_eq!(f.step, Some(1.0));

    let f = analyze_property("glowIntensity", &json!(0.4)).unwrap();
    assert_eq!(f.step, Some(0.001));
}

#[test]
fn arrays_detect_their_element_kind() {
    let f = analyze_property("seeds", &json!([1, 2, 3])).unwrap();
    assert_eq!(f.kind, FieldKind::Array);
    assert_eq!(f.array_type, Some(ArrayElementKind::Number));

    let f = analyze_property("tags", &json!(["a", "b"])).unwrap();
    assert_eq!(f.array_type, Some(ArrayElementKind::String));

    let f = analyze_property("mixed", &json!([1, "b"])).unwrap();
    assert_eq!(f.array_type, Some(ArrayElementKind::Mixed));
}

#[test]
fn nulls_and_placeholders_are_skipped() {
    assert!(analyze_property("gone", &json!(null)).is_none());
    assert!(analyze_property("callback", &json!("[Function]")).is_none());
}

#[test]
fn degraded_defaults_are_stored_canonically() {
    let f = analyze_property("fadeRange", &json!({"min": 0.2, "max": 0.8})).unwrap();
    assert_eq!(f.kind, FieldKind::PercentageRange);
    assert_eq!(
        f.default,
        json!({
            "lower": {"percent": 0.2, "side": "shortest"},
            "upper": {"percent": 0.8, "side": "longest"},
        })
    );
}

#[test]
fn non_object_roots_degrade_to_empty_schema() {
    assert!(schema_from_default(&json!(42)).is_empty());
    assert!(schema_from_default(&json!([1, 2])).is_empty());
}

#[derive(serde::Serialize)]
struct FlareConfig {
    invert_layers: bool,
    layer_opacity: f64,
    #[serde(rename = "flareOffset")]
    flare_offset: crate::value::model::Range,
    center: crate::value::model::Point2D,
    sparsity_factor: Vec<u32>,
}

impl Default for FlareConfig {
    fn default() -> Self {
        Self {
            invert_layers: false,
            layer_opacity: 0.7,
            flare_offset: crate::value::model::Range::new(0.01, 0.06),
            center: crate::value::model::Point2D::new(10.0, 20.0),
            sparsity_factor: vec![1, 2, 3],
        }
    }
}

#[test]
fn typed_defaults_introspect_in_declaration_order() {
    let schema = generate_schema::<FlareConfig>();
    let kinds: Vec<FieldKind> = schema.fields.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Boolean,
            FieldKind::Percentage,
            FieldKind::Range,
            FieldKind::Point2d,
            FieldKind::Array,
        ]
    );
    assert_eq!(schema.fields[2].name, "flareOffset");
}
