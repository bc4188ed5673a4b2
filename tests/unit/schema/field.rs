use super::*;
use serde_json::json;

#[test]
fn kind_wire_names_are_lowercase_concatenated() {
    for (kind, wire) in [
        (FieldKind::Boolean, "boolean"),
        (FieldKind::Point2d, "point2d"),
        (FieldKind::ColorPicker, "colorpicker"),
        (FieldKind::PercentageRange, "percentagerange"),
        (FieldKind::DynamicRange, "dynamicrange"),
        (FieldKind::SparsityFactor, "sparsityfactor"),
        (FieldKind::FindValueAlgorithm, "findvaluealgorithm"),
        (FieldKind::MultiStep, "multistep"),
        (FieldKind::Readonly, "readonly"),
    ] {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(wire));
        assert_eq!(FieldKind::from_wire(wire), kind);
    }
}

#[test]
fn unknown_wire_kind_falls_back_to_text() {
    assert_eq!(FieldKind::from_wire("hologram"), FieldKind::Text);
    assert_eq!(FieldKind::from_wire(""), FieldKind::Text);
}

#[test]
fn descriptor_derives_label_and_serializes_type_key() {
    let f = FieldDescriptor::new("flareOffset", FieldKind::Range, json!({}));
    assert_eq!(f.label, "Flare Offset");

    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["type"], "range");
    assert_eq!(v["name"], "flareOffset");
    // Unset constraints stay off the wire.
    assert!(v.get("min").is_none());
    assert!(v.get("readonly").is_none());
}

#[test]
fn schema_lookup_by_name() {
    let schema = Schema {
        fields: vec![
            FieldDescriptor::new("a", FieldKind::Number, json!(1)),
            FieldDescriptor::new("b", FieldKind::Text, json!("x")),
        ],
    };
    assert_eq!(schema.len(), 2);
    assert!(!schema.is_empty());
    assert_eq!(schema.field("b").map(|f| f.kind), Some(FieldKind::Text));
    assert!(schema.field("c").is_none());
}
