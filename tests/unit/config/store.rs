use super::*;
use crate::schema::field::FieldDescriptor;
use serde_json::json;

fn schema() -> Schema {
    Schema {
        fields: vec![
            FieldDescriptor::new("radius", FieldKind::Number, json!(40)),
            FieldDescriptor::new("seeds", FieldKind::Array, json!([1, 2])),
            FieldDescriptor::new(
                "path",
                FieldKind::Position,
                json!({"name": "position", "x": 0, "y": 0}),
            ),
            FieldDescriptor::new("center", FieldKind::Point2d, json!({"x": 5, "y": 5})),
        ],
    }
}

fn overrides(v: serde_json::Value) -> ConfigObject {
    v.as_object().cloned().expect("object literal")
}

#[test]
fn construction_merges_defaults_with_overrides() {
    let store = ConfigStore::new(schema(), &overrides(json!({"radius": 60})));
    assert_eq!(store.effective_value("radius"), json!(60));
    assert_eq!(store.effective_value("seeds"), json!([1, 2]));
    assert_eq!(store.effective_value("missing"), json!(null));
}

#[test]
fn configs_from_shared_defaults_do_not_alias() {
    let schema = schema();
    let a = ConfigStore::new(schema.clone(), &ConfigObject::new());
    let b = ConfigStore::new(schema, &ConfigObject::new());

    let mut snapshot = a.snapshot();
    if let Some(serde_json::Value::Array(seeds)) = snapshot.get_mut("seeds") {
        seeds.push(json!(99));
    }
    // b's seeds came from the same schema defaults but are independent.
    assert_eq!(b.effective_value("seeds"), json!([1, 2]));
}

#[tokio::test]
async fn apply_routes_through_the_queue() {
    let store = ConfigStore::new(schema(), &ConfigObject::new());
    store
        .apply(ChangeEvent::new("radius", json!(75)))
        .await
        .expect("applies");
    assert_eq!(store.effective_value("radius"), json!(75));
}

#[tokio::test]
async fn rapid_same_field_edits_coalesce_to_the_last() {
    let store = ConfigStore::new(schema(), &ConfigObject::new());
    let first = store.apply(ChangeEvent::new("radius", json!(10)));
    let second = store.apply(ChangeEvent::new("radius", json!(20)));
    let third = store.apply(ChangeEvent::new("radius", json!(30)));

    // First may have started already; the middle write is the one that can
    // never survive.
    let _ = first.await;
    assert!(second.await.is_err());
    third.await.expect("last write wins");

    store
        .flush(Duration::from_millis(200))
        .await
        .expect("drains");
    assert_eq!(store.effective_value("radius"), json!(30));
}

#[tokio::test]
async fn engine_serialization_transforms_position_fields_only() {
    let store = ConfigStore::new(
        schema(),
        &overrides(json!({"path": {"x": 3, "y": 4}, "center": {"x": 7, "y": 8}})),
    );
    store
        .flush(Duration::from_millis(100))
        .await
        .expect("idle");

    let wire = store.serialize_for_engine();
    // The position field is lifted to the tagged wire form...
    assert_eq!(
        wire["path"],
        json!({"x": 3, "y": 4, "name": "position"})
    );
    // ...while the point2d field stays a bare point.
    assert_eq!(wire["center"], json!({"x": 7, "y": 8}));
}

#[test]
fn tagged_values_serialize_even_without_a_schema_entry() {
    let store = ConfigStore::new(
        schema(),
        &overrides(json!({"extra": {"name": "arc-path", "center": {"x": 1, "y": 2}}})),
    );
    let wire = store.serialize_for_engine();
    assert_eq!(wire["extra"]["radius"], json!(100.0));
    assert_eq!(wire["extra"]["endAngle"], json!(360.0));
}
