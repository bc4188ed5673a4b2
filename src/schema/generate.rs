//! Schema generation: introspect a config default into field descriptors.
//!
//! Introspection must never crash the host: every failure path degrades to
//! an empty schema with a warning, and individual properties that match no
//! known shape are skipped rather than rejected.

use serde::Serialize;
use serde_json::Value;

use crate::foundation::number::step_for_value;
use crate::schema::field::{ArrayElementKind, FieldDescriptor, FieldKind, Schema};
use crate::value::detect::classify_value;
use crate::value::model::FieldValue;

/// Derive a display label: a space before each uppercase letter, first
/// character uppercased. `"flareOffset"` becomes `"Flare Offset"`.
pub fn format_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(' ');
        }
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Heuristic slider ceiling for a numeric field.
///
/// Chooses the slider range from the field name and current magnitude; it
/// is a display policy, not a validation bound. Stroke/thickness style
/// fields (and slow speeds) get a deliberately small ceiling so the editor
/// favors direct keyboard entry over a slider.
pub fn guess_max_value(name: &str, value: f64) -> f64 {
    let name = name.to_ascii_lowercase();
    if name.contains("stroke") || name.contains("thickness") {
        return 10.0;
    }
    if name.contains("speed") && value.abs() <= 3.0 {
        return 10.0;
    }
    if name.contains("number") || name.contains("count") {
        return (value * 4.0).max(100.0);
    }
    if name.contains("size") || name.contains("radius") {
        return (value * 2.0).max(50.0);
    }
    if name.contains("time") || name.contains("speed") {
        return (value * 3.0).max(20.0);
    }
    (value * 2.0).max(100.0)
}

fn is_percentage_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.contains("opacity") || name.contains("percentage")
}

fn detect_array_kind(items: &[Value]) -> ArrayElementKind {
    if items.iter().all(Value::is_number) {
        ArrayElementKind::Number
    } else if items.iter().all(Value::is_string) {
        ArrayElementKind::String
    } else {
        ArrayElementKind::Mixed
    }
}

fn canonical_default<T: Serialize>(value: &T, raw: &Value) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| raw.clone())
}

/// Analyze one config property into a field descriptor.
///
/// Returns `None` for values that are not editable (nulls, degraded
/// function placeholders). Structured defaults are stored in canonical
/// (repaired) form so legacy shapes do not leak into new configs.
pub fn analyze_property(name: &str, value: &Value) -> Option<FieldDescriptor> {
    let classified = classify_value(value)?;

    let descriptor = match &classified {
        FieldValue::Boolean(_) => FieldDescriptor::new(name, FieldKind::Boolean, value.clone()),
        FieldValue::Number(n) => {
            if is_percentage_name(name) {
                let mut f = FieldDescriptor::new(name, FieldKind::Percentage, value.clone());
                f.min = Some(0.0);
                f.max = Some(1.0);
                f.step = Some(0.01);
                f
            } else {
                let mut f = FieldDescriptor::new(name, FieldKind::Number, value.clone());
                f.min = Some(0.0);
                f.max = Some(guess_max_value(name, *n));
                f.step = Some(step_for_value(*n));
                f
            }
        }
        FieldValue::Range(r) => {
            let mut f = FieldDescriptor::new(name, FieldKind::Range, value.clone());
            f.min = Some(0.0);
            f.max = Some(guess_max_value(name, r.upper));
            f
        }
        FieldValue::Point2d(_) => FieldDescriptor::new(name, FieldKind::Point2d, value.clone()),
        FieldValue::Position(_) => FieldDescriptor::new(name, FieldKind::Position, value.clone()),
        FieldValue::Color(c) => {
            FieldDescriptor::new(name, FieldKind::ColorPicker, canonical_default(c, value))
        }
        FieldValue::PercentageRange(r) => FieldDescriptor::new(
            name,
            FieldKind::PercentageRange,
            canonical_default(r, value),
        ),
        FieldValue::DynamicRange(r) => {
            FieldDescriptor::new(name, FieldKind::DynamicRange, canonical_default(r, value))
        }
        FieldValue::MultiStep(_) => FieldDescriptor::new(name, FieldKind::MultiStep, value.clone()),
        FieldValue::Array(items) => {
            let mut f = FieldDescriptor::new(name, FieldKind::Array, value.clone());
            f.array_type = Some(detect_array_kind(items));
            f
        }
        FieldValue::Object(_) => FieldDescriptor::new(name, FieldKind::Object, value.clone()),
        FieldValue::Text(_) => FieldDescriptor::new(name, FieldKind::Text, value.clone()),
    };

    Some(descriptor)
}

/// Build a schema from a config default already in JSON form.
///
/// Non-object roots produce an empty schema with a warning; individual
/// un-analyzable properties are skipped.
pub fn schema_from_default(default: &Value) -> Schema {
    let Some(obj) = default.as_object() else {
        tracing::warn!("config default is not an object, schema is empty");
        return Schema::default();
    };

    let fields = obj
        .iter()
        .filter_map(|(name, value)| analyze_property(name, value))
        .collect();
    Schema { fields }
}

/// Introspect a config type into a schema via its `Default` instance.
///
/// The Rust stand-in for instantiating a config class with empty overrides:
/// any engine config that is `Serialize + Default` is introspectable.
/// Serialization failure degrades to an empty schema, never a panic.
#[tracing::instrument(skip_all, fields(ty = std::any::type_name::<T>()))]
pub fn generate_schema<T: Serialize + Default>() -> Schema {
    match serde_json::to_value(T::default()) {
        Ok(default) => schema_from_default(&default),
        Err(err) => {
            tracing::warn!(error = %err, "config default failed to serialize, schema is empty");
            Schema::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/generate.rs"]
mod tests;
