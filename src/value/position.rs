//! Conversions among the three position representations.
//!
//! The engine understands tagged `position` and `arc-path` objects; older
//! project files carry bare `{x, y}` points. Conversions are value-level so
//! unknown extra keys (`__type`, metadata markers) survive the round trip.

use serde_json::{Value, json};

use crate::value::detect::is_point2d_shape;
use crate::value::model::{
    Point2D, default_arc_direction, default_arc_end_angle, default_arc_radius,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which of the three position representations a raw value is in.
pub enum PositionType {
    /// Bare `{x, y}` from legacy project files.
    LegacyPoint,
    /// Tagged `{name: "position", x, y}`.
    Position,
    /// Tagged `{name: "arc-path", ...}`.
    ArcPath,
}

/// Classify a raw value as one of the position representations.
pub fn position_type(raw: &Value) -> Option<PositionType> {
    match raw.get("name").and_then(Value::as_str) {
        Some("position") => Some(PositionType::Position),
        Some("arc-path") => Some(PositionType::ArcPath),
        Some(_) => None,
        None if is_point2d_shape(raw) => Some(PositionType::LegacyPoint),
        None => None,
    }
}

/// True when [`position_type`] recognizes the value.
pub fn is_position_value(raw: &Value) -> bool {
    position_type(raw).is_some()
}

fn fill_number(obj: &mut serde_json::Map<String, Value>, key: &str, default: f64) {
    let valid = obj.get(key).and_then(Value::as_f64).is_some();
    if !valid {
        obj.insert(key.to_string(), json!(default));
    }
}

/// Convert a position value into the engine's serialized form.
///
/// Legacy points become tagged `position` objects; tagged values pass
/// through with defaults filled for missing numeric fields. Unknown keys
/// are preserved, unrecognized values pass through untouched.
pub fn serialize(raw: &Value) -> Value {
    let Some(kind) = position_type(raw) else {
        return raw.clone();
    };

    let mut obj = raw.as_object().cloned().unwrap_or_default();
    match kind {
        PositionType::LegacyPoint => {
            obj.insert("name".to_string(), json!("position"));
            fill_number(&mut obj, "x", 0.0);
            fill_number(&mut obj, "y", 0.0);
        }
        PositionType::Position => {
            fill_number(&mut obj, "x", 0.0);
            fill_number(&mut obj, "y", 0.0);
        }
        PositionType::ArcPath => {
            if !obj.get("center").map(is_point2d_shape).unwrap_or(false) {
                obj.insert("center".to_string(), json!({"x": 0.0, "y": 0.0}));
            }
            fill_number(&mut obj, "radius", default_arc_radius());
            fill_number(&mut obj, "startAngle", 0.0);
            fill_number(&mut obj, "endAngle", default_arc_end_angle());
            fill_number(&mut obj, "direction", f64::from(default_arc_direction()));
        }
    }
    Value::Object(obj)
}

/// Convert an engine-side position value into its UI form.
///
/// The UI edits the tagged representations directly, so this only lifts
/// legacy bare points into tagged `position` objects; everything else
/// passes through.
pub fn deserialize(raw: &Value) -> Value {
    match position_type(raw) {
        Some(PositionType::LegacyPoint) => {
            let mut obj = raw.as_object().cloned().unwrap_or_default();
            obj.insert("name".to_string(), json!("position"));
            Value::Object(obj)
        }
        _ => raw.clone(),
    }
}

/// Collapse any position representation to a single preview point.
///
/// Arcs collapse to the point on the circle at `startAngle` (the arc's
/// start position), with coordinates floored to whole pixels.
pub fn to_point2d(raw: &Value) -> Option<Point2D> {
    match position_type(raw)? {
        PositionType::LegacyPoint | PositionType::Position => Some(Point2D::new(
            raw.get("x").and_then(Value::as_f64).unwrap_or(0.0),
            raw.get("y").and_then(Value::as_f64).unwrap_or(0.0),
        )),
        PositionType::ArcPath => {
            let center = raw.get("center");
            let cx = center
                .and_then(|c| c.get("x"))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            let cy = center
                .and_then(|c| c.get("y"))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            let radius = raw
                .get("radius")
                .and_then(Value::as_f64)
                .unwrap_or_else(default_arc_radius);
            let theta = raw
                .get("startAngle")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                .to_radians();
            Some(Point2D::new(
                (cx + radius * theta.cos()).floor(),
                (cy + radius * theta.sin()).floor(),
            ))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/position.rs"]
mod tests;
