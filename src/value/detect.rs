use serde_json::Value;

use crate::value::model::{FieldValue, PositionValue, Range, StepDefinition};
use crate::value::normalize::{normalize_color_selection, normalize_percentage_range};

/// Placeholder left behind when an upstream serializer stringified an object.
pub(crate) fn is_degraded_object_string(v: &Value) -> bool {
    matches!(v.as_str(), Some(s) if s.starts_with("[object "))
}

/// Placeholder left behind when an upstream serializer stringified a function.
pub(crate) fn is_degraded_function_string(v: &Value) -> bool {
    v.as_str() == Some("[Function]")
}

fn number(v: &Value) -> Option<f64> {
    v.as_f64()
}

/// `{lower, upper}` with both bounds plain numbers.
pub(crate) fn is_range_shape(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };
    matches!(
        (obj.get("lower"), obj.get("upper")),
        (Some(l), Some(u)) if number(l).is_some() && number(u).is_some()
    )
}

/// `{x, y}` with both coordinates plain numbers.
pub(crate) fn is_point2d_shape(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };
    matches!(
        (obj.get("x"), obj.get("y")),
        (Some(x), Some(y)) if number(x).is_some() && number(y).is_some()
    )
}

/// Tagged `position` / `arc-path` object.
pub(crate) fn is_position_shape(v: &Value) -> bool {
    let Some(name) = v.get("name").and_then(Value::as_str) else {
        return false;
    };
    matches!(name, "position" | "arc-path")
}

fn is_percent_point_shape(v: &Value) -> bool {
    v.get("percent").and_then(Value::as_f64).is_some()
}

/// Any of the encodings [`normalize_percentage_range`] accepts:
/// canonical `{lower: {percent, side}, upper: {percent, side}}`, legacy
/// `{min, max}` fractions, or endpoints degraded to `[object Object]`
/// placeholder strings. Plain-number `{lower, upper}` never reaches this
/// predicate because the range shape matches first.
pub(crate) fn is_percentage_range_shape(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };

    if let (Some(lower), Some(upper)) = (obj.get("lower"), obj.get("upper")) {
        let endpoint_like = |e: &Value| is_percent_point_shape(e) || is_degraded_object_string(e);
        return endpoint_like(lower) && endpoint_like(upper);
    }

    if let (Some(min), Some(max)) = (
        obj.get("min").and_then(Value::as_f64),
        obj.get("max").and_then(Value::as_f64),
    ) {
        return (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max);
    }

    false
}

/// `{bottom, top}` with both halves range-shaped.
pub(crate) fn is_dynamic_range_shape(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };
    matches!(
        (obj.get("bottom"), obj.get("top")),
        (Some(b), Some(t)) if is_range_shape(b) && is_range_shape(t)
    )
}

/// Non-empty array where every element parses as a step definition.
pub(crate) fn is_multi_step_shape(v: &Value) -> bool {
    let Some(items) = v.as_array() else {
        return false;
    };
    !items.is_empty()
        && items.iter().all(|item| {
            item.get("minPercentage").and_then(Value::as_f64).is_some()
                && item.get("maxPercentage").and_then(Value::as_f64).is_some()
        })
}

/// Lift a raw config value into its structured [`FieldValue`].
///
/// The precedence order is load-bearing and must not be reordered: shapes
/// overlap, and the first match wins. Nulls and degraded function
/// placeholders produce `None` (the property is not editable).
///
/// Object shapes are tested in this order: range, tagged position, point,
/// color selection, percentage range, dynamic range, then generic object.
pub fn classify_value(raw: &Value) -> Option<FieldValue> {
    match raw {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Boolean(*b)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(_) if is_degraded_function_string(raw) => None,
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Array(items) => {
            if is_multi_step_shape(raw) {
                let steps: Vec<StepDefinition> = items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect();
                if steps.len() == items.len() {
                    return Some(FieldValue::MultiStep(steps));
                }
            }
            Some(FieldValue::Array(items.clone()))
        }
        Value::Object(obj) => {
            if is_range_shape(raw) {
                return Some(FieldValue::Range(Range::new(
                    raw["lower"].as_f64().unwrap_or(0.0),
                    raw["upper"].as_f64().unwrap_or(0.0),
                )));
            }
            if is_position_shape(raw) {
                if let Ok(p) = serde_json::from_value::<PositionValue>(raw.clone()) {
                    return Some(FieldValue::Position(p));
                }
            }
            if is_point2d_shape(raw) {
                return Some(FieldValue::Point2d(crate::value::model::Point2D::new(
                    raw["x"].as_f64().unwrap_or(0.0),
                    raw["y"].as_f64().unwrap_or(0.0),
                )));
            }
            if obj.contains_key("selectionType") {
                return Some(FieldValue::Color(normalize_color_selection(raw)));
            }
            if is_percentage_range_shape(raw) {
                return Some(FieldValue::PercentageRange(normalize_percentage_range(
                    raw, "",
                )));
            }
            if is_dynamic_range_shape(raw) {
                return Some(FieldValue::DynamicRange(
                    crate::value::normalize::normalize_dynamic_range(raw),
                ));
            }
            Some(FieldValue::Object(obj.clone()))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/detect.rs"]
mod tests;
