//! Defensive repair of legacy and degraded persisted shapes.
//!
//! Old project files carry several historical encodings of the same value,
//! plus placeholders like `"[object Object]"` left behind by a broken
//! upstream serializer. Repair never rejects a value, it only replaces the
//! unusable parts with sane defaults and logs what it did.

use serde_json::Value;

use crate::value::color::is_valid_hex_color;
use crate::value::detect::{is_degraded_object_string, is_range_shape};
use crate::value::model::{
    ColorMode, ColorSelection, DynamicRange, PercentSide, PercentagePoint, PercentageRange, Range,
};

/// Pull a fraction into `[0, 1]`, rescaling obvious percent-scale values.
fn repair_fraction(raw: f64, field_name: &str) -> f64 {
    if !raw.is_finite() {
        tracing::warn!(field = field_name, "non-finite percentage, using 0");
        return 0.0;
    }
    if raw > 1.0 && raw <= 100.0 {
        tracing::warn!(
            field = field_name,
            value = raw,
            "percent-scale value stored where a fraction belongs, rescaling"
        );
        return raw / 100.0;
    }
    raw.clamp(0.0, 1.0)
}

fn parse_side(raw: Option<&Value>) -> Option<PercentSide> {
    match raw?.as_str()? {
        "shortest" => Some(PercentSide::Shortest),
        "longest" => Some(PercentSide::Longest),
        _ => None,
    }
}

fn repair_endpoint(raw: Option<&Value>, fallback: PercentagePoint, field_name: &str) -> PercentagePoint {
    let Some(raw) = raw else {
        return fallback;
    };
    if let Some(p) = raw.as_f64() {
        return PercentagePoint {
            percent: repair_fraction(p, field_name),
            side: fallback.side,
        };
    }
    if let Some(p) = raw.get("percent").and_then(Value::as_f64) {
        return PercentagePoint {
            percent: repair_fraction(p, field_name),
            side: parse_side(raw.get("side")).unwrap_or(fallback.side),
        };
    }
    if is_degraded_object_string(raw) {
        tracing::warn!(
            field = field_name,
            "endpoint degraded to a serialization placeholder, using default"
        );
    }
    fallback
}

/// Normalize any historical percentage-range encoding into the canonical
/// `{lower: {percent, side}, upper: {percent, side}}` shape.
///
/// Accepted inputs: the canonical shape itself, `{lower, upper}` as plain
/// fractions, legacy `{min, max}` fractions, endpoints degraded to
/// placeholder strings, and anything else (which maps whole to the default).
/// Repaired endpoints default to `shortest` on the lower side and `longest`
/// on the upper, the most common authored shape.
pub fn normalize_percentage_range(raw: &Value, field_name: &str) -> PercentageRange {
    let defaults = PercentageRange::default();
    let Some(obj) = raw.as_object() else {
        if !raw.is_null() {
            tracing::warn!(
                field = field_name,
                "percentage range is not an object, using default"
            );
        }
        return defaults;
    };

    // Legacy {min, max} maps onto {lower, upper}.
    let (lower_raw, upper_raw) = if obj.contains_key("lower") || obj.contains_key("upper") {
        (obj.get("lower"), obj.get("upper"))
    } else {
        (obj.get("min"), obj.get("max"))
    };

    PercentageRange {
        lower: repair_endpoint(lower_raw, defaults.lower, field_name),
        upper: repair_endpoint(upper_raw, defaults.upper, field_name),
    }
}

/// Normalize a raw value into a [`Range`], keeping bounds unordered.
pub fn normalize_range(raw: &Value) -> Range {
    if is_range_shape(raw) {
        return Range::new(
            raw["lower"].as_f64().unwrap_or(0.0),
            raw["upper"].as_f64().unwrap_or(0.0),
        );
    }
    if !raw.is_null() {
        tracing::warn!("range value has no numeric bounds, using default");
    }
    Range::default()
}

/// Normalize a raw value into a [`DynamicRange`], repairing each half.
pub fn normalize_dynamic_range(raw: &Value) -> DynamicRange {
    let defaults = DynamicRange::default();
    let Some(obj) = raw.as_object() else {
        return defaults;
    };
    DynamicRange {
        bottom: obj
            .get("bottom")
            .map(normalize_range)
            .unwrap_or(defaults.bottom),
        top: obj.get("top").map(normalize_range).unwrap_or(defaults.top),
    }
}

/// Normalize a raw value into a [`ColorSelection`].
///
/// Unknown modes fall back to the color bucket; an explicit `color` mode
/// with a missing or invalid hex gets an opaque black so the selection
/// stays renderable.
pub fn normalize_color_selection(raw: &Value) -> ColorSelection {
    let mode = match raw.get("selectionType").and_then(Value::as_str) {
        Some("color-bucket") => ColorMode::ColorBucket,
        Some("neutral-bucket") => ColorMode::NeutralBucket,
        Some("color") => ColorMode::Color,
        other => {
            if let Some(other) = other {
                tracing::warn!(mode = other, "unknown color selection mode, using bucket");
            }
            ColorMode::ColorBucket
        }
    };

    let color_value = raw
        .get("colorValue")
        .and_then(Value::as_str)
        .filter(|s| is_valid_hex_color(s))
        .map(str::to_string);

    let color_value = match (mode, color_value) {
        (ColorMode::Color, None) => {
            tracing::warn!("color mode without a valid hex value, using #000000");
            Some("#000000".to_string())
        }
        (_, v) => v,
    };

    ColorSelection {
        selection_type: mode,
        color_value,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/normalize.rs"]
mod tests;
