use serde_json::{Value, json};

use crate::edit::commit::ChangeEvent;
use crate::edit::state::EditBuffer;
use crate::schema::field::FieldDescriptor;
use crate::value::model::{PercentSide, PercentagePoint, PercentageRange};
use crate::value::normalize::normalize_percentage_range;

/// Headless model for a single 0–1 fraction displayed as 0–100.
#[derive(Clone, Debug)]
pub struct PercentageEdit {
    field: String,
    fraction: f64,
    buffer: EditBuffer,
}

fn display_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{}", percent.round() as i64)
    } else {
        format!("{percent:.1}")
    }
}

impl PercentageEdit {
    /// Build from the current config value, falling back to the field
    /// default, then zero.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let fraction = current
            .and_then(Value::as_f64)
            .or_else(|| field.default.as_f64())
            .unwrap_or(0.0);
        Self {
            field: field.name.clone(),
            fraction,
            buffer: EditBuffer::new(display_percent(fraction)),
        }
    }

    /// Stored fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Displayed 0–100 text.
    pub fn display(&self) -> &str {
        self.buffer.display()
    }

    /// Record a keystroke of 0–100 text.
    pub fn input(&mut self, text: &str) {
        self.buffer.input(text);
    }

    /// Leave the field; a valid 0–100 entry commits the 0–1 fraction.
    pub fn blur(&mut self) -> Option<ChangeEvent> {
        let mut parsed = None;
        self.buffer.blur(|buffer| {
            let percent: f64 = buffer.trim().parse().ok().filter(|p: &f64| p.is_finite())?;
            let fraction = (percent / 100.0).clamp(0.0, 1.0);
            parsed = Some(fraction);
            Some(display_percent(fraction))
        })?;
        let fraction = parsed?;
        self.fraction = fraction;
        Some(ChangeEvent::new(&self.field, json!(fraction)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which endpoint of a percentage range an edit addresses.
pub enum RangeEndpoint {
    /// The `lower` endpoint.
    Lower,
    /// The `upper` endpoint.
    Upper,
}

/// Headless model for a percentage range with per-endpoint canvas sides.
///
/// Normalizes every legacy encoding up front, then always writes the
/// canonical shape back — replacing the known legacy keys (`min`, `max`)
/// while carrying unknown keys along.
#[derive(Clone, Debug)]
pub struct PercentageRangeEdit {
    field: String,
    raw: Value,
    value: PercentageRange,
}

impl PercentageRangeEdit {
    /// Build from the current config value, falling back to the field
    /// default, then the type default.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let raw = current.unwrap_or(&field.default).clone();
        let value = normalize_percentage_range(&raw, &field.name);
        Self {
            field: field.name.clone(),
            raw,
            value,
        }
    }

    /// Current canonical value.
    pub fn value(&self) -> PercentageRange {
        self.value
    }

    /// Displayed 0–100 percent for an endpoint.
    pub fn display_percent(&self, endpoint: RangeEndpoint) -> f64 {
        self.endpoint(endpoint).percent * 100.0
    }

    fn endpoint(&self, endpoint: RangeEndpoint) -> PercentagePoint {
        match endpoint {
            RangeEndpoint::Lower => self.value.lower,
            RangeEndpoint::Upper => self.value.upper,
        }
    }

    fn endpoint_mut(&mut self, endpoint: RangeEndpoint) -> &mut PercentagePoint {
        match endpoint {
            RangeEndpoint::Lower => &mut self.value.lower,
            RangeEndpoint::Upper => &mut self.value.upper,
        }
    }

    fn commit(&mut self) -> ChangeEvent {
        let mut obj = match &self.raw {
            Value::Object(o) => o.clone(),
            _ => serde_json::Map::new(),
        };
        // The canonical shape supersedes the legacy encoding.
        obj.remove("min");
        obj.remove("max");
        obj.insert(
            "lower".to_string(),
            serde_json::to_value(self.value.lower).unwrap_or(Value::Null),
        );
        obj.insert(
            "upper".to_string(),
            serde_json::to_value(self.value.upper).unwrap_or(Value::Null),
        );
        self.raw = Value::Object(obj);
        ChangeEvent::new(&self.field, self.raw.clone())
    }

    /// Commit a 0–100 entry for an endpoint (stored as a 0–1 fraction).
    pub fn set_percent_display(&mut self, endpoint: RangeEndpoint, percent: f64) -> ChangeEvent {
        self.endpoint_mut(endpoint).percent = (percent / 100.0).clamp(0.0, 1.0);
        self.commit()
    }

    /// Commit the canvas side an endpoint measures against.
    pub fn set_side(&mut self, endpoint: RangeEndpoint, side: PercentSide) -> ChangeEvent {
        self.endpoint_mut(endpoint).side = side;
        self.commit()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/percentage.rs"]
mod tests;
