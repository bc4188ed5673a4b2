use serde_json::{Value, json};

use crate::edit::commit::{ChangeEvent, merge_subkey, spread_merge};
use crate::schema::field::FieldDescriptor;
use crate::value::model::{DynamicRange, Range};
use crate::value::normalize::{normalize_dynamic_range, normalize_range};

/// Headless model for a `{lower, upper}` interval.
///
/// Deliberately permissive: `lower <= upper` is not enforced, each bound
/// edits independently.
#[derive(Clone, Debug)]
pub struct RangeEdit {
    field: String,
    raw: Value,
    range: Range,
}

impl RangeEdit {
    /// Build from the current config value, falling back to the field
    /// default, then the type default.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let raw = current.unwrap_or(&field.default).clone();
        let range = normalize_range(&raw);
        Self {
            field: field.name.clone(),
            raw,
            range,
        }
    }

    /// Current interval.
    pub fn range(&self) -> Range {
        self.range
    }

    fn commit(&mut self, key: &str, bound: f64) -> ChangeEvent {
        self.raw = merge_subkey(Some(&self.raw), key, json!(bound));
        ChangeEvent::new(&self.field, self.raw.clone())
    }

    /// Commit a new lower bound.
    pub fn set_lower(&mut self, lower: f64) -> ChangeEvent {
        self.range.lower = lower;
        self.commit("lower", lower)
    }

    /// Commit a new upper bound.
    pub fn set_upper(&mut self, upper: f64) -> ChangeEvent {
        self.range.upper = upper;
        self.commit("upper", upper)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which half of a dynamic range an edit addresses.
pub enum DynamicHalf {
    /// The `bottom` range.
    Bottom,
    /// The `top` range.
    Top,
}

/// Headless model for a `{bottom, top}` pair of intervals.
///
/// As permissive as [`RangeEdit`]: neither intra-range order nor
/// bottom-below-top is enforced.
#[derive(Clone, Debug)]
pub struct DynamicRangeEdit {
    field: String,
    raw: Value,
    value: DynamicRange,
}

impl DynamicRangeEdit {
    /// Build from the current config value, falling back to the field
    /// default, then the type default.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let raw = current.unwrap_or(&field.default).clone();
        let value = normalize_dynamic_range(&raw);
        Self {
            field: field.name.clone(),
            raw,
            value,
        }
    }

    /// Current value.
    pub fn value(&self) -> DynamicRange {
        self.value
    }

    /// Commit one bound of one half, preserving unknown keys at both
    /// nesting levels.
    pub fn set_bound(&mut self, half: DynamicHalf, key_is_upper: bool, bound: f64) -> ChangeEvent {
        let (half_key, range) = match half {
            DynamicHalf::Bottom => ("bottom", &mut self.value.bottom),
            DynamicHalf::Top => ("top", &mut self.value.top),
        };
        let bound_key = if key_is_upper { "upper" } else { "lower" };
        if key_is_upper {
            range.upper = bound;
        } else {
            range.lower = bound;
        }

        let prev_half = self.raw.get(half_key);
        let next_half = merge_subkey(prev_half, bound_key, json!(bound));
        self.raw = spread_merge(Some(&self.raw), json!({ half_key: next_half }));
        ChangeEvent::new(&self.field, self.raw.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/range.rs"]
mod tests;
