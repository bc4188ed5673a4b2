//! Pure dispatch from a field descriptor to the input that edits it.

use crate::schema::field::{FieldDescriptor, FieldKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a numeric input is presented.
pub enum NumberStyle {
    /// Plain text field; ranges of 10 or less favor keyboard entry.
    Field,
    /// Slider with an attached field.
    Slider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The concrete input a field descriptor resolves to.
pub enum InputKind {
    /// Checkbox/toggle.
    Boolean,
    /// Numeric entry in the given style.
    Number(NumberStyle),
    /// Percentage entry (0–100 display over 0–1 storage).
    Percentage,
    /// Lower/upper interval editor.
    Range,
    /// Percentage interval editor with side selectors.
    PercentageRange,
    /// Bottom/top pair of interval editors.
    DynamicRange,
    /// X/Y point editor with quick-position presets.
    Point2d,
    /// Position editor with a position/arc-path type switch.
    Position,
    /// Color mode + hex editor.
    ColorPicker,
    /// List editor with reorder/bulk/import operations.
    Array,
    /// Multi-choice selector over declared options.
    MultiSelect,
    /// Timeline step sequence editor.
    MultiStep,
    /// Divisors-of-360 selector.
    SparsityFactor,
    /// Find-value algorithm selector.
    FindValueAlgorithm,
    /// Raw JSON textarea.
    Json,
    /// Free-text entry.
    Text,
    /// Display-only rendering.
    Readonly,
}

fn number_style(field: &FieldDescriptor) -> NumberStyle {
    let min = field.min.unwrap_or(0.0);
    let max = field.max.unwrap_or(100.0);
    if max - min <= 10.0 {
        NumberStyle::Field
    } else {
        NumberStyle::Slider
    }
}

/// Resolve the input for a field descriptor.
///
/// Pure and total. One cross-cutting special case: a `json` field whose
/// default is an array routes to the array editor so array-typed defaults
/// serialized as generic JSON still get rich editing.
pub fn resolve_input(field: &FieldDescriptor) -> InputKind {
    if field.readonly {
        return InputKind::Readonly;
    }
    match field.kind {
        FieldKind::Json if field.default.is_array() => InputKind::Array,
        FieldKind::Boolean => InputKind::Boolean,
        FieldKind::Number => InputKind::Number(number_style(field)),
        FieldKind::Percentage => InputKind::Percentage,
        FieldKind::Range => InputKind::Range,
        FieldKind::PercentageRange => InputKind::PercentageRange,
        FieldKind::DynamicRange => InputKind::DynamicRange,
        FieldKind::Point2d => InputKind::Point2d,
        FieldKind::Position => InputKind::Position,
        FieldKind::ColorPicker => InputKind::ColorPicker,
        FieldKind::Array => InputKind::Array,
        FieldKind::MultiSelect => InputKind::MultiSelect,
        FieldKind::MultiStep => InputKind::MultiStep,
        FieldKind::SparsityFactor => InputKind::SparsityFactor,
        FieldKind::FindValueAlgorithm => InputKind::FindValueAlgorithm,
        FieldKind::Object | FieldKind::Json => InputKind::Json,
        FieldKind::Text => InputKind::Text,
        FieldKind::Readonly => InputKind::Readonly,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/dispatch.rs"]
mod tests;
