use serde_json::{Value, json};

use crate::edit::commit::ChangeEvent;
use crate::schema::field::FieldDescriptor;

/// Headless model for a boolean flag.
///
/// No buffer, no debounce: a toggle is atomic and commits immediately.
#[derive(Clone, Debug)]
pub struct BooleanEdit {
    field: String,
    value: bool,
}

impl BooleanEdit {
    /// Build from the current config value, falling back to the field
    /// default, then `false`.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let value = current
            .and_then(Value::as_bool)
            .or_else(|| field.default.as_bool())
            .unwrap_or(false);
        Self {
            field: field.name.clone(),
            value,
        }
    }

    /// Current flag.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Commit the opposite state.
    pub fn toggle(&mut self) -> ChangeEvent {
        self.set(!self.value)
    }

    /// Commit an explicit state.
    pub fn set(&mut self, value: bool) -> ChangeEvent {
        self.value = value;
        ChangeEvent::new(&self.field, json!(value))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/toggle.rs"]
mod tests;
