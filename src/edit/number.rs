use serde_json::{Value, json};

use crate::edit::commit::ChangeEvent;
use crate::edit::state::EditBuffer;
use crate::foundation::number::{format_for_display, step_for_value};
use crate::schema::field::FieldDescriptor;

/// Headless model for a numeric field.
///
/// The display buffer absorbs intermediate invalid entry; commits carry the
/// parsed number. Slider edits bypass the buffer and commit directly.
#[derive(Clone, Debug)]
pub struct NumberEdit {
    field: String,
    value: f64,
    buffer: EditBuffer,
}

impl NumberEdit {
    /// Build from the current config value, falling back to the field
    /// default, then zero.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let value = current
            .and_then(Value::as_f64)
            .or_else(|| field.default.as_f64())
            .unwrap_or(0.0);
        Self {
            field: field.name.clone(),
            value,
            buffer: EditBuffer::new(format_for_display(value)),
        }
    }

    /// Committed numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text to render in the field.
    pub fn display(&self) -> &str {
        self.buffer.display()
    }

    /// Entry step for the current value.
    pub fn step(&self) -> f64 {
        step_for_value(self.value)
    }

    /// Record a keystroke; display updates synchronously, nothing commits.
    pub fn input(&mut self, text: &str) {
        self.buffer.input(text);
    }

    /// Adopt an external value change (ignored mid-edit).
    pub fn sync(&mut self, value: f64) {
        self.buffer.sync(format_for_display(value));
        if !matches!(self.buffer.state(), crate::edit::state::EditState::Editing) {
            self.value = value;
        }
    }

    /// Leave the field. A parseable buffer commits; an empty or invalid
    /// buffer reverts the display to the last committed value.
    pub fn blur(&mut self) -> Option<ChangeEvent> {
        let mut parsed = None;
        let committed = self.buffer.blur(|buffer| {
            let n: f64 = buffer.trim().parse().ok().filter(|n: &f64| n.is_finite())?;
            parsed = Some(n);
            Some(format_for_display(n))
        });
        committed?;
        let n = parsed?;
        self.value = n;
        Some(ChangeEvent::new(&self.field, json!(n)))
    }

    /// Commit a slider position directly.
    pub fn slider_input(&mut self, value: f64) -> ChangeEvent {
        self.value = value;
        self.buffer = EditBuffer::new(format_for_display(value));
        ChangeEvent::new(&self.field, json!(value))
    }

    /// Host applied the last commit.
    pub fn settle(&mut self) {
        self.buffer.settle();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/number.rs"]
mod tests;
