use serde_json::Value;

use crate::edit::commit::ChangeEvent;
use crate::edit::state::EditBuffer;
use crate::schema::field::FieldDescriptor;

/// Headless model for a free-text field, also the fallback editor for
/// unknown field kinds.
#[derive(Clone, Debug)]
pub struct TextEdit {
    field: String,
    buffer: EditBuffer,
}

impl TextEdit {
    /// Build from the current config value, falling back to the field
    /// default, then empty.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let text = current
            .and_then(Value::as_str)
            .or_else(|| field.default.as_str())
            .unwrap_or_default();
        Self {
            field: field.name.clone(),
            buffer: EditBuffer::new(text),
        }
    }

    /// Text to render.
    pub fn display(&self) -> &str {
        self.buffer.display()
    }

    /// Record a keystroke.
    pub fn input(&mut self, text: &str) {
        self.buffer.input(text);
    }

    /// Leave the field. Any text is valid, including empty.
    pub fn blur(&mut self) -> Option<ChangeEvent> {
        let committed = self.buffer.blur(|b| Some(b.to_string()))?;
        Some(ChangeEvent::new(&self.field, Value::String(committed)))
    }
}

/// Headless model for a raw JSON textarea.
///
/// Invalid JSON is a display-only state (red border territory): it never
/// commits and reverts to the last committed document on blur.
#[derive(Clone, Debug)]
pub struct JsonEdit {
    field: String,
    buffer: EditBuffer,
}

impl JsonEdit {
    /// Build from the current config value, falling back to the field
    /// default.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let value = current.unwrap_or(&field.default);
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
        Self {
            field: field.name.clone(),
            buffer: EditBuffer::new(text),
        }
    }

    /// Text to render.
    pub fn display(&self) -> &str {
        self.buffer.display()
    }

    /// Whether the current buffer parses.
    pub fn is_valid(&self) -> bool {
        serde_json::from_str::<Value>(self.buffer.display()).is_ok()
    }

    /// Record a keystroke.
    pub fn input(&mut self, text: &str) {
        self.buffer.input(text);
    }

    /// Leave the field: parseable JSON commits the parsed value, anything
    /// else reverts the display.
    pub fn blur(&mut self) -> Option<ChangeEvent> {
        let mut parsed = None;
        self.buffer.blur(|buffer| {
            let value: Value = serde_json::from_str(buffer).ok()?;
            let pretty = serde_json::to_string_pretty(&value).ok()?;
            parsed = Some(value);
            Some(pretty)
        })?;
        Some(ChangeEvent::new(&self.field, parsed?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/text.rs"]
mod tests;
