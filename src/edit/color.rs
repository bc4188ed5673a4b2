use serde_json::{Value, json};

use crate::edit::commit::{ChangeEvent, spread_merge};
use crate::edit::state::EditBuffer;
use crate::schema::field::FieldDescriptor;
use crate::value::color::is_valid_hex_color;
use crate::value::model::{ColorMode, ColorSelection};
use crate::value::normalize::normalize_color_selection;

/// Headless model for a color field.
///
/// Three mutually exclusive modes; only `color` mode exposes the hex value.
/// Invalid typed hex stays in the display buffer without committing and
/// reverts to the last valid hex on blur.
#[derive(Clone, Debug)]
pub struct ColorPickerEdit {
    field: String,
    raw: Value,
    selection: ColorSelection,
    hex: EditBuffer,
}

impl ColorPickerEdit {
    /// Build from the current config value, falling back to the field
    /// default, then the bucket default.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let raw = current.unwrap_or(&field.default).clone();
        let selection = normalize_color_selection(&raw);
        let hex = EditBuffer::new(selection.color_value.clone().unwrap_or_default());
        Self {
            field: field.name.clone(),
            raw,
            selection,
            hex,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &ColorSelection {
        &self.selection
    }

    /// Hex text to render (buffer while editing).
    pub fn hex_display(&self) -> &str {
        self.hex.display()
    }

    /// Whether the current hex buffer would commit.
    pub fn hex_is_valid(&self) -> bool {
        is_valid_hex_color(self.hex.display())
    }

    fn commit(&mut self) -> ChangeEvent {
        let patch = serde_json::to_value(&self.selection).unwrap_or(Value::Null);
        self.raw = spread_merge(Some(&self.raw), patch);
        ChangeEvent::new(&self.field, self.raw.clone())
    }

    /// Commit a mode switch. The hex value is preserved across switches so
    /// returning to `color` mode restores it.
    pub fn set_mode(&mut self, mode: ColorMode) -> ChangeEvent {
        self.selection.selection_type = mode;
        if mode == ColorMode::Color && self.selection.color_value.is_none() {
            self.selection.color_value = Some("#000000".to_string());
            self.hex = EditBuffer::new("#000000");
        }
        self.commit()
    }

    /// Record a hex keystroke; nothing commits until the value validates.
    pub fn hex_input(&mut self, text: &str) {
        self.hex.input(text);
    }

    /// Commit mid-edit if the buffer is currently a valid hex (debounced
    /// live preview path); invalid buffers commit nothing.
    pub fn hex_commit_if_valid(&mut self) -> Option<ChangeEvent> {
        let display = self.hex.display().to_string();
        if !is_valid_hex_color(&display) {
            return None;
        }
        self.selection.color_value = Some(display);
        Some(self.commit())
    }

    /// Leave the hex field: valid commits, invalid reverts to the last
    /// valid hex.
    pub fn hex_blur(&mut self) -> Option<ChangeEvent> {
        let committed = self
            .hex
            .blur(|buffer| is_valid_hex_color(buffer).then(|| buffer.to_string()))?;
        self.selection.color_value = Some(committed);
        Some(self.commit())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/color.rs"]
mod tests;
