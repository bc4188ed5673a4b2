use serde_json::{Value, json};

use crate::edit::commit::ChangeEvent;
use crate::foundation::error::{ConfigError, ConfigResult};
use crate::schema::field::{ArrayElementKind, FieldDescriptor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Per-item type badge for mixed arrays.
pub enum DetectedItemKind {
    /// Renders and edits as a number.
    Number,
    /// Renders and edits as a string.
    String,
}

/// Auto-detect an item's kind: number when it is (or parses as) a finite
/// float, string otherwise. Only consulted for `mixed` arrays; a declared
/// element kind is authoritative.
pub fn detect_item_kind(item: &Value) -> DetectedItemKind {
    match item {
        Value::Number(_) => DetectedItemKind::Number,
        Value::String(s) if s.trim().parse::<f64>().map(|n| n.is_finite()).unwrap_or(false) => {
            DetectedItemKind::Number
        }
        _ => DetectedItemKind::String,
    }
}

fn parse_token(token: &str, kind: ArrayElementKind) -> ConfigResult<Value> {
    let token = token.trim();
    match kind {
        ArrayElementKind::Number => match token.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(json!(n)),
            _ => Err(ConfigError::import(format!(
                "'{token}' is not a number"
            ))),
        },
        ArrayElementKind::String => Ok(json!(token)),
        ArrayElementKind::Mixed => match token.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(json!(n)),
            _ => Ok(json!(token)),
        },
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Headless model for an array field: reorder, bulk add, duplicate,
/// clear, and two-stage import.
///
/// Bulk operations are atomic: one bad token fails the whole operation
/// rather than committing a partial array.
#[derive(Clone, Debug)]
pub struct ArrayEdit {
    field: String,
    items: Vec<Value>,
    element_kind: ArrayElementKind,
}

impl ArrayEdit {
    /// Build from the current config value, falling back to the field
    /// default, then empty.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let items = current
            .and_then(Value::as_array)
            .or_else(|| field.default.as_array())
            .cloned()
            .unwrap_or_default();
        Self {
            field: field.name.clone(),
            items,
            element_kind: field.array_type.unwrap_or_default(),
        }
    }

    /// Current items.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Declared element kind driving parse policy.
    pub fn element_kind(&self) -> ArrayElementKind {
        self.element_kind
    }

    fn commit(&self) -> ChangeEvent {
        ChangeEvent::new(&self.field, Value::Array(self.items.clone()))
    }

    /// Append a single entry parsed per the declared element kind.
    pub fn push(&mut self, token: &str) -> ConfigResult<ChangeEvent> {
        let value = parse_token(token, self.element_kind)?;
        self.items.push(value);
        Ok(self.commit())
    }

    /// Remove the item at `index`.
    pub fn remove(&mut self, index: usize) -> Option<ChangeEvent> {
        if index >= self.items.len() {
            return None;
        }
        self.items.remove(index);
        Some(self.commit())
    }

    /// Duplicate the item at `index`, inserting the copy right after it.
    pub fn duplicate(&mut self, index: usize) -> Option<ChangeEvent> {
        let item = self.items.get(index)?.clone();
        self.items.insert(index + 1, item);
        Some(self.commit())
    }

    /// Remove everything.
    pub fn clear(&mut self) -> ChangeEvent {
        self.items.clear();
        self.commit()
    }

    /// Move an item: remove at `from`, reinsert at `to` adjusted for the
    /// shift the removal causes. This is the drag/drop reorder primitive.
    pub fn move_item(&mut self, from: usize, to: usize) -> Option<ChangeEvent> {
        if from >= self.items.len() || to > self.items.len() {
            return None;
        }
        let item = self.items.remove(from);
        let to = if to > from { to - 1 } else { to };
        self.items.insert(to, item);
        Some(self.commit())
    }

    /// Add several entries at once, split on commas and newlines.
    ///
    /// Atomic per the declared element kind: any unparseable token fails
    /// the whole add.
    pub fn bulk_add(&mut self, text: &str) -> ConfigResult<ChangeEvent> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(ConfigError::import("No valid values found"));
        }
        let parsed = tokens
            .iter()
            .map(|t| parse_token(t, self.element_kind))
            .collect::<ConfigResult<Vec<Value>>>()?;
        self.items.extend(parsed);
        Ok(self.commit())
    }

    /// Replace the array from pasted text.
    ///
    /// Strategy one is strict JSON: a JSON array is taken element-wise
    /// (re-parsed per the declared element kind), while valid JSON that is
    /// not an array is a hard error. Non-JSON input falls back to
    /// comma/newline tokenization.
    pub fn import(&mut self, text: &str) -> ConfigResult<ChangeEvent> {
        let next = match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Array(items)) => items
                .into_iter()
                .map(|item| self.reparse_imported(item))
                .collect::<ConfigResult<Vec<Value>>>()?,
            Ok(_) => {
                return Err(ConfigError::import("Imported JSON must be an array"));
            }
            Err(_) => {
                let tokens = tokenize(text);
                if tokens.is_empty() {
                    return Err(ConfigError::import("No valid values found"));
                }
                tokens
                    .iter()
                    .map(|t| parse_token(t, self.element_kind))
                    .collect::<ConfigResult<Vec<Value>>>()?
            }
        };

        self.items = next;
        Ok(self.commit())
    }

    fn reparse_imported(&self, item: Value) -> ConfigResult<Value> {
        match self.element_kind {
            ArrayElementKind::Number => match &item {
                Value::Number(_) => Ok(item),
                Value::String(s) => parse_token(s, ArrayElementKind::Number),
                other => Err(ConfigError::import(format!(
                    "'{other}' is not a number"
                ))),
            },
            ArrayElementKind::String => match item {
                Value::String(_) => Ok(item),
                other => Ok(json!(other.to_string())),
            },
            ArrayElementKind::Mixed => Ok(item),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/array.rs"]
mod tests;
