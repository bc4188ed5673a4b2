use serde_json::{Value, json};

use crate::capability::AlgorithmCatalog;
use crate::edit::commit::ChangeEvent;
use crate::foundation::divisors::{DIVISORS_OF_360, is_divisor_of_360, remaining_divisors_of_360};
use crate::schema::field::FieldDescriptor;

/// Headless model for a multi-choice selection over declared options.
#[derive(Clone, Debug)]
pub struct MultiSelectEdit {
    field: String,
    options: Vec<String>,
    selected: Vec<String>,
}

impl MultiSelectEdit {
    /// Build from the descriptor's options and the current config value.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let options = field.options.clone().unwrap_or_default();
        let selected = current
            .or(Some(&field.default))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            field: field.name.clone(),
            options,
            selected,
        }
    }

    /// Declared options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected options.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Toggle one option in or out of the selection.
    pub fn toggle(&mut self, option: &str) -> ChangeEvent {
        match self.selected.iter().position(|s| s == option) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(option.to_string()),
        }
        ChangeEvent::new(&self.field, json!(self.selected))
    }
}

/// Headless model for the sparsity-factor selector.
///
/// The domain is exactly the divisors of 360; anything else is refused at
/// the model boundary.
#[derive(Clone, Debug)]
pub struct SparsityFactorEdit {
    field: String,
    selected: Vec<u32>,
}

impl SparsityFactorEdit {
    /// Build from the current config value, keeping only valid divisors.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let selected = current
            .or(Some(&field.default))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_u64)
                    .map(|n| n as u32)
                    .filter(|n| is_divisor_of_360(*n))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            field: field.name.clone(),
            selected,
        }
    }

    /// Currently selected divisors.
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    /// Divisors still available to add.
    pub fn available(&self) -> Vec<u32> {
        remaining_divisors_of_360(&self.selected)
    }

    /// Full selectable domain.
    pub fn domain(&self) -> &'static [u32] {
        &DIVISORS_OF_360
    }

    /// Toggle a divisor; non-divisors are refused.
    pub fn toggle(&mut self, divisor: u32) -> Option<ChangeEvent> {
        if !is_divisor_of_360(divisor) {
            return None;
        }
        match self.selected.iter().position(|d| *d == divisor) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => {
                self.selected.push(divisor);
                self.selected.sort_unstable();
            }
        }
        Some(ChangeEvent::new(&self.field, json!(self.selected)))
    }
}

/// Headless model for the find-value algorithm selector.
///
/// The option list comes from the engine through an [`AlgorithmCatalog`];
/// any failure degrades to the built-in list with a non-blocking warning
/// flag — selection stays usable either way.
#[derive(Clone, Debug)]
pub struct FindValueAlgorithmEdit {
    field: String,
    options: Vec<String>,
    selected: Vec<String>,
    degraded: bool,
}

impl FindValueAlgorithmEdit {
    /// Build by asking the catalog for the algorithm list.
    pub async fn load(
        field: &FieldDescriptor,
        current: Option<&Value>,
        catalog: Option<&dyn AlgorithmCatalog>,
    ) -> Self {
        let (options, degraded) = crate::capability::load_find_value_algorithms(catalog).await;
        let selected = current
            .or(Some(&field.default))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            field: field.name.clone(),
            options,
            selected,
            degraded,
        }
    }

    /// Selectable algorithm names.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected algorithm names.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// True when the list is the built-in fallback; the UI surfaces this
    /// as a warning without blocking selection.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Toggle one algorithm in or out of the selection.
    pub fn toggle(&mut self, name: &str) -> ChangeEvent {
        match self.selected.iter().position(|s| s == name) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(name.to_string()),
        }
        ChangeEvent::new(&self.field, json!(self.selected))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/select.rs"]
mod tests;
