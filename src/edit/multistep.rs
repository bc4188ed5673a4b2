use serde_json::Value;

use crate::edit::commit::ChangeEvent;
use crate::schema::field::FieldDescriptor;
use crate::value::model::{Range, StepDefinition};

/// Headless model for a multi-step timeline definition.
///
/// Steps partition a 0–100 timeline. Authoring is permissive (gaps and
/// overlaps can exist mid-edit); `normalize_to_100` redistributes the
/// spans so they tile exactly.
#[derive(Clone, Debug)]
pub struct MultiStepEdit {
    field: String,
    steps: Vec<StepDefinition>,
}

impl MultiStepEdit {
    /// Build from the current config value, falling back to the field
    /// default, then a single full-span step.
    pub fn new(field: &FieldDescriptor, current: Option<&Value>) -> Self {
        let parse = |v: &Value| -> Option<Vec<StepDefinition>> {
            serde_json::from_value(v.clone()).ok()
        };
        let steps = current
            .and_then(parse)
            .or_else(|| parse(&field.default))
            .unwrap_or_else(|| vec![StepDefinition::default()]);
        Self {
            field: field.name.clone(),
            steps,
        }
    }

    /// Current steps.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    fn commit(&self) -> ChangeEvent {
        let value = serde_json::to_value(&self.steps).unwrap_or(Value::Null);
        ChangeEvent::new(&self.field, value)
    }

    /// Append a step starting where the last one ends.
    pub fn add_step(&mut self, algorithm: impl Into<String>) -> ChangeEvent {
        let start = self.steps.last().map(|s| s.max_percentage).unwrap_or(0.0);
        self.steps.push(StepDefinition {
            min_percentage: start,
            max_percentage: 100.0_f64.max(start),
            algorithm: algorithm.into(),
            ..StepDefinition::default()
        });
        self.commit()
    }

    /// Remove the step at `index`.
    pub fn remove_step(&mut self, index: usize) -> Option<ChangeEvent> {
        if index >= self.steps.len() {
            return None;
        }
        self.steps.remove(index);
        Some(self.commit())
    }

    /// Set the timeline span of one step.
    pub fn set_span(&mut self, index: usize, min: f64, max: f64) -> Option<ChangeEvent> {
        let step = self.steps.get_mut(index)?;
        step.min_percentage = min;
        step.max_percentage = max;
        Some(self.commit())
    }

    /// Set the value range of one step.
    pub fn set_max(&mut self, index: usize, max: Range) -> Option<ChangeEvent> {
        self.steps.get_mut(index)?.max = max;
        Some(self.commit())
    }

    /// Set the repetition range of one step.
    pub fn set_times(&mut self, index: usize, times: Range) -> Option<ChangeEvent> {
        self.steps.get_mut(index)?.times = times;
        Some(self.commit())
    }

    /// Set the algorithm of one step.
    pub fn set_algorithm(&mut self, index: usize, algorithm: impl Into<String>) -> Option<ChangeEvent> {
        self.steps.get_mut(index)?.algorithm = algorithm.into();
        Some(self.commit())
    }

    /// Redistribute spans so the steps tile 0–100 exactly.
    ///
    /// Each step keeps its share of the total duration; the final step's
    /// end is pinned to exactly 100 to absorb rounding.
    pub fn normalize_to_100(&mut self) -> ChangeEvent {
        if self.steps.is_empty() {
            return self.commit();
        }

        let durations: Vec<f64> = self.steps.iter().map(|s| s.duration().max(0.0)).collect();
        let total: f64 = durations.iter().sum();
        let count = self.steps.len();

        let mut cursor = 0.0;
        for (i, step) in self.steps.iter_mut().enumerate() {
            let share = if total > 0.0 {
                durations[i] * 100.0 / total
            } else {
                100.0 / count as f64
            };
            step.min_percentage = cursor;
            cursor += share;
            step.max_percentage = if i == count - 1 { 100.0 } else { cursor };
        }

        self.commit()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/multistep.rs"]
mod tests;
