use serde_json::{Value, json};

use crate::capability::{ProjectState, ResolutionDimensions};
use crate::edit::commit::{ChangeEvent, spread_merge};
use crate::schema::field::FieldDescriptor;
use crate::value::model::{Point2D, PositionValue};
use crate::value::position::{PositionType, deserialize, position_type};

/// Headless model for a tagged `position` / `arc-path` field.
///
/// Switching the sub-schema regenerates a fresh default object for the new
/// type (centered on the canvas when dimensions are known); edits within a
/// type spread-merge over the raw value.
#[derive(Clone, Debug)]
pub struct PositionEdit {
    field: String,
    raw: Value,
    dims: Option<ResolutionDimensions>,
}

impl PositionEdit {
    /// Build from the current config value and the injected project state.
    pub fn new(
        field: &FieldDescriptor,
        current: Option<&Value>,
        project: Option<&dyn ProjectState>,
    ) -> Self {
        let dims = project.map(ProjectState::resolution_dimensions);
        if dims.is_none() {
            tracing::warn!(
                field = %field.name,
                "no project state injected, position editor degraded"
            );
        }

        let source = current.unwrap_or(&field.default);
        let raw = if position_type(source).is_some() {
            deserialize(source)
        } else {
            serde_json::to_value(PositionValue::default()).unwrap_or(Value::Null)
        };
        Self {
            field: field.name.clone(),
            raw,
            dims,
        }
    }

    /// Current representation (always tagged after construction).
    pub fn kind(&self) -> PositionType {
        position_type(&self.raw).unwrap_or(PositionType::Position)
    }

    /// True when the model had to degrade for lack of dimensions.
    pub fn has_dimension_error(&self) -> bool {
        self.dims.is_none()
    }

    /// Raw value being edited.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn canvas_center(&self) -> Point2D {
        match self.dims {
            Some(d) => Point2D::new(
                (f64::from(d.width) / 2.0).round(),
                (f64::from(d.height) / 2.0).round(),
            ),
            None => Point2D::new(0.0, 0.0),
        }
    }

    fn commit(&self) -> ChangeEvent {
        ChangeEvent::new(&self.field, self.raw.clone())
    }

    /// Switch to the plain `position` sub-schema with a fresh default.
    pub fn switch_to_position(&mut self) -> ChangeEvent {
        let center = self.canvas_center();
        let fresh = PositionValue::Point {
            x: center.x,
            y: center.y,
        };
        self.raw = serde_json::to_value(fresh).unwrap_or(Value::Null);
        self.commit()
    }

    /// Switch to the `arc-path` sub-schema with a fresh centered default.
    pub fn switch_to_arc(&mut self) -> ChangeEvent {
        let fresh = PositionValue::default_arc(self.canvas_center());
        self.raw = serde_json::to_value(fresh).unwrap_or(Value::Null);
        self.commit()
    }

    /// Commit one numeric sub-field of the current representation
    /// (`x`/`y` for positions; `radius`, `startAngle`, `endAngle`,
    /// `direction` for arcs), preserving unknown keys.
    pub fn set_field(&mut self, key: &str, value: f64) -> ChangeEvent {
        self.raw = spread_merge(Some(&self.raw), json!({ key: value }));
        self.commit()
    }

    /// Commit one coordinate of an arc's center point.
    pub fn set_center(&mut self, x: f64, y: f64) -> ChangeEvent {
        let prev_center = self.raw.get("center").cloned();
        let center = spread_merge(prev_center.as_ref(), json!({"x": x, "y": y}));
        self.raw = spread_merge(Some(&self.raw), json!({"center": center}));
        self.commit()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/position.rs"]
mod tests;
