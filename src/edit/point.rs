use serde_json::{Value, json};

use crate::capability::{ProjectState, ResolutionDimensions};
use crate::edit::commit::{ChangeEvent, merge_subkey};
use crate::schema::field::FieldDescriptor;
use crate::value::detect::is_point2d_shape;
use crate::value::model::Point2D;

#[derive(Clone, Copy, Debug, PartialEq)]
/// A named canvas-relative preset position.
pub struct QuickPosition {
    /// Display label.
    pub label: &'static str,
    /// Horizontal position as a fraction of canvas width.
    pub rx: f64,
    /// Vertical position as a fraction of canvas height.
    pub ry: f64,
}

impl QuickPosition {
    /// Resolve against concrete canvas dimensions, rounded to pixels.
    pub fn resolve(self, dims: ResolutionDimensions) -> Point2D {
        Point2D::new(
            (self.rx * f64::from(dims.width)).round(),
            (self.ry * f64::from(dims.height)).round(),
        )
    }
}

/// The preset grid: center, rule-of-thirds intersections, golden-ratio
/// intersections, edge midpoints, and corners.
///
/// Preset coordinates are fractions of canvas size, which is why dimension
/// correctness is load-bearing for the point editor.
pub const QUICK_POSITIONS: &[QuickPosition] = &[
    QuickPosition { label: "Center", rx: 0.5, ry: 0.5 },
    QuickPosition { label: "Third Top Left", rx: 1.0 / 3.0, ry: 1.0 / 3.0 },
    QuickPosition { label: "Third Top Right", rx: 2.0 / 3.0, ry: 1.0 / 3.0 },
    QuickPosition { label: "Third Bottom Left", rx: 1.0 / 3.0, ry: 2.0 / 3.0 },
    QuickPosition { label: "Third Bottom Right", rx: 2.0 / 3.0, ry: 2.0 / 3.0 },
    QuickPosition { label: "Golden Top Left", rx: 0.382, ry: 0.382 },
    QuickPosition { label: "Golden Top Right", rx: 0.618, ry: 0.382 },
    QuickPosition { label: "Golden Bottom Left", rx: 0.382, ry: 0.618 },
    QuickPosition { label: "Golden Bottom Right", rx: 0.618, ry: 0.618 },
    QuickPosition { label: "Top Edge", rx: 0.5, ry: 0.0 },
    QuickPosition { label: "Bottom Edge", rx: 0.5, ry: 1.0 },
    QuickPosition { label: "Left Edge", rx: 0.0, ry: 0.5 },
    QuickPosition { label: "Right Edge", rx: 1.0, ry: 0.5 },
    QuickPosition { label: "Top Left", rx: 0.0, ry: 0.0 },
    QuickPosition { label: "Top Right", rx: 1.0, ry: 0.0 },
    QuickPosition { label: "Bottom Left", rx: 0.0, ry: 1.0 },
    QuickPosition { label: "Bottom Right", rx: 1.0, ry: 1.0 },
];

/// The placeholder committed when no project state is available.
///
/// Guessing dimensions would silently misplace every preset, so the editor
/// fails into an explicitly marked zero point instead.
pub fn dimension_error_placeholder() -> Value {
    json!({"x": 0.0, "y": 0.0, "__error": true})
}

/// Headless model for an `{x, y}` point field.
#[derive(Clone, Debug)]
pub struct Point2DEdit {
    field: String,
    raw: Value,
    point: Point2D,
    dims: Option<ResolutionDimensions>,
}

impl Point2DEdit {
    /// Build from the current config value and the injected project state.
    ///
    /// Without project state the model still edits coordinates, but carries
    /// the error placeholder and refuses preset resolution.
    pub fn new(
        field: &FieldDescriptor,
        current: Option<&Value>,
        project: Option<&dyn ProjectState>,
    ) -> Self {
        let dims = project.map(ProjectState::resolution_dimensions);
        if dims.is_none() {
            tracing::warn!(
                field = %field.name,
                "no project state injected, point editor degraded"
            );
        }

        let fallback = if dims.is_none() {
            dimension_error_placeholder()
        } else {
            field.default.clone()
        };
        let raw = current
            .filter(|v| is_point2d_shape(v))
            .cloned()
            .unwrap_or(fallback);
        let point = Point2D::new(
            raw.get("x").and_then(Value::as_f64).unwrap_or(0.0),
            raw.get("y").and_then(Value::as_f64).unwrap_or(0.0),
        );
        Self {
            field: field.name.clone(),
            raw,
            point,
            dims,
        }
    }

    /// Current point.
    pub fn point(&self) -> Point2D {
        self.point
    }

    /// True when the model had to degrade for lack of dimensions.
    pub fn has_dimension_error(&self) -> bool {
        self.dims.is_none()
    }

    fn commit(&mut self) -> ChangeEvent {
        self.raw = merge_subkey(Some(&self.raw), "x", json!(self.point.x));
        self.raw = merge_subkey(Some(&self.raw), "y", json!(self.point.y));
        ChangeEvent::new(&self.field, self.raw.clone())
    }

    /// Commit a new x coordinate.
    pub fn set_x(&mut self, x: f64) -> ChangeEvent {
        self.point.x = x;
        self.commit()
    }

    /// Commit a new y coordinate.
    pub fn set_y(&mut self, y: f64) -> ChangeEvent {
        self.point.y = y;
        self.commit()
    }

    /// Commit a preset position. Fails when no dimensions are available;
    /// presets never compute against guessed dimensions.
    pub fn apply_quick(&mut self, preset: QuickPosition) -> Option<ChangeEvent> {
        let dims = self.dims?;
        self.point = preset.resolve(dims);
        Some(self.commit())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/point.rs"]
mod tests;
