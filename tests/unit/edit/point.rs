use super::*;
use crate::capability::FixedProjectState;
use crate::schema::field::FieldKind;
use serde_json::json;

fn project_1920x1080() -> FixedProjectState {
    FixedProjectState {
        dimensions: ResolutionDimensions {
            width: 1920,
            height: 1080,
        },
        resolution_name: "1080p".to_string(),
    }
}

fn point_field() -> FieldDescriptor {
    FieldDescriptor::new("center", FieldKind::Point2d, json!({"x": 0, "y": 0}))
}

#[test]
fn coordinates_commit_with_unknown_keys_preserved() {
    let project = project_1920x1080();
    let current = json!({"x": 10, "y": 20, "__type": "Point2D"});
    let mut edit = Point2DEdit::new(&point_field(), Some(&current), Some(&project));
    assert!(!edit.has_dimension_error());

    let event = edit.set_x(42.0);
    assert_eq!(event.value["x"], 42.0);
    assert_eq!(event.value["y"], 20.0);
    assert_eq!(event.value["__type"], "Point2D");
}

#[test]
fn missing_project_state_degrades_to_error_placeholder() {
    let mut edit = Point2DEdit::new(&point_field(), None, None);
    assert!(edit.has_dimension_error());
    // Presets are refused rather than computed against guessed dimensions.
    assert!(edit.apply_quick(QUICK_POSITIONS[0]).is_none());

    let event = edit.set_x(5.0);
    assert_eq!(event.value["__error"], true);
}

#[test]
fn center_preset_resolves_against_injected_dimensions() {
    let project = project_1920x1080();
    let mut edit = Point2DEdit::new(&point_field(), None, Some(&project));
    let center = QUICK_POSITIONS
        .iter()
        .find(|p| p.label == "Center")
        .copied()
        .expect("center preset exists");
    let event = edit.apply_quick(center).expect("dimensions are known");
    assert_eq!(event.value["x"], 960.0);
    assert_eq!(event.value["y"], 540.0);
}

#[test]
fn golden_and_third_presets_are_fractions_of_canvas() {
    let dims = ResolutionDimensions {
        width: 1000,
        height: 1000,
    };
    let golden = QUICK_POSITIONS
        .iter()
        .find(|p| p.label == "Golden Top Left")
        .expect("preset exists");
    assert_eq!(golden.resolve(dims), Point2D::new(382.0, 382.0));

    let third = QUICK_POSITIONS
        .iter()
        .find(|p| p.label == "Third Bottom Right")
        .expect("preset exists");
    assert_eq!(third.resolve(dims), Point2D::new(667.0, 667.0));
}

#[test]
fn edge_presets_land_on_the_canvas_border() {
    let dims = ResolutionDimensions {
        width: 1920,
        height: 1080,
    };
    let right = QUICK_POSITIONS
        .iter()
        .find(|p| p.label == "Right Edge")
        .expect("preset exists");
    assert_eq!(right.resolve(dims), Point2D::new(1920.0, 540.0));
}
