use super::*;
use crate::schema::field::FieldKind;
use serde_json::json;

fn pct_field(default: Value) -> FieldDescriptor {
    FieldDescriptor::new("layerOpacity", FieldKind::Percentage, default)
}

#[test]
fn displays_percent_over_stored_fraction() {
    let edit = PercentageEdit::new(&pct_field(json!(0.7)), None);
    assert_eq!(edit.fraction(), 0.7);
    assert_eq!(edit.display(), "70");
}

#[test]
fn entry_commits_the_fraction() {
    let mut edit = PercentageEdit::new(&pct_field(json!(0.7)), None);
    edit.input("45");
    let event = edit.blur().expect("valid entry commits");
    assert_eq!(event.value, json!(0.45));
    assert_eq!(edit.display(), "45");
}

#[test]
fn entry_clamps_into_the_unit_interval() {
    let mut edit = PercentageEdit::new(&pct_field(json!(0.5)), None);
    edit.input("250");
    let event = edit.blur().expect("valid entry commits");
    assert_eq!(event.value, json!(1.0));
}

#[test]
fn invalid_entry_reverts() {
    let mut edit = PercentageEdit::new(&pct_field(json!(0.5)), None);
    edit.input("half");
    assert!(edit.blur().is_none());
    assert_eq!(edit.display(), "50");
}

fn range_field(default: Value) -> FieldDescriptor {
    FieldDescriptor::new("fadeRange", FieldKind::PercentageRange, default)
}

#[test]
fn legacy_encodings_normalize_before_editing() {
    let f = range_field(json!({"min": 0.2, "max": 0.8}));
    let edit = PercentageRangeEdit::new(&f, None);
    assert_eq!(edit.display_percent(RangeEndpoint::Lower), 20.0);
    assert_eq!(edit.display_percent(RangeEndpoint::Upper), 80.0);
    assert_eq!(edit.value().lower.side, PercentSide::Shortest);
}

#[test]
fn commits_are_canonical_and_drop_legacy_keys() {
    let f = range_field(json!({}));
    let current = json!({"min": 0.2, "max": 0.8, "__type": "PercentageRange"});
    let mut edit = PercentageRangeEdit::new(&f, Some(&current));
    let event = edit.set_percent_display(RangeEndpoint::Lower, 30.0);

    assert_eq!(event.value["lower"], json!({"percent": 0.3, "side": "shortest"}));
    assert_eq!(event.value["upper"], json!({"percent": 0.8, "side": "longest"}));
    // Known legacy keys are superseded; unknown keys ride along.
    assert!(event.value.get("min").is_none());
    assert!(event.value.get("max").is_none());
    assert_eq!(event.value["__type"], "PercentageRange");
}

#[test]
fn side_switch_commits() {
    let f = range_field(json!({
        "lower": {"percent": 0.1, "side": "shortest"},
        "upper": {"percent": 0.9, "side": "longest"},
    }));
    let mut edit = PercentageRangeEdit::new(&f, None);
    let event = edit.set_side(RangeEndpoint::Lower, PercentSide::Longest);
    assert_eq!(event.value["lower"]["side"], "longest");
}
