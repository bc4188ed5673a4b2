use super::*;
use crate::foundation::error::ConfigError;
use crate::schema::field::FieldKind;
use serde_json::json;

#[test]
fn multi_select_toggles_in_and_out() {
    let mut f = FieldDescriptor::new("blendModes", FieldKind::MultiSelect, json!(["screen"]));
    f.options = Some(vec!["screen".to_string(), "overlay".to_string()]);
    let mut edit = MultiSelectEdit::new(&f, None);
    assert_eq!(edit.selected(), ["screen"]);

    let event = edit.toggle("overlay");
    assert_eq!(event.value, json!(["screen", "overlay"]));
    let event = edit.toggle("screen");
    assert_eq!(event.value, json!(["overlay"]));
}

#[test]
fn sparsity_selection_is_constrained_to_divisors() {
    let f = FieldDescriptor::new("sparsityFactor", FieldKind::SparsityFactor, json!([2, 3]));
    let mut edit = SparsityFactorEdit::new(&f, None);
    assert_eq!(edit.selected(), [2, 3]);
    assert_eq!(edit.available().len(), 22);

    assert!(edit.toggle(7).is_none());
    let event = edit.toggle(12).expect("12 divides 360");
    assert_eq!(event.value, json!([2, 3, 12]));
}

#[test]
fn sparsity_construction_drops_invalid_entries() {
    let f = FieldDescriptor::new("sparsityFactor", FieldKind::SparsityFactor, json!([2, 7, 360]));
    let edit = SparsityFactorEdit::new(&f, None);
    assert_eq!(edit.selected(), [2, 360]);
}

#[test]
fn sparsity_selection_stays_sorted() {
    let f = FieldDescriptor::new("sparsityFactor", FieldKind::SparsityFactor, json!([]));
    let mut edit = SparsityFactorEdit::new(&f, None);
    edit.toggle(90);
    edit.toggle(4);
    let event = edit.toggle(15).expect("divisor");
    assert_eq!(event.value, json!([4, 15, 90]));
}

struct WorkingCatalog;

#[async_trait::async_trait]
impl AlgorithmCatalog for WorkingCatalog {
    async fn find_value_algorithms(&self) -> crate::foundation::error::ConfigResult<Vec<String>> {
        Ok(vec!["journey".to_string(), "pulse".to_string()])
    }
}

struct BrokenCatalog;

#[async_trait::async_trait]
impl AlgorithmCatalog for BrokenCatalog {
    async fn find_value_algorithms(&self) -> crate::foundation::error::ConfigResult<Vec<String>> {
        Err(ConfigError::queue("bridge unavailable"))
    }
}

fn algo_field() -> FieldDescriptor {
    FieldDescriptor::new(
        "findValueAlgorithm",
        FieldKind::FindValueAlgorithm,
        json!(["linear"]),
    )
}

#[tokio::test]
async fn catalog_list_is_used_when_available() {
    let edit = FindValueAlgorithmEdit::load(&algo_field(), None, Some(&WorkingCatalog)).await;
    assert!(!edit.is_degraded());
    assert_eq!(edit.options(), ["journey", "pulse"]);
    assert_eq!(edit.selected(), ["linear"]);
}

#[tokio::test]
async fn catalog_failure_degrades_to_the_builtin_list() {
    let edit = FindValueAlgorithmEdit::load(&algo_field(), None, Some(&BrokenCatalog)).await;
    assert!(edit.is_degraded());
    assert_eq!(
        edit.options(),
        crate::capability::FALLBACK_FIND_VALUE_ALGORITHMS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .as_slice()
    );

    // Selection stays usable while degraded.
    let mut edit = edit;
    let event = edit.toggle("sinusoidal");
    assert_eq!(event.value, json!(["linear", "sinusoidal"]));
}

#[tokio::test]
async fn missing_catalog_degrades_too() {
    let edit = FindValueAlgorithmEdit::load(&algo_field(), None, None).await;
    assert!(edit.is_degraded());
    assert!(!edit.options().is_empty());
}
