//! The write-back contract between edit models and the form host.

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
/// One committed field change.
///
/// `value` is always the fully reconstructed value for the field — never a
/// partial patch the host must merge. Hosts apply events by assignment into
/// the config object, ideally through the update queue.
pub struct ChangeEvent {
    /// Config key the change applies to.
    pub field: String,
    /// Complete next value for that key.
    pub value: Value,
}

impl ChangeEvent {
    /// Build an event.
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// Spread-merge a patch over the prior raw value.
///
/// When both are objects, every key of `prev` survives unless the patch
/// overwrites it — unknown extra keys (`__type`, metadata markers) ride
/// along verbatim so unrelated consumers are not dropped. Anything else
/// resolves to the patch.
pub fn spread_merge(prev: Option<&Value>, patch: Value) -> Value {
    match (prev, patch) {
        (Some(Value::Object(prev)), Value::Object(patch_obj)) => {
            let mut merged = prev.clone();
            for (k, v) in patch_obj {
                merged.insert(k, v);
            }
            Value::Object(merged)
        }
        (_, patch) => patch,
    }
}

/// Spread-merge one changed sub-key over the prior raw value.
pub fn merge_subkey(prev: Option<&Value>, key: &str, value: Value) -> Value {
    let mut obj = match prev {
        Some(Value::Object(o)) => o.clone(),
        _ => serde_json::Map::new(),
    };
    obj.insert(key.to_string(), value);
    Value::Object(obj)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/commit.rs"]
mod tests;
