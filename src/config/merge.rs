//! Reference-breaking clone and merge for config objects.
//!
//! Config defaults are shared at the effect-class level across every
//! attachment of that effect. The merge here deep-clones every array and
//! object value into the result so no two attachments can end up editing
//! the same nested structure. Rust ownership already prevents aliasing
//! across owned values; the operation stays first-class because config
//! creation and preset merging are defined in terms of it.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::foundation::error::{ConfigError, ConfigResult};
use crate::value::model::ConfigObject;

/// Deep-clone a config through a serde round trip.
///
/// Total over config data: JSON values cannot contain functions or cycles,
/// so there is no partial-clone fallback path.
pub fn deep_clone_config<T>(config: &T) -> ConfigResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let value = serde_json::to_value(config)
        .map_err(|e| ConfigError::serde(format!("clone serialize failed: {e}")))?;
    serde_json::from_value(value)
        .map_err(|e| ConfigError::serde(format!("clone deserialize failed: {e}")))
}

/// Merge `patch` over `base` key-by-key into a fresh config object.
///
/// Patch keys override base keys whole (no recursive merging); every
/// array and object value is cloned into the result, never shared.
pub fn merge_configs_with_cloning(base: &ConfigObject, patch: &ConfigObject) -> ConfigObject {
    let mut merged = ConfigObject::new();
    for (key, value) in base {
        merged.insert(key.clone(), value.clone());
    }
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
#[path = "../../tests/unit/config/merge.rs"]
mod tests;
