use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use crate::config::merge::merge_configs_with_cloning;
use crate::config::queue::{UpdateOptions, UpdateQueue};
use crate::edit::commit::ChangeEvent;
use crate::foundation::error::ConfigResult;
use crate::schema::field::{FieldKind, Schema};
use crate::value::model::ConfigObject;
use crate::value::position;

/// The host-side surface a form renders against.
///
/// Owns one effect's schema and config object, applies change events
/// through the update queue (latest-write-wins per field), and performs the
/// mandatory outbound position transform when the config crosses to the
/// engine. Widgets never hold the config; they read a value, edit locally,
/// and hand back a [`ChangeEvent`].
#[derive(Clone)]
pub struct ConfigStore {
    schema: Arc<Schema>,
    config: Arc<Mutex<ConfigObject>>,
    queue: UpdateQueue,
}

impl ConfigStore {
    /// Create a store over schema defaults merged with user overrides.
    ///
    /// The merge clones every structured value, so attaching the same
    /// effect twice never shares nested state between the two configs.
    pub fn new(schema: Schema, overrides: &ConfigObject) -> Self {
        let mut defaults = ConfigObject::new();
        for field in &schema.fields {
            defaults.insert(field.name.clone(), field.default.clone());
        }
        let config = merge_configs_with_cloning(&defaults, overrides);
        Self {
            schema: Arc::new(schema),
            config: Arc::new(Mutex::new(config)),
            queue: UpdateQueue::new(),
        }
    }

    /// The schema this store renders.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The queue updates are serialized through.
    pub fn queue(&self) -> &UpdateQueue {
        &self.queue
    }

    fn lock_config(&self) -> std::sync::MutexGuard<'_, ConfigObject> {
        self.config.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current value for a field: config entry, else schema default, else
    /// null.
    pub fn effective_value(&self, name: &str) -> Value {
        if let Some(v) = self.lock_config().get(name) {
            return v.clone();
        }
        self.schema
            .field(name)
            .map(|f| f.default.clone())
            .unwrap_or(Value::Null)
    }

    /// Owned copy of the whole config.
    pub fn snapshot(&self) -> ConfigObject {
        self.lock_config().clone()
    }

    /// Apply a committed change through the queue.
    ///
    /// Keyed by field name with replace semantics: a rapid second edit to
    /// the same field supersedes a queued first one, while edits to
    /// different fields keep FIFO order.
    pub fn apply(&self, event: ChangeEvent) -> impl Future<Output = ConfigResult<()>> + use<> {
        let config = Arc::clone(&self.config);
        let opts = UpdateOptions::replace_for(event.field.clone());
        self.queue.enqueue(opts, move || async move {
            let mut config = config.lock().unwrap_or_else(|e| e.into_inner());
            config.insert(event.field, event.value);
            Ok(())
        })
    }

    /// Wait for every queued update to finish.
    pub async fn flush(&self, timeout: Duration) -> ConfigResult<()> {
        self.queue.wait_for_empty(timeout).await
    }

    /// Snapshot the config in engine wire form.
    ///
    /// Every position-typed field (and any value already carrying a
    /// position tag) goes through the position serializer; this is the one
    /// mandatory transform before the config crosses the boundary. Bare
    /// `{x, y}` values serialize only when the schema declares the field a
    /// position — a `point2d` field stays a bare point.
    pub fn serialize_for_engine(&self) -> ConfigObject {
        let mut out = self.snapshot();
        for (name, value) in out.iter_mut() {
            let is_position_field = self
                .schema
                .field(name)
                .map(|f| f.kind == FieldKind::Position)
                .unwrap_or(false);
            let tagged = matches!(
                position::position_type(value),
                Some(position::PositionType::Position | position::PositionType::ArcPath)
            );
            if is_position_field || tagged {
                *value = position::serialize(value);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/store.rs"]
mod tests;
