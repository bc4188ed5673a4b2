//! Host-owned keyed debouncing of outward notifications.
//!
//! The display buffer updates synchronously on every keystroke; the host is
//! only notified after a quiet period. Timers are keyed per logical field so
//! two fields editing concurrently never cancel each other. The timer map is
//! owned by the host, not by widget instances, so timer lifecycle is
//! independent of UI mounting.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::schema::field::FieldKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Quiet period class for a field.
pub enum DebounceClass {
    /// Plain numeric entry: 150 ms.
    Number,
    /// Text, percentage, and hex entry: 300 ms.
    Text,
    /// Raw JSON editing: 500 ms.
    Json,
}

impl DebounceClass {
    /// Quiet period for this class.
    pub fn delay(self) -> Duration {
        match self {
            Self::Number => Duration::from_millis(150),
            Self::Text => Duration::from_millis(300),
            Self::Json => Duration::from_millis(500),
        }
    }

    /// Class for a field kind.
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Percentage | FieldKind::ColorPicker => Self::Text,
            FieldKind::Json | FieldKind::Object => Self::Json,
            _ => Self::Number,
        }
    }
}

/// Keyed timer map: `field name -> pending notification`.
#[derive(Debug, Default)]
pub struct Debouncer {
    timers: Mutex<HashMap<String, tokio::task::JoinHandle<()>>>,
}

impl Debouncer {
    /// Empty debouncer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` after `delay`, replacing any pending action for
    /// the same key. The keystroke that reschedules is the implicit
    /// cancellation of the previous timer.
    pub fn schedule<F>(&self, key: &str, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(old) = timers.insert(key.to_string(), handle) {
            old.abort();
        }
    }

    /// Cancel the pending action for `key`, if any.
    pub fn cancel(&self, key: &str) {
        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(old) = timers.remove(key) {
            old.abort();
        }
    }

    /// Cancel everything pending.
    pub fn cancel_all(&self) {
        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        for (_, handle) in timers.drain() {
            handle.abort();
        }
    }

    /// Number of keys with a still-pending action.
    pub fn pending(&self) -> usize {
        let timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        timers.values().filter(|h| !h.is_finished()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/debounce.rs"]
mod tests;
