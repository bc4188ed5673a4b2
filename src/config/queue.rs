//! FIFO serialization of config updates.
//!
//! Debounced widget commits can arrive faster than the host applies them,
//! and a slow first update must never be overtaken by a fast second one.
//! The queue runs exactly one update at a time, strictly in submission
//! order, and each update observes the completed side effects of the one
//! before it. `replace` gives rapid same-field edits latest-write-wins
//! coalescing without disturbing ordering across fields.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::oneshot;

use crate::foundation::error::{ConfigError, ConfigResult};

type UpdateFuture = Pin<Box<dyn Future<Output = ConfigResult<()>> + Send>>;
type UpdateFn = Box<dyn FnOnce() -> UpdateFuture + Send>;

#[derive(Clone, Debug, Default)]
/// Options controlling how an update enters the queue.
pub struct UpdateOptions {
    /// Coalescing key, normally the field name.
    pub key: Option<String>,
    /// When set with a key, queued-but-not-started updates sharing the key
    /// are dropped in favor of this one.
    pub replace: bool,
}

impl UpdateOptions {
    /// Latest-write-wins options for a field key.
    pub fn replace_for(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            replace: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Counters observed over the queue's lifetime.
pub struct QueueMetrics {
    /// Updates ever enqueued.
    pub total_enqueued: u64,
    /// Updates currently waiting to start.
    pub queued: usize,
    /// Updates that ran to completion.
    pub processed: u64,
    /// Updates rejected before starting (replaced or cleared).
    pub dropped: u64,
    /// Deepest the wait queue has ever been.
    pub max_depth: usize,
    /// Mean time an update took to run, in milliseconds.
    pub avg_processing_ms: f64,
}

struct QueuedUpdate {
    key: Option<String>,
    run: UpdateFn,
    done: oneshot::Sender<ConfigResult<()>>,
}

#[derive(Default)]
struct QueueState {
    items: VecDeque<QueuedUpdate>,
    processing: bool,
    total_enqueued: u64,
    processed: u64,
    dropped: u64,
    max_depth: usize,
    processing_total: Duration,
}

/// A FIFO async serializer for config updates.
///
/// Cheap to clone; clones share the same queue.
#[derive(Clone, Default)]
pub struct UpdateQueue {
    state: Arc<Mutex<QueueState>>,
}

impl UpdateQueue {
    /// An empty, idle queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Enqueue an update; the returned future resolves when the update has
    /// run (or been rejected).
    ///
    /// With `replace` and a key, queued-but-not-started updates sharing the
    /// key are rejected first — an update already executing cannot be
    /// replaced.
    pub fn enqueue<F, Fut>(
        &self,
        opts: UpdateOptions,
        update: F,
    ) -> impl Future<Output = ConfigResult<()>> + use<F, Fut>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ConfigResult<()>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let spawn_worker = {
            let mut state = self.lock();

            if opts.replace
                && let Some(key) = &opts.key
            {
                let mut kept = VecDeque::with_capacity(state.items.len());
                while let Some(item) = state.items.pop_front() {
                    if item.key.as_deref() == Some(key.as_str()) {
                        state.dropped += 1;
                        let _ = item
                            .done
                            .send(Err(ConfigError::queue("update replaced by a newer edit")));
                    } else {
                        kept.push_back(item);
                    }
                }
                state.items = kept;
            }

            state.items.push_back(QueuedUpdate {
                key: opts.key,
                run: Box::new(move || Box::pin(update()) as UpdateFuture),
                done: tx,
            });
            state.total_enqueued += 1;
            state.max_depth = state.max_depth.max(state.items.len());

            if state.processing {
                false
            } else {
                state.processing = true;
                true
            }
        };

        if spawn_worker {
            let queue = self.clone();
            tokio::spawn(async move { queue.process_queue().await });
        }

        async move {
            match rx.await {
                Ok(result) => result,
                Err(_) => Err(ConfigError::queue("update dropped")),
            }
        }
    }

    /// Single in-flight worker loop: pull strictly FIFO, await each update,
    /// settle its promise, proceed. Re-entrancy is guarded by the
    /// processing flag taken in `enqueue`.
    #[tracing::instrument(skip(self))]
    async fn process_queue(&self) {
        loop {
            let item = {
                let mut state = self.lock();
                match state.items.pop_front() {
                    Some(item) => item,
                    None => {
                        state.processing = false;
                        return;
                    }
                }
            };

            let started = Instant::now();
            let result = (item.run)().await;
            let elapsed = started.elapsed();

            {
                let mut state = self.lock();
                state.processed += 1;
                state.processing_total += elapsed;
            }
            let _ = item.done.send(result);
        }
    }

    /// Reject and drop every queued-but-not-started update.
    pub fn clear(&self) {
        let mut state = self.lock();
        while let Some(item) = state.items.pop_front() {
            state.dropped += 1;
            let _ = item.done.send(Err(ConfigError::queue("queue cleared")));
        }
    }

    /// Updates currently waiting to start.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// True when nothing is queued or running.
    pub fn is_idle(&self) -> bool {
        let state = self.lock();
        state.items.is_empty() && !state.processing
    }

    /// Poll until the queue is idle or the timeout elapses.
    pub async fn wait_for_empty(&self, timeout: Duration) -> ConfigResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_idle() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ConfigError::queue("timed out waiting for queue to empty"));
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Snapshot of the lifetime counters.
    pub fn metrics(&self) -> QueueMetrics {
        let state = self.lock();
        let avg_processing_ms = if state.processed > 0 {
            state.processing_total.as_secs_f64() * 1000.0 / state.processed as f64
        } else {
            0.0
        };
        QueueMetrics {
            total_enqueued: state.total_enqueued,
            queued: state.items.len(),
            processed: state.processed,
            dropped: state.dropped,
            max_depth: state.max_depth,
            avg_processing_ms,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/queue.rs"]
mod tests;
