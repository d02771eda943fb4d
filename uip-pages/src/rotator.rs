//! Timer-driven index rotation for the testimonial carousel.
//!
//! The rotator owns a recurring tokio task that advances a zero-based index
//! modulo the list length on a fixed interval. The task's lifetime is tied
//! to the owning view: teardown (or drop) aborts it unconditionally, so no
//! tick can ever act on a torn-down view.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A rotating selection index over a fixed, non-empty list.
pub struct RotatingSelector {
    len: usize,
    index: Arc<AtomicUsize>,
    ticker: Option<JoinHandle<()>>,
}

impl RotatingSelector {
    /// Start rotating over a list of `len` entries, advancing every
    /// `interval`. An empty list starts no timer and pins the index at 0.
    ///
    /// Must be called from within a tokio runtime; the schedule is anchored
    /// at the moment of construction.
    pub fn start(len: usize, interval: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));

        let ticker = if len > 0 {
            let index = Arc::clone(&index);
            let mut ticker = tokio::time::interval(interval);
            Some(tokio::spawn(async move {
                // The first tick of a tokio interval completes immediately;
                // consume it so the first advance happens after one interval.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    let _ = index.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| {
                        Some((i + 1) % len)
                    });
                }
            }))
        } else {
            None
        };

        Self { len, index, ticker }
    }

    /// Length of the rotated list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The currently selected index, always in `[0, len)` for non-empty
    /// lists.
    pub fn current(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Select an index directly, taking effect immediately. The interval is
    /// neither reset nor extended. Out-of-range selections are ignored.
    pub fn select(&self, index: usize) -> bool {
        if index < self.len {
            self.index.store(index, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Whether the recurring task is still attached.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    /// Cancel the recurring task. Idempotent; also invoked on drop.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            debug!("rotation timer cancelled");
        }
    }
}

impl Drop for RotatingSelector {
    fn drop(&mut self) {
        self.stop();
    }
}
