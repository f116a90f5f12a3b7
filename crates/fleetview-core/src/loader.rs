//! Load gate - one-shot readiness for the initial data load
//!
//! Rendering is gated on a single asynchronous load task. The gate's flag
//! is monotonic: it starts false and is set true exactly once when the task
//! settles, whether it succeeded, failed, or timed out. Failures are logged
//! and swallowed; loading is over either way.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::LoadError;

/// Simulated fetch delay standing in for a real backend call (ms)
pub const SIMULATED_FETCH_MS: u64 = 1000;

/// Default upper bound on the initial load task (ms)
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;

/// One-shot readiness gate for the initial load.
///
/// `begin` is idempotent: once a task has been started (or the gate is
/// already ready) further calls are no-ops. Dropping the gate aborts an
/// in-flight task, so a torn-down controller never flips a flag nobody is
/// watching.
#[derive(Debug)]
pub struct LoadGate {
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
    task: Option<JoinHandle<()>>,
    timeout: Duration,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LOAD_TIMEOUT_MS))
    }
}

impl LoadGate {
    /// Gate with the given upper bound on the load task
    pub fn new(timeout: Duration) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            ready_tx,
            ready_rx,
            task: None,
            timeout,
        }
    }

    /// Whether the initial load has settled
    pub fn ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Start the one-shot load task.
    ///
    /// Returns false without spawning anything if a task was already
    /// started. The task's error channel is its `Result`; an `Err` (or
    /// hitting the timeout) is logged and the gate still becomes ready.
    pub fn begin<F>(&mut self, task: F) -> bool
    where
        F: Future<Output = Result<(), LoadError>> + Send + 'static,
    {
        if self.task.is_some() || self.ready() {
            return false;
        }

        let tx = self.ready_tx.clone();
        let timeout = self.timeout;
        self.task = Some(tokio::spawn(async move {
            match tokio::time::timeout(timeout, task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("initial load failed: {e}"),
                Err(_) => tracing::warn!("initial load timed out after {timeout:?}"),
            }
            // Loading ends either way; readiness is monotonic.
            let _ = tx.send(true);
        }));
        true
    }

    /// Start the simulated fetch used when no real backend exists
    pub fn begin_simulated(&mut self, delay: Duration) -> bool {
        self.begin(simulated_fetch(delay))
    }

    /// Wait until the gate is ready
    pub async fn wait_ready(&self) {
        let mut rx = self.ready_rx.clone();
        // The sender lives as long as the gate, so this cannot fail.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Drop for LoadGate {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

/// The stand-in for a real backend fetch: resolves after a fixed delay.
///
/// A real implementation would perform I/O here and report failures
/// through the [`LoadError`] channel.
pub fn simulated_fetch(delay: Duration) -> impl Future<Output = Result<(), LoadError>> {
    async move {
        tokio::time::sleep(delay).await;
        Ok(())
    }
}
