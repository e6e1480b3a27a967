//! Simulated latency: a single delay-then-resolve step
//!
//! Login and report generation resolve after an artificial delay. The work
//! runs once on a spawned task; there is no retry, no timeout escalation and
//! no de-duplication of concurrent requests.

use std::time::Duration;
use tokio::task::JoinHandle;

/// The pending step was cancelled before it resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation cancelled before completion")]
pub struct Cancelled;

/// Handle to an in-flight delayed result
#[derive(Debug)]
pub struct Pending<T> {
  handle: JoinHandle<T>,
}

impl<T: Send + 'static> Pending<T> {
  /// Sleep for `delay`, then compute the result once
  pub fn resolve_after<F>(delay: Duration, resolve: F) -> Self
  where
    F: FnOnce() -> T + Send + 'static,
  {
    let handle = tokio::spawn(async move {
      if !delay.is_zero() {
        tokio::time::sleep(delay).await;
      }
      resolve()
    });
    Self { handle }
  }

  /// Abort the step. A later `wait` reports `Cancelled` unless the result
  /// was already produced.
  pub fn cancel(&self) {
    self.handle.abort();
  }

  pub fn is_finished(&self) -> bool {
    self.handle.is_finished()
  }

  pub async fn wait(self) -> Result<T, Cancelled> {
    self.handle.await.map_err(|_| Cancelled)
  }
}
