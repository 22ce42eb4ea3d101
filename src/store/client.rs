//! Retrying wrapper around a document-store backend.
//!
//! Provides exponential backoff for both handle creation and operation
//! execution. The handle is either absent or fully usable; callers never
//! observe a partially-initialized state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

use super::backend::{FnOperation, StoreBackend, StoreOperation};
use crate::config::{FirestoreConfig, RetryConfig};
use crate::error::StoreError;

/// Lifecycle state of the remote handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// No handle; operations fail immediately.
    Absent,
    /// Initialization in progress.
    Initializing,
    /// Handle is live and usable.
    Ready,
}

/// Point-in-time snapshot of the client lifecycle.
#[derive(Debug, Clone)]
pub struct StoreStatus {
    pub state: HandleState,
    /// Connect calls made by the most recent initialization.
    pub init_attempts: u32,
    pub connected_at: Option<DateTime<Utc>>,
}

/// Document-store client with retrying initialization and operations.
///
/// Handle replacement is serialized through a write lock; concurrent
/// operations share the handle through cheap `Arc` clones.
pub struct ResilientStoreClient<B: StoreBackend> {
    backend: B,
    settings: FirestoreConfig,
    retry: RetryConfig,
    handle: RwLock<Option<Arc<B::Handle>>>,
    status: Mutex<StoreStatus>,
}

fn backoff(base_ms: u64, failed_attempt: u32) -> Duration {
    // Doubles per failed attempt; the exponent cap keeps the shift sound
    // for unreasonably large attempt bounds.
    Duration::from_millis(base_ms.saturating_mul(1 << failed_attempt.min(16)))
}

impl<B: StoreBackend> ResilientStoreClient<B> {
    /// Create a client with no live handle.
    ///
    /// Call [`initialize`](Self::initialize) before executing operations.
    pub fn new(backend: B, settings: FirestoreConfig, retry: RetryConfig) -> Self {
        Self {
            backend,
            settings,
            retry,
            handle: RwLock::new(None),
            status: Mutex::new(StoreStatus {
                state: HandleState::Absent,
                init_attempts: 0,
                connected_at: None,
            }),
        }
    }

    /// Create a client and immediately initialize it.
    ///
    /// Initialization exhaustion is fatal to construction, matching the
    /// startup path where no degraded mode exists.
    pub async fn connect(
        backend: B,
        settings: FirestoreConfig,
        retry: RetryConfig,
    ) -> Result<Self, StoreError> {
        let client = Self::new(backend, settings, retry);
        client.initialize().await?;
        Ok(client)
    }

    /// Obtain a live handle, retrying transient failures with exponential
    /// backoff.
    ///
    /// Waits `init_delay_ms * 2^n` after failed attempt `n`. On exhaustion
    /// the handle stays absent and the last backend error is surfaced inside
    /// [`StoreError::InitExhausted`].
    pub async fn initialize(&self) -> Result<(), StoreError> {
        // The write lock is held for the whole protocol so readers never see
        // a handle mid-replacement.
        let mut guard = self.handle.write().await;
        self.status.lock().state = HandleState::Initializing;

        let mut attempt: u32 = 0;
        loop {
            match self.backend.connect(&self.settings).await {
                Ok(handle) => {
                    *guard = Some(Arc::new(handle));
                    let mut status = self.status.lock();
                    status.state = HandleState::Ready;
                    status.init_attempts = attempt + 1;
                    status.connected_at = Some(Utc::now());
                    info!(
                        project_id = %self.settings.project_id,
                        "document store client initialized"
                    );
                    return Ok(());
                }
                Err(e) => {
                    attempt += 1;
                    warn!(
                        attempt,
                        error = %e,
                        "document store initialization attempt failed"
                    );
                    if attempt >= self.retry.max_attempts {
                        error!(attempts = attempt, "all document store initialization attempts failed");
                        *guard = None;
                        let mut status = self.status.lock();
                        status.state = HandleState::Absent;
                        status.init_attempts = attempt;
                        status.connected_at = None;
                        return Err(StoreError::InitExhausted {
                            attempts: attempt,
                            source: Box::new(e),
                        });
                    }
                    sleep(backoff(self.retry.init_delay_ms, attempt - 1)).await;
                }
            }
        }
    }

    /// Run a remote operation through the retry discipline.
    ///
    /// Fails immediately with [`StoreError::NotInitialized`] when no handle
    /// is live. Waits `operation_delay_ms * 2^n` after failed attempt `n`;
    /// the final attempt's error is returned to the caller unchanged.
    pub async fn execute<Op>(&self, op: &Op) -> Result<Op::Output, StoreError>
    where
        Op: StoreOperation<B::Handle>,
    {
        let handle = self
            .handle
            .read()
            .await
            .clone()
            .ok_or(StoreError::NotInitialized)?;

        let mut attempt: u32 = 0;
        loop {
            match op.run(handle.as_ref()).await {
                Ok(output) => return Ok(output),
                Err(e) => {
                    attempt += 1;
                    warn!(attempt, error = %e, "document store operation failed");
                    if attempt >= self.retry.max_attempts {
                        error!(attempts = attempt, "document store operation retries exhausted");
                        return Err(e);
                    }
                    sleep(backoff(self.retry.operation_delay_ms, attempt - 1)).await;
                }
            }
        }
    }

    /// Closure convenience over [`execute`](Self::execute).
    pub async fn execute_with<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: for<'a> Fn(&'a B::Handle) -> BoxFuture<'a, Result<T, StoreError>> + Send + Sync,
        T: Send,
    {
        self.execute(&FnOperation::new(f)).await
    }

    /// Snapshot of the client lifecycle.
    pub fn status(&self) -> StoreStatus {
        self.status.lock().clone()
    }

    /// True once a handle is live.
    pub async fn is_ready(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_failed_attempt() {
        assert_eq!(backoff(1000, 0), Duration::from_millis(1000));
        assert_eq!(backoff(1000, 1), Duration::from_millis(2000));
        assert_eq!(backoff(1000, 2), Duration::from_millis(4000));
        assert_eq!(backoff(500, 0), Duration::from_millis(500));
        assert_eq!(backoff(500, 1), Duration::from_millis(1000));
    }

    #[test]
    fn backoff_saturates_instead_of_overflowing() {
        let d = backoff(u64::MAX, 3);
        assert_eq!(d, Duration::from_millis(u64::MAX));
    }
}
