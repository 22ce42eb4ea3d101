//! Backend and operation abstractions for the document store.

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::config::FirestoreConfig;
use crate::error::StoreError;

/// Factory for live connections to the remote document store.
///
/// The real SDK lives behind this seam; tests substitute fakes.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Opaque live connection to the remote store.
    type Handle: Send + Sync + 'static;

    /// Create a handle from connection settings.
    ///
    /// Called once per initialization attempt; the retry schedule lives in
    /// the client, not here.
    async fn connect(&self, settings: &FirestoreConfig) -> Result<Self::Handle, StoreError>;
}

// Lets callers keep a handle on a shared backend (tests inspect call
// counts after handing the backend to a client).
#[async_trait]
impl<B: StoreBackend> StoreBackend for std::sync::Arc<B> {
    type Handle = B::Handle;

    async fn connect(&self, settings: &FirestoreConfig) -> Result<Self::Handle, StoreError> {
        (**self).connect(settings).await
    }
}

/// A typed, retryable remote operation.
///
/// Implementations must be safe to run more than once; the client re-runs
/// the operation on transient failure.
#[async_trait]
pub trait StoreOperation<H: Send + Sync>: Send + Sync {
    type Output: Send;

    async fn run(&self, handle: &H) -> Result<Self::Output, StoreError>;
}

/// Adapter turning a borrowing closure into a [`StoreOperation`].
pub struct FnOperation<F>(F);

impl<F> FnOperation<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<H, F, T> StoreOperation<H> for FnOperation<F>
where
    H: Send + Sync,
    T: Send,
    F: for<'a> Fn(&'a H) -> BoxFuture<'a, Result<T, StoreError>> + Send + Sync,
{
    type Output = T;

    async fn run(&self, handle: &H) -> Result<T, StoreError> {
        (self.0)(handle).await
    }
}
