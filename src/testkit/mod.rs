//! Canonical fakes and configurations for tests.
//!
//! Single source of truth for the flaky backend/operation doubles used
//! across integration tests. Avoids each test module defining its own
//! slightly-different fakes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::config::{FirestoreConfig, RetryConfig};
use crate::error::StoreError;
use crate::store::{StoreBackend, StoreOperation};

/// Handle that counts the operations run against it.
#[derive(Debug, Default)]
pub struct FakeHandle {
    pub calls: AtomicU32,
}

/// Backend that refuses a fixed number of connects before succeeding.
#[derive(Debug)]
pub struct FlakyBackend {
    failures_before_success: u32,
    connects: AtomicU32,
}

impl FlakyBackend {
    pub fn new(failures_before_success: u32) -> Self {
        Self {
            failures_before_success,
            connects: AtomicU32::new(0),
        }
    }

    /// Backend that never connects.
    pub fn always_failing() -> Self {
        Self::new(u32::MAX)
    }

    /// Total connect calls observed so far.
    pub fn connect_calls(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreBackend for FlakyBackend {
    type Handle = FakeHandle;

    async fn connect(&self, _settings: &FirestoreConfig) -> Result<FakeHandle, StoreError> {
        let n = self.connects.fetch_add(1, Ordering::SeqCst);
        if n < self.failures_before_success {
            Err(StoreError::Backend(format!(
                "connection refused (connect #{})",
                n + 1
            )))
        } else {
            Ok(FakeHandle::default())
        }
    }
}

/// Operation that fails a fixed number of runs before succeeding.
///
/// Returns the 1-based run number on success.
#[derive(Debug)]
pub struct FlakyOperation {
    failures_before_success: u32,
    runs: AtomicU32,
}

impl FlakyOperation {
    pub fn new(failures_before_success: u32) -> Self {
        Self {
            failures_before_success,
            runs: AtomicU32::new(0),
        }
    }

    /// Operation that never succeeds.
    pub fn always_failing() -> Self {
        Self::new(u32::MAX)
    }

    /// Total runs observed so far.
    pub fn run_calls(&self) -> u32 {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreOperation<FakeHandle> for FlakyOperation {
    type Output = u32;

    async fn run(&self, handle: &FakeHandle) -> Result<u32, StoreError> {
        handle.calls.fetch_add(1, Ordering::SeqCst);
        let n = self.runs.fetch_add(1, Ordering::SeqCst);
        if n < self.failures_before_success {
            Err(StoreError::Backend(format!("deadline exceeded (run #{})", n + 1)))
        } else {
            Ok(n + 1)
        }
    }
}

/// Store settings pointing at a test project.
pub fn firestore() -> FirestoreConfig {
    FirestoreConfig {
        project_id: "evo-test".into(),
        credentials_path: "firestore_credentials.json".into(),
    }
}

/// Fast retry config with zero delays — no waiting in tests.
pub fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        init_delay_ms: 0,
        operation_delay_ms: 0,
    }
}

/// Millisecond-scale retry config for tests that measure backoff.
///
/// Operation delay is half the initialization delay, preserving the
/// production ratio.
pub fn timed_retry(init_delay_ms: u64) -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        init_delay_ms,
        operation_delay_ms: init_delay_ms / 2,
    }
}

/// Environment-variable map for deterministic config construction.
pub fn env_vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
