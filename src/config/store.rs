//! Document-store connection, data-layer, and retry configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Connection settings for the managed document store.
#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreConfig {
    /// Cloud project identifier.
    pub project_id: String,
    /// Path to the service-account credentials file.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
}

pub(crate) fn default_credentials_path() -> String {
    "firestore_credentials.json".to_string()
}

/// Data-layer tuning knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Market-data cache time-to-live in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Timeout for a single remote request in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Retry schedule for document-store initialization and operations.
///
/// Delays double after each failed attempt: initialization waits
/// `init_delay_ms * 2^n` after failed attempt `n`, operations wait
/// `operation_delay_ms * 2^n`.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Attempts before giving up, for both initialization and operations.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay after a failed initialization attempt (milliseconds).
    #[serde(default = "default_init_delay_ms")]
    pub init_delay_ms: u64,
    /// Base delay after a failed operation attempt (milliseconds).
    #[serde(default = "default_operation_delay_ms")]
    pub operation_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_init_delay_ms() -> u64 {
    1000 // 1 second
}

fn default_operation_delay_ms() -> u64 {
    500
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            init_delay_ms: default_init_delay_ms(),
            operation_delay_ms: default_operation_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_attempts",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
