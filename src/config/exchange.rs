//! Per-exchange API credentials, populated once from the environment.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;

/// API credentials for a single exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeCredentials {
    pub api_key: String,
    pub secret: String,
    /// True when the exchange should run against its sandbox/testnet.
    pub sandbox: bool,
}

/// Read-only map from exchange name to credentials.
#[derive(Debug, Clone, Default)]
pub struct ExchangesConfig {
    credentials: BTreeMap<String, ExchangeCredentials>,
}

impl ExchangesConfig {
    pub(crate) fn insert(&mut self, name: &str, credentials: ExchangeCredentials) {
        self.credentials.insert(name.to_string(), credentials);
    }

    /// Look up credentials for a named exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ExchangeNotConfigured`] when no credentials
    /// were loaded for `name`.
    pub fn get(&self, name: &str) -> Result<&ExchangeCredentials, ConfigError> {
        self.credentials
            .get(name)
            .ok_or_else(|| ConfigError::ExchangeNotConfigured {
                name: name.to_string(),
            })
    }

    /// Names of all configured exchanges, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.credentials.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }
}
