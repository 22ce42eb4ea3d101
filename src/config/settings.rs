//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings for the
//! platform. Parameter bundles come from static defaults, optionally
//! overridden by a TOML parameter file; secrets (project id, exchange API
//! keys) are only ever read from environment variables.
//!
//! # Example
//!
//! ```no_run
//! use evotrade::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::evolution::EvolutionConfig;
use super::exchange::{ExchangeCredentials, ExchangesConfig};
use super::logging::LoggingConfig;
use super::store::{default_credentials_path, DataConfig, FirestoreConfig, RetryConfig};
use super::trading::TradingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the document-store project identifier.
pub const FIRESTORE_PROJECT_ID: &str = "FIRESTORE_PROJECT_ID";
/// Environment variable holding the service-account credentials file path.
pub const FIRESTORE_CREDENTIALS_PATH: &str = "FIRESTORE_CREDENTIALS_PATH";

/// Environment variable layout for one supported exchange.
struct ExchangeEnv {
    name: &'static str,
    key_var: &'static str,
    secret_var: &'static str,
    sandbox_var: Option<&'static str>,
    sandbox_default: bool,
}

const EXCHANGE_ENV: &[ExchangeEnv] = &[
    ExchangeEnv {
        name: "binance",
        key_var: "BINANCE_API_KEY",
        secret_var: "BINANCE_API_SECRET",
        sandbox_var: Some("BINANCE_TESTNET"),
        sandbox_default: true,
    },
    ExchangeEnv {
        name: "coinbase",
        key_var: "COINBASE_API_KEY",
        secret_var: "COINBASE_API_SECRET",
        sandbox_var: Some("COINBASE_SANDBOX"),
        sandbox_default: false,
    },
];

/// TOML-loadable parameter bundles. Secrets never appear here.
#[derive(Debug, Default, Deserialize)]
struct ParameterFile {
    #[serde(default)]
    trading: TradingConfig,
    #[serde(default)]
    evolution: EvolutionConfig,
    #[serde(default)]
    data: DataConfig,
    #[serde(default)]
    retry: RetryConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Main application configuration.
///
/// Constructed once at startup and passed explicitly to every consumer;
/// there is no process-global instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Trading parameters.
    pub trading: TradingConfig,
    /// Evolutionary-algorithm parameters.
    pub evolution: EvolutionConfig,
    /// Document-store connection settings.
    pub firestore: FirestoreConfig,
    /// Per-exchange API credentials.
    pub exchanges: ExchangesConfig,
    /// Data-layer tuning.
    pub data: DataConfig,
    /// Retry schedule for the document-store client.
    pub retry: RetryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

fn env_snapshot() -> HashMap<String, String> {
    std::env::vars().collect()
}

impl Config {
    /// Build configuration from the process environment with default
    /// parameter bundles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming every absent required
    /// variable, or [`ConfigError::InvalidValue`] when a bundle fails
    /// validation.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&env_snapshot())
    }

    /// Deterministic variant of [`Config::from_env`] reading from an explicit
    /// variable map instead of the process environment.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        Self::build(ParameterFile::default(), vars)
    }

    /// Parse a TOML parameter file, then resolve secrets from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, a bundle fails
    /// validation, or required environment variables are missing.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_vars(content, &env_snapshot())
    }

    /// Deterministic variant of [`Config::parse_toml`] with an explicit
    /// variable map.
    pub fn parse_toml_with_vars(content: &str, vars: &HashMap<String, String>) -> Result<Self> {
        let params: ParameterFile = toml::from_str(content).map_err(ConfigError::Parse)?;
        Self::build(params, vars)
    }

    /// Load configuration from a TOML parameter file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn build(params: ParameterFile, vars: &HashMap<String, String>) -> Result<Self> {
        params.trading.validate()?;
        params.evolution.validate()?;
        params.retry.validate()?;

        // Empty values count as unset, matching shell `VAR=` exports.
        let lookup = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();

        let mut missing: Vec<String> = Vec::new();

        let project_id = lookup(FIRESTORE_PROJECT_ID).unwrap_or_else(|| {
            missing.push(FIRESTORE_PROJECT_ID.to_string());
            String::new()
        });
        let credentials_path =
            lookup(FIRESTORE_CREDENTIALS_PATH).unwrap_or_else(default_credentials_path);

        let mut exchanges = ExchangesConfig::default();
        for entry in EXCHANGE_ENV {
            let key = lookup(entry.key_var);
            let secret = lookup(entry.secret_var);
            match (key, secret) {
                (Some(api_key), Some(secret)) => {
                    let sandbox = entry
                        .sandbox_var
                        .and_then(|var| vars.get(var))
                        .map(|v| v.eq_ignore_ascii_case("true"))
                        .unwrap_or(entry.sandbox_default);
                    exchanges.insert(
                        entry.name,
                        ExchangeCredentials {
                            api_key,
                            secret,
                            sandbox,
                        },
                    );
                }
                // Half-configured pairs are startup errors, not silently
                // registered exchanges with empty credentials.
                (Some(_), None) => missing.push(entry.secret_var.to_string()),
                (None, Some(_)) => missing.push(entry.key_var.to_string()),
                (None, None) => {}
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv { names: missing }.into());
        }

        let config = Self {
            trading: params.trading,
            evolution: params.evolution,
            firestore: FirestoreConfig {
                project_id,
                credentials_path,
            },
            exchanges,
            data: params.data,
            retry: params.retry,
            logging: params.logging,
        };
        config.check_credentials_file();
        Ok(config)
    }

    /// Warn (non-fatal) when the credentials file is absent or malformed.
    ///
    /// A missing file only becomes fatal later, at document-store
    /// initialization time.
    fn check_credentials_file(&self) {
        let path = Path::new(&self.firestore.credentials_path);
        if !path.exists() {
            warn!(
                path = %path.display(),
                "credentials file not found; document-store initialization will fail"
            );
            return;
        }
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if serde_json::from_str::<serde_json::Value>(&content).is_err() {
                    warn!(
                        path = %path.display(),
                        "credentials file is not valid JSON"
                    );
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "credentials file is unreadable");
            }
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
