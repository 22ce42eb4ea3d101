//! evotrade - startup layer of an autonomous evolutionary trading platform.
//!
//! This crate provides the two pieces every other subsystem depends on:
//!
//! - [`config`] - Process configuration: trading and evolution parameter
//!   bundles, per-exchange credentials, and document-store connection
//!   settings, loaded from environment variables with an optional TOML
//!   parameter file. Construction fails fast, naming every missing required
//!   setting at once.
//! - [`store`] - A resilient client for the managed document store. Handle
//!   creation and remote operations both run through exponential-backoff
//!   retry; the handle is either absent or fully usable.
//!
//! Trading strategies, the evolutionary algorithm, and exchange integrations
//! live in other crates; they are referenced here only through their
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use evotrade::config::Config;
//! use evotrade::store::ResilientStoreClient;
//! # use evotrade::error::StoreError;
//! # use evotrade::config::FirestoreConfig;
//! # struct SdkBackend;
//! # #[async_trait::async_trait]
//! # impl evotrade::store::StoreBackend for SdkBackend {
//! #     type Handle = ();
//! #     async fn connect(&self, _: &FirestoreConfig) -> Result<(), StoreError> { Ok(()) }
//! # }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! config.init_logging();
//!
//! let client = ResilientStoreClient::connect(
//!     SdkBackend,
//!     config.firestore.clone(),
//!     config.retry.clone(),
//! )
//! .await?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `testkit` - Canonical fakes (flaky backends/operations) for tests

pub mod cli;
pub mod config;
pub mod error;
pub mod store;

#[cfg(feature = "testkit")]
pub mod testkit;
