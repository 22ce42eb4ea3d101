//! Process configuration: parameter bundles, exchange credentials, and
//! document-store connection settings.

pub mod evolution;
pub mod exchange;
pub mod logging;
pub mod settings;
pub mod store;
pub mod trading;

pub use evolution::EvolutionConfig;
pub use exchange::{ExchangeCredentials, ExchangesConfig};
pub use logging::LoggingConfig;
pub use settings::Config;
pub use store::{DataConfig, FirestoreConfig, RetryConfig};
pub use trading::TradingConfig;
