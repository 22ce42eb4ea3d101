use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", names.join(", "))]
    MissingEnv { names: Vec<String> },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("exchange '{name}' is not configured")]
    ExchangeNotConfigured { name: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Document-store errors.
///
/// `Backend` carries the underlying service error text; the retry wrapper
/// returns the final operation failure unchanged rather than re-wrapping it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store not initialized")]
    NotInitialized,

    #[error("document store initialization failed after {attempts} attempts: {source}")]
    InitExhausted {
        attempts: u32,
        #[source]
        source: Box<StoreError>,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
