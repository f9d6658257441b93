use thiserror::Error;

/// Runtime-level failures surfaced while wiring the core at startup.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is missing or invalid (e.g. empty client id,
    /// bad log filter).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required bridge implementation was not injected.
    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
