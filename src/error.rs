// ⚠️ Error types for the format registry and its outer surfaces

use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the formatting functions themselves.
///
/// Formatting a number never fails; these cover lookups, registry
/// construction, configuration and batch I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown format id: {0}")]
    UnknownFormat(String),

    #[error("Duplicate format id: {0}")]
    DuplicateId(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
