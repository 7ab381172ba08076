use thiserror::Error;

/// Result type for key store and codec operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors related to the core functionality of the URL shortener service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The short code was never issued by the store.
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}
