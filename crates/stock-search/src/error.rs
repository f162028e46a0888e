//! Error types for ticker search operations

use thiserror::Error;

/// Errors raised while talking to the quote/news provider or loading
/// startup configuration.
#[derive(Debug, Error)]
pub enum StockError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP status {status}")]
    HttpStatus {
        status: u16,
    },

    /// Response body was not the JSON shape we expect
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider-level error body ("Error Message", "Information", "Note")
    #[error("Provider error: {0}")]
    Provider(String),

    /// Request URL could not be built from the configured base URL
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a startup resource
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StockError {
    /// Whether this error means the provider could not be reached or its
    /// answer could not be understood.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::HttpStatus { .. } | Self::Decode(_) | Self::Provider(_)
        )
    }
}

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;
