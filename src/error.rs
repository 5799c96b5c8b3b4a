use http::StatusCode;
use thiserror::Error;

/// Error types for the Tesla Owner API client.
#[derive(Error, Debug)]
pub enum TeslaError {
    /// The caller passed an invalid argument. Raised before any network
    /// activity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// The API answered with a non-success status code.
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// Status code returned by the API.
        status: StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// HTTP request failed in the default transport.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A custom transport failed to complete the exchange.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API endpoint could not be built from the base URI.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A success response whose body does not match the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The cancellation token fired before the exchange completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl TeslaError {
    /// Returns the status code for [`TeslaError::HttpStatus`] errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TeslaError::HttpStatus { status, .. } => Some(*status),
            TeslaError::HttpError(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the API rejected the credentials (401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Returns true if the call was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TeslaError::Cancelled)
    }
}

/// Result type for Tesla Owner API operations.
pub type TeslaResult<T> = Result<T, TeslaError>;
