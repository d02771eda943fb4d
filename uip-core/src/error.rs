//! Global error types for the Unique IP Solutions client.
//!
//! All error categories across the workspace are unified into a single
//! `UipError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using UipError.
pub type UipResult<T> = Result<T, UipError>;

/// Unified error type covering all error categories in the client.
#[derive(Error, Debug)]
pub enum UipError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The managed store rejected the request.
    #[error("store error (status {status}): {message}")]
    Store {
        /// HTTP status code.
        status: u16,
        /// Error message from the store.
        message: String,
    },

    /// The access key was rejected.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    // -- Form errors --
    /// A form field failed validation before submission.
    #[error("validation failed: {0}")]
    Validation(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UipError {
    /// Whether this error came from the network/store boundary, as opposed
    /// to local configuration or validation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            UipError::Http(_)
                | UipError::Timeout(_)
                | UipError::Store { .. }
                | UipError::AuthFailed(_)
        )
    }
}

impl From<serde_json::Error> for UipError {
    fn from(e: serde_json::Error) -> Self {
        UipError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for UipError {
    fn from(e: toml::de::Error) -> Self {
        UipError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UipError::MissingConfig("store url".to_string());
        assert_eq!(err.to_string(), "missing configuration: store url");

        let err = UipError::Store {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "store error (status 503): unavailable");
    }

    #[test]
    fn test_is_remote() {
        assert!(UipError::Timeout("t".into()).is_remote());
        assert!(UipError::AuthFailed("k".into()).is_remote());
        assert!(!UipError::Validation("name".into()).is_remote());
        assert!(!UipError::Config("bad".into()).is_remote());
    }
}
