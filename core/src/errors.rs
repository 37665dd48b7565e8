//! Error types for SimpleCICD operations

use thiserror::Error;

/// Main error type for SimpleCICD core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by the HTTP server layer
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ServerError::StartupFailed("bind refused".to_string());
        assert_eq!(err.to_string(), "Server startup failed: bind refused");
    }
}
