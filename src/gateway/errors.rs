//! Gateway error types.
//!
//! A closed taxonomy, mapped to transport status codes at the HTTP
//! boundary only.

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Storage operation errors
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// No storage connection was configured at startup
    #[error("storage unavailable: no connection configured")]
    StorageUnavailable,

    /// Driver-level failure during an insert
    #[error("write failure: {0}")]
    WriteFailure(String),

    /// Driver-level failure during a read
    #[error("read failure: {0}")]
    ReadFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(GatewayError::StorageUnavailable
            .to_string()
            .contains("no connection"));
        assert_eq!(
            GatewayError::WriteFailure("boom".into()).to_string(),
            "write failure: boom"
        );
        assert_eq!(
            GatewayError::ReadFailure("boom".into()).to_string(),
            "read failure: boom"
        );
    }
}
