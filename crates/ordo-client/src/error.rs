//! # Client Error Types
//!
//! Error types for the order service integration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Wire Format         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Transport      │  │  Json                   │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Note: a non-2xx status is NOT an error here. It is a                  │
//! │  `OrderOutcome::Rejected`, because the remote did answer.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the order service.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - All errors are `Send + Sync` for async compatibility
/// - Consumers of the collapsed contract never see these; they flow
///   into `OrderOutcome::Unreachable` and are logged
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration (bad base URL, zero timeout, ...).
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Connection / request-level failure from the HTTP transport.
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Payload serialization or response body parsing failed.
    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::InvalidConfig("base_url must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid client configuration: base_url must not be empty"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
