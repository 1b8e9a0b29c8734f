//! Error types for the Inkflow SDK.
//!
//! This module provides a unified error type for all SDK operations,
//! separating transport failures, service rejections, decode failures
//! and client-side validation.

use thiserror::Error;

/// Result type for Inkflow operations.
pub type Result<T> = std::result::Result<T, InkflowError>;

/// Errors that can occur when using the Inkflow SDK.
#[derive(Error, Debug)]
pub enum InkflowError {
    /// The service rejected the request with a non-success status.
    #[error("API error ({status_code}): {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Message from the response body, or a fallback if the body
        /// carried none.
        message: String,
    },

    /// The underlying HTTP call could not complete (connection, DNS,
    /// timeout).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A local document file could not be read for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("unauthorized: invalid API key")]
    Unauthorized,

    /// A response body did not parse as JSON or lacked a required field.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request graph failed client-side validation before any
    /// network call was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl InkflowError {
    /// Returns true if this is a retryable error.
    ///
    /// Transport failures and 5xx responses are considered transient.
    /// The SDK never retries on its own; retry policy is up to the
    /// caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            InkflowError::Http(_) => true,
            InkflowError::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            InkflowError::Unauthorized
                | InkflowError::Api { status_code: 401, .. }
                | InkflowError::Api { status_code: 403, .. }
        )
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            InkflowError::Api { status_code, .. } => Some(*status_code),
            InkflowError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InkflowError::Api {
            status_code: 404,
            message: "Document not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Document not found");
    }

    #[test]
    fn test_is_retryable() {
        let server_error = InkflowError::Api {
            status_code: 500,
            message: "Internal server error".to_string(),
        };
        assert!(server_error.is_retryable());

        let not_found = InkflowError::Api {
            status_code: 404,
            message: "Not found".to_string(),
        };
        assert!(!not_found.is_retryable());

        let validation = InkflowError::Validation("no documents".to_string());
        assert!(!validation.is_retryable());
    }

    #[test]
    fn test_is_auth_error() {
        assert!(InkflowError::Unauthorized.is_auth_error());

        let api_403 = InkflowError::Api {
            status_code: 403,
            message: "Forbidden".to_string(),
        };
        assert!(api_403.is_auth_error());

        let decode = InkflowError::Decode("bad json".to_string());
        assert!(!decode.is_auth_error());
    }

    #[test]
    fn test_status_code() {
        let err = InkflowError::Api {
            status_code: 500,
            message: "Test".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(InkflowError::Unauthorized.status_code(), Some(401));

        let decode_err = InkflowError::Decode("bad payload".to_string());
        assert_eq!(decode_err.status_code(), None);
    }
}
