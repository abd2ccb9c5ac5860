//! Error types for the Storefront SDK.
//!
//! Every fallible operation in this crate resolves to [`Result`], and every
//! failure is one of the [`SdkError`] variants. Nothing is retried or
//! swallowed internally: a configuration problem, a token-provider failure, a
//! transport failure, a malformed body, or an API error body all surface to
//! the caller through the same type.
//!
//! The platform reports request failures as an ordered sequence of error
//! objects. [`SdkError::details`] exposes that sequence uniformly, so callers
//! can present the platform's own diagnostics without matching on variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur while executing a platform request.
///
/// The variants map one-to-one onto the failure stages of the request
/// pipeline: configuration check, token acquisition, transport, response
/// decoding, and API-level rejection.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The injected [`ClientConfig`](crate::config::ClientConfig) is missing
    /// required fields or contains malformed values. The HTTP layer is never
    /// invoked when this is returned.
    #[error("configuration is missing or invalid: {0}")]
    ConfigurationInvalid(String),

    /// The token provider could not supply a bearer token. Wraps the
    /// provider's own error detail; no HTTP call to the API is made.
    #[error("token acquisition failed: {0}")]
    AuthenticationFailed(ErrorDetail),

    /// The HTTP exchange failed below the API level (connect, timeout, TLS,
    /// or an interrupted body read).
    #[error("transport failure: {0}")]
    TransportFailed(#[from] reqwest::Error),

    /// The server answered with a success status but the body did not match
    /// the expected shape.
    #[error("failed to decode response body: {0}")]
    DecodingFailed(#[source] serde_json::Error),

    /// The server answered with a non-success status. When the response
    /// carried a decodable API error body, `errors` holds its details
    /// verbatim and in order.
    #[error("server returned status {status}")]
    ServerError {
        /// HTTP status code of the response.
        status: u16,
        /// Ordered error details decoded from the API error body.
        errors: Vec<ErrorDetail>,
    },
}

impl SdkError {
    /// Returns the ordered error details for this failure.
    ///
    /// [`ServerError`](Self::ServerError) yields the API body's sequence
    /// unchanged; every other variant yields a single synthesized detail.
    #[must_use]
    pub fn details(&self) -> Vec<ErrorDetail> {
        match self {
            Self::ServerError { errors, .. } => errors.clone(),
            Self::AuthenticationFailed(detail) => vec![detail.clone()],
            Self::ConfigurationInvalid(message) => {
                vec![ErrorDetail::new(ErrorCode::General, message.clone())]
            }
            Self::TransportFailed(err) => {
                vec![ErrorDetail::new(ErrorCode::General, err.to_string())]
            }
            Self::DecodingFailed(err) => {
                vec![ErrorDetail::new(ErrorCode::InvalidInput, err.to_string())]
            }
        }
    }
}

/// One error entry as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error kind.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
}

impl ErrorDetail {
    /// Creates an error detail from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Creates a catch-all detail with [`ErrorCode::General`].
    pub fn general(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::General, message)
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Enumerated error kinds used in API error bodies.
///
/// Codes not known to this SDK deserialize as [`ErrorCode::Unknown`] rather
/// than failing the whole error decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Unspecified platform error.
    General,
    /// A request parameter or body field was rejected.
    InvalidInput,
    /// The requested operation is not allowed in the resource's state.
    InvalidOperation,
    /// The bearer token was rejected.
    InvalidToken,
    /// The token lacks the scope required for the operation.
    InsufficientScope,
    /// The addressed resource does not exist.
    ResourceNotFound,
    /// The resource version in the request is stale.
    ConcurrentModification,
    /// Any code this SDK does not recognize.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::General => "General",
            Self::InvalidInput => "InvalidInput",
            Self::InvalidOperation => "InvalidOperation",
            Self::InvalidToken => "InvalidToken",
            Self::InsufficientScope => "InsufficientScope",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::ConcurrentModification => "ConcurrentModification",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
