//! Error types for the inack client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single remote API call.
///
/// The variants keep the transport, HTTP-status and decoding failures apart so
/// that callers can apply policy (e.g. invalidate the session) instead of the
/// client doing it behind their back. The type carries no `reqwest` types so
/// the core crate stays transport-free.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect/timeout/DNS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status other than an auth failure.
    #[error("server answered with status {code}")]
    Status { code: u16 },

    /// The server rejected the credentials or the bearer token.
    #[error("unauthorized")]
    Unauthorized,

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The response decoded but did not carry the expected content
    /// (e.g. the register acknowledgement message differed).
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// Maps an HTTP status code to the matching error variant.
    ///
    /// 401/403 are plain auth rejections; 422 is what flask-jwt-extended
    /// answers for a malformed or expired bearer token.
    pub fn from_status(code: u16) -> Self {
        match code {
            401 | 403 | 422 => Self::Unauthorized,
            code => Self::Status { code },
        }
    }

    /// Creates a Transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an UnexpectedResponse error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse(message.into())
    }

    /// Whether a failed *authorized* call must leave the session ended.
    ///
    /// Any response the server actually produced with a non-success status
    /// counts; a transport or decode failure does not, so a network outage
    /// never logs the user out.
    pub fn is_session_invalidating(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Status { .. })
    }
}

/// A shared error type for the entire inack client.
///
/// Provides typed, structured variants with automatic conversion from common
/// error types via `From`.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum InackError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Local storage error (token persistence)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error (paths, base origin)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote API error
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InackError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this wraps an API error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for InackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for InackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for InackError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for InackError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Convenient Result alias for inack operations.
pub type Result<T> = std::result::Result<T, InackError>;
