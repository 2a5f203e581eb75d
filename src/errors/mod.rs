//! Error types for the Celcoin client.
//!
//! Covers login failures, provider-reported API errors (classified through
//! [`codes`]), transport failures and (de)serialization problems.

pub mod codes;

use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

pub use codes::{classify, ProviderErrorKind};

/// Result type alias for Celcoin operations.
pub type CelcoinResult<T> = Result<T, CelcoinError>;

/// Error type for Celcoin client operations.
#[derive(Debug, Error)]
pub enum CelcoinError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },

    /// The login endpoint rejected the client-credentials request (HTTP 400).
    #[error("Bad login: {message}")]
    BadLogin {
        /// Provider-supplied message.
        message: String,
    },

    /// The login endpoint answered with an unexpected status.
    #[error("Login failed with HTTP {status}")]
    Login {
        /// HTTP status code.
        status: u16,
    },

    /// The API rejected the bearer token.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// The API returned an error envelope.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error code.
        code: String,
        /// Local classification of `code`.
        kind: ProviderErrorKind,
        /// Provider message, or the kind's default message.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Error message.
        message: String,
        /// Duration to wait before retrying.
        retry_after: Option<Duration>,
    },

    /// Gateway or upstream unavailable.
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error.
    #[error("Internal server error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },

    /// Request timeout.
    #[error("Request timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network/connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The caller cancelled the operation.
    #[error("Operation cancelled")]
    Cancelled,

    /// Response body did not match the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// Request body could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// Request rejected locally before being sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },

    /// Unclassified HTTP failure.
    #[error("Unknown error (HTTP {status}): {message}")]
    Unknown {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },
}

impl CelcoinError {
    /// Stable error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CELCOIN_CONFIG",
            Self::BadLogin { .. } => "CELCOIN_BAD_LOGIN",
            Self::Login { .. } => "CELCOIN_LOGIN",
            Self::Authentication { .. } => "CELCOIN_AUTH",
            Self::Api { .. } => "CELCOIN_API",
            Self::NotFound { .. } => "CELCOIN_NOT_FOUND",
            Self::RateLimit { .. } => "CELCOIN_RATE_LIMIT",
            Self::ServiceUnavailable { .. } => "CELCOIN_UNAVAILABLE",
            Self::Internal { .. } => "CELCOIN_INTERNAL",
            Self::Timeout { .. } => "CELCOIN_TIMEOUT",
            Self::Connection { .. } => "CELCOIN_CONNECTION",
            Self::Cancelled => "CELCOIN_CANCELLED",
            Self::Deserialization { .. } => "CELCOIN_DESERIALIZATION",
            Self::Serialization { .. } => "CELCOIN_SERIALIZATION",
            Self::Validation { .. } => "CELCOIN_VALIDATION",
            Self::Unknown { .. } => "CELCOIN_UNKNOWN",
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. }
            | Self::ServiceUnavailable { .. }
            | Self::Internal { .. }
            | Self::Timeout { .. }
            | Self::Connection { .. } => true,
            Self::Api { kind, .. } => kind.is_transient(),
            _ => false,
        }
    }

    /// Returns true for failures of the token exchange itself.
    pub fn is_login_error(&self) -> bool {
        matches!(self, Self::BadLogin { .. } | Self::Login { .. })
    }

    /// Provider error code, when the API sent one.
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Builds an `Api` error from a provider code and optional message.
    pub fn api(status: u16, code: impl Into<String>, message: Option<String>) -> Self {
        let code = code.into();
        let kind = classify(&code);
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| kind.default_message().to_string());
        Self::Api {
            status,
            code,
            kind,
            message,
        }
    }

    /// Maps a non-success API response to an error.
    pub fn from_response(status: u16, body: &[u8], headers: &HashMap<String, String>) -> Self {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            if let Some(detail) = envelope.error {
                return Self::api(status, detail.error_code, detail.message);
            }
        }

        let message = String::from_utf8_lossy(body).trim().to_string();
        let message = if message.is_empty() {
            format!("HTTP {} error", status)
        } else {
            message
        };

        match status {
            401 => Self::Authentication { message },
            404 => Self::NotFound { message },
            429 => Self::RateLimit {
                message,
                retry_after: headers
                    .get("retry-after")
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs),
            },
            500 => Self::Internal { message },
            502..=504 => Self::ServiceUnavailable { message },
            _ => Self::Unknown { status, message },
        }
    }

    pub(crate) fn deserialization(err: serde_json::Error, body: &[u8]) -> Self {
        Self::Deserialization {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).to_string(),
        }
    }
}

/// Error detail inside the provider envelope.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ApiErrorDetail {
    /// Provider error code.
    #[serde(rename = "errorCode", alias = "code")]
    pub error_code: String,
    /// Provider message.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

impl From<reqwest::Error> for CelcoinError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CelcoinError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() || err.is_request() {
            CelcoinError::Connection {
                message: err.to_string(),
            }
        } else {
            CelcoinError::Unknown {
                status: err.status().map(|s| s.as_u16()).unwrap_or(0),
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CelcoinError {
    fn from(err: serde_json::Error) -> Self {
        CelcoinError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for CelcoinError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        CelcoinError::Serialization {
            message: err.to_string(),
        }
    }
}
