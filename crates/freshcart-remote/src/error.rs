//! # Remote Error Types
//!
//! Error types for the remote layer.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Remote Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────────────┐ │
//! │  │  Failure (per request)  │        │  ConfigError (composition)      │ │
//! │  │                         │        │                                 │ │
//! │  │  Classified  Status     │        │  InvalidConfig   InvalidUrl     │ │
//! │  │  Transport   Decode     │        │  LoadFailed      SaveFailed     │ │
//! │  │  Other                  │        │  ClientBuild                    │ │
//! │  └───────────┬─────────────┘        └─────────────────────────────────┘ │
//! │              │ classify()                                               │
//! │              ▼                                                          │
//! │        AppError (freshcart-core)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Failure` is never shown to anyone. It only exists between the gateway
//! and the classifier.

use freshcart_core::AppError;
use thiserror::Error;

/// Result type alias for gateway operations.
pub type RemoteResult<T> = Result<T, Failure>;

/// Result type alias for configuration and composition.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Failure
// =============================================================================

/// A raw, unclassified gateway failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Already classified; passes through the classifier unchanged.
    #[error(transparent)]
    Classified(AppError),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Status {
        status: u16,
        body: Option<String>,
        retry_after_secs: Option<u64>,
    },

    /// Connection refused, timeout, DNS, broken pipe.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body arrived but could not be decoded.
    #[error("decode failure: {0}")]
    Decode(String),

    /// Anything the other variants don't describe.
    #[error("{0}")]
    Other(String),
}

impl Failure {
    /// Non-2xx response. Blank bodies are dropped.
    pub fn status(status: u16, body: Option<String>, retry_after_secs: Option<u64>) -> Self {
        Failure::Status {
            status,
            body: body.filter(|b| !b.trim().is_empty()),
            retry_after_secs,
        }
    }
}

// =============================================================================
// Failure Conversions
// =============================================================================

impl From<AppError> for Failure {
    fn from(err: AppError) -> Self {
        Failure::Classified(err)
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            Failure::Transport(err.to_string())
        } else if err.is_decode() {
            Failure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Failure::status(status.as_u16(), None, None)
        } else {
            Failure::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Failure::Transport(err.to_string())
        } else {
            Failure::Decode(err.to_string())
        }
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Failure::Transport(err.to_string())
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading config or building a gateway.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds an unusable value.
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// The base URL doesn't parse or isn't http(s).
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::InvalidUrl(err.to_string())
    }
}
