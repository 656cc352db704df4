//! # Error Types
//!
//! Domain-level error types for freshcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  freshcart-core errors (this file)                                     │
//! │  ├── AppError         - Closed taxonomy of remote failures             │
//! │  ├── ValidationError  - Local input failures (no network round trip)   │
//! │  └── OrderError       - What PlaceOrder can fail with                  │
//! │                                                                         │
//! │  freshcart-remote                                                      │
//! │  ├── Failure          - Raw transport/HTTP/decode failure              │
//! │  └── classify()       - Failure → AppError (single chokepoint)         │
//! │                                                                         │
//! │  Flow: reqwest error → Failure → classify → AppError → Result → UI     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `Display` is for logs; `user_message()` is what the UI shows
//! 3. Every `AppError` variant maps to exactly one fixed sentence

use thiserror::Error;

// =============================================================================
// App Error
// =============================================================================

/// Classified failure of a remote operation.
///
/// The set is closed: every transport, HTTP, or decoding failure ends up as
/// exactly one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Connectivity problem: refused connection, timeout, DNS, I/O.
    #[error("network unavailable")]
    Network,

    /// The API rate-limited us (HTTP 429).
    #[error("too many requests (retry after {retry_after_secs:?}s)")]
    TooManyRequests { retry_after_secs: Option<u64> },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message:?}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("serialization failed: {0:?}")]
    Serialization(Option<String>),

    /// Anything else.
    #[error("unknown error: {0:?}")]
    Unknown(Option<String>),
}

impl AppError {
    /// Creates an Http error, dropping a blank message.
    pub fn http(status: u16, message: Option<String>) -> Self {
        AppError::Http {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The sentence shown to the user for this error.
    ///
    /// ## Mapping
    /// ```text
    /// Network          → connectivity advice
    /// TooManyRequests  → retry-later advice
    /// Http 401/403/404/500 → fixed per status
    /// Http other       → server message, else "Unexpected server response (status)."
    /// Serialization    → embedded message, else generic apology
    /// Unknown          → embedded message, else generic apology
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network => {
                "Network error. Please check your internet connection and try again.".to_string()
            }
            AppError::TooManyRequests { .. } => {
                "You've hit the request limit. Please try again in a moment.".to_string()
            }
            AppError::Http { status, message } => match status {
                401 => "You are not authorized. Please sign in and try again.".to_string(),
                403 => "Access denied.".to_string(),
                404 => "Requested content was not found.".to_string(),
                500 => "Server error. Please try again later.".to_string(),
                _ => message
                    .clone()
                    .unwrap_or_else(|| format!("Unexpected server response ({status}).")),
            },
            AppError::Serialization(message) => message
                .clone()
                .unwrap_or_else(|| "We couldn't process the data from server.".to_string()),
            AppError::Unknown(message) => message
                .clone()
                .unwrap_or_else(|| "Something went wrong. Please try again.".to_string()),
        }
    }
}

/// Result of a repository call: a value or a classified failure.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The order has no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Order Error
// =============================================================================

/// Why placing an order failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Rejected locally, nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] AppError),
}

impl OrderError {
    /// The sentence shown inline on the order summary screen.
    pub fn user_message(&self) -> String {
        match self {
            OrderError::Validation(err) => err.to_string(),
            OrderError::Remote(err) => err.user_message(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
