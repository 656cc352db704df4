//! # Error Classifier
//!
//! Turns any gateway failure into an [`AppError`].
//!
//! ## Rules (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Failure                           AppError                             │
//! │  ───────                           ────────                             │
//! │  Classified(e)              ─────► e (unchanged)                        │
//! │  Status 429                 ─────► TooManyRequests(retry_after?)        │
//! │  Status other non-2xx       ─────► Http(status, body if non-blank)      │
//! │  Transport                  ─────► Network                              │
//! │  Decode(detail)             ─────► Serialization(detail)                │
//! │  Other(detail)              ─────► Unknown(detail)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `classify` is total: it never panics and always returns a value. Feeding
//! its output back in returns the same error.

use freshcart_core::AppError;
use tracing::debug;

use crate::error::Failure;

const TOO_MANY_REQUESTS: u16 = 429;

/// Classifies a raw failure.
///
/// ## Example
/// ```rust
/// use freshcart_core::AppError;
/// use freshcart_remote::{classify, Failure};
///
/// let err = classify(Failure::status(429, None, Some(3)));
/// assert_eq!(err, AppError::TooManyRequests { retry_after_secs: Some(3) });
/// assert_eq!(classify(err.clone()), err);
/// ```
pub fn classify(failure: impl Into<Failure>) -> AppError {
    let failure = failure.into();

    let error = match failure {
        Failure::Classified(error) => error,
        Failure::Status {
            status: TOO_MANY_REQUESTS,
            retry_after_secs,
            ..
        } => AppError::TooManyRequests { retry_after_secs },
        Failure::Status { status, body, .. } => AppError::http(status, body),
        Failure::Transport(detail) => {
            debug!(%detail, "Transport failure classified as network error");
            AppError::Network
        }
        Failure::Decode(detail) => AppError::Serialization(non_blank(detail)),
        Failure::Other(detail) => AppError::Unknown(non_blank(detail)),
    };

    debug!(error = %error, "Classified gateway failure");
    error
}

fn non_blank(detail: String) -> Option<String> {
    if detail.trim().is_empty() {
        None
    } else {
        Some(detail)
    }
}
