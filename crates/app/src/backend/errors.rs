//! Backend errors.

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false` or without the expected data.
    #[error("request rejected by backend: {message}")]
    Rejected {
        /// Message reported by the backend, empty when none was sent.
        message: String,
    },

    /// The configured base URL cannot hold the session cookie.
    #[error("invalid backend url {url}: {reason}")]
    InvalidUrl {
        /// Offending URL.
        url: String,

        /// Parser explanation.
        reason: String,
    },
}

impl BackendError {
    pub(crate) fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.unwrap_or_default(),
        }
    }
}
