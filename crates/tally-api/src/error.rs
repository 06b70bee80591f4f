//! API client error types.

use tally_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the Tally API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token is missing, expired, or revoked.
    #[error("unauthorized, run `tally login` again")]
    Unauthorized,

    /// The token is valid but lacks access to the resource.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API returned another non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided message or raw body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A payload failed client-side validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
