//! Transport-level errors returned by the API client.
//!
//! `NotFound` gets its own variant because the edit flow and repeated deletes
//! need to tell "the record is gone" apart from "the server misbehaved". Every
//! other non-2xx response lands in `Http` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered 404.
    #[error("resource not found")]
    NotFound,

    /// The server answered with a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected record shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
