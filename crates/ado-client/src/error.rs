//! Client error taxonomy
//!
//! Only two failure classes exist: the server answered with a non-success
//! status, or the request never completed (transport, timeout, malformed
//! body). A 404 on file content is not an error at this level; the REST
//! client maps it to an "absent" [`crate::ItemContent`] before callers
//! ever see it.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by [`crate::RestAdoClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server responded with a non-success status. The display
    /// message is the response body when the server sent one, matching
    /// what review pipelines expect to see on stderr.
    #[error("{message}")]
    Http {
        status: StatusCode,
        message: String,
    },

    /// The request failed before a response arrived, timed out, or the
    /// body could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be assembled.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Build an HTTP error from a status and raw response body, falling
    /// back to the status line when the body is blank.
    pub fn http(status: StatusCode, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("HTTP {status}")
        } else {
            trimmed.to_string()
        };
        ClientError::Http { status, message }
    }

    /// Status code of an HTTP error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
