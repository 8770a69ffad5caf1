use thiserror::Error;

/// Top-level error type for the `calcdash-api` crate.
///
/// Covers transport failures, HTTP-level failures, body decoding, and
/// client-side input validation. Business-level rejections (an HTTP-successful
/// response whose payload encodes an application error) are NOT errors -- they
/// are carried in the typed reply enums in [`crate::types`] so callers render
/// them distinctly from a failed request.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── HTTP status ─────────────────────────────────────────────────
    /// Non-2xx response from the service.
    ///
    /// `message` is the backend's `error` field when the body carried one,
    /// otherwise the synthesized `HTTP error! status: <code>`.
    #[error("{message} ({url})")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body could not be decoded, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Input ───────────────────────────────────────────────────────
    /// Client-side rejection of user input; no request was issued.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl Error {
    /// Synthesize the HTTP-failure message used when a non-2xx body carries
    /// no `error` field.
    pub(crate) fn http_status_message(status: u16) -> String {
        format!("HTTP error! status: {status}")
    }

    /// Returns `true` if this error is a transport-level failure
    /// (the request never reached the service or never returned).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the request was rejected client-side before any
    /// network traffic.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// The HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
