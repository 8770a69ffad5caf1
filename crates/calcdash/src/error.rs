//! CLI error types with miette diagnostics.
//!
//! Maps `calcdash_api::Error` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const API: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the calculation service at {url}")]
    #[diagnostic(
        code(calcdash::connection_failed),
        help(
            "Check that the service is running and accessible.\n\
             URL: {url}\n\
             Override with --server or CALCDASH_SERVER."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(calcdash::timeout),
        help("Increase the timeout with --timeout or check service responsiveness.")
    )]
    Timeout,

    // ── Service ──────────────────────────────────────────────────────
    #[error("Service error (HTTP {status}) from {url}: {message}")]
    #[diagnostic(code(calcdash::api_error))]
    ApiError {
        url: String,
        status: u16,
        message: String,
    },

    /// HTTP success, but the payload itself encoded a refusal.
    #[error("The service rejected the request: {reason}")]
    #[diagnostic(
        code(calcdash::rejected),
        help("The request reached the service; fix the input and resubmit.")
    )]
    Rejected { reason: String },

    #[error("Could not decode the service response: {message}")]
    #[diagnostic(
        code(calcdash::decode),
        help("The service may be a different version, or something else answered on this port.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(calcdash::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(calcdash::config))]
    Config(Box<figment::Error>),

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(calcdash::config_exists),
        help("Edit the file directly, or delete it and re-run `calcdash config init`.")
    )]
    ConfigExists { path: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::ApiError { .. } => exit_code::API,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── api error → CliError mapping ─────────────────────────────────────

impl From<calcdash_api::Error> for CliError {
    fn from(err: calcdash_api::Error) -> Self {
        match err {
            calcdash_api::Error::Transport(e) => {
                if e.is_timeout() {
                    return Self::Timeout;
                }
                let url = e
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string);
                Self::ConnectionFailed {
                    url,
                    source: e.into(),
                }
            }

            calcdash_api::Error::InvalidUrl(e) => Self::Validation {
                field: "server".into(),
                reason: format!("invalid URL: {e}"),
            },

            calcdash_api::Error::Api {
                url,
                status,
                message,
            } => Self::ApiError {
                url,
                status,
                message,
            },

            calcdash_api::Error::Deserialization { message, .. } => Self::Decode { message },

            calcdash_api::Error::InvalidInput { field, reason } => {
                Self::Validation { field, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_names_the_failing_url_and_status() {
        // An aggregate batch failure must tell the user which endpoint
        // failed, not just the status.
        let err = CliError::from(calcdash_api::Error::Api {
            url: "http://localhost:8080/sum".into(),
            status: 503,
            message: "HTTP error! status: 503".into(),
        });

        let rendered = err.to_string();
        assert!(
            rendered.contains("http://localhost:8080/sum"),
            "missing url in: {rendered}"
        );
        assert!(rendered.contains("503"), "missing status in: {rendered}");
        assert_eq!(err.exit_code(), exit_code::API);
    }
}
