// Shared transport configuration for building reqwest::Client instances.

use std::time::Duration;

use crate::error::Error;

/// Transport settings shared by every `CalcClient`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Create a config with the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("calcdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Transport)
    }
}
