//! Configuration file handling.
//!
//! A small TOML file (server URL + timeout) merged with `CALCDASH_`
//! environment variables via figment. CLI flags override both.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use calcdash_api::{CalcClient, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The demo backend's default origin.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── TOML config struct ───────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Service base URL.
    pub server: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.into(),
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "calcdash", "calcdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("calcdash");
            p.push("config.toml");
            p
        })
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the config from defaults + file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("CALCDASH_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults when the file is broken or absent.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Write a default config file. Refuses to clobber an existing one.
pub fn init_config() -> Result<PathBuf, CliError> {
    let path = config_path();
    if path.exists() {
        return Err(CliError::ConfigExists {
            path: path.display().to_string(),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, toml::to_string_pretty(&Config::default())?)?;
    Ok(path)
}

// ── Client construction ──────────────────────────────────────────────

/// Build a `CalcClient` from the config file and CLI flag overrides.
///
/// This is the single boundary where CLI configuration crosses into
/// api-crate types.
pub fn build_client(global: &GlobalOpts) -> Result<CalcClient, CliError> {
    let config = load_config_or_default();

    let server = global.server.as_deref().unwrap_or(&config.server);
    let url: Url = server.parse().map_err(|e| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL '{server}': {e}"),
    })?;

    let timeout = Duration::from_secs(global.timeout.unwrap_or(config.timeout));
    let transport = TransportConfig::with_timeout(timeout);

    Ok(CalcClient::new(url, &transport)?)
}
