// HTTP client for the demo calculation service.
//
// Wraps `reqwest::Client` with URL construction and the status/body handling
// shared by every endpoint. Endpoint methods live in `endpoints.rs` as
// inherent impls, keeping this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Response body of a failing request, when the service bothers to
/// explain itself: `{"error": "..."}`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Async client for the demo calculation service.
///
/// Success/failure discrimination happens in one place ([`Self::decode`]):
/// non-2xx statuses become [`Error::Api`] with the backend's `error` message
/// when present, and 2xx bodies are decoded into the typed replies from
/// [`crate::types`].
#[derive(Debug)]
pub struct CalcClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CalcClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the service origin, e.g. `http://localhost:8080`.
    /// Non-http(s) origins are rejected here rather than on first use.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Self::validate_base_url(&base_url)?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Test seam: lets callers point an off-the-shelf client at a mock server.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Self::validate_base_url(&base_url)?;
        Ok(Self { http, base_url })
    }

    /// A usable service origin is an http(s) URL with a path-segment base.
    /// `mailto:` and `data:` URLs parse as valid `Url`s but cannot carry
    /// endpoint paths, so they are rejected up front.
    fn validate_base_url(base_url: &Url) -> Result<(), Error> {
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidInput {
                field: "server".into(),
                reason: format!("'{base_url}' is not an http(s) origin"),
            });
        }
        Ok(())
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a URL from path segments. Segments are percent-encoded, so
    /// user-supplied values (the greet name) are safe to pass through.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .expect("base URL validated at construction");
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request for a plain-text body.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message: Error::http_status_message(status.as_u16()),
            });
        }

        resp.text().await.map_err(Error::Transport)
    }

    /// Send a GET request and decode a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::decode(&url, resp).await
    }

    /// Send a POST request with a JSON body and decode a JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::decode(&url, resp).await
    }

    /// Shared status + body handling for JSON endpoints.
    ///
    /// On a non-2xx status the body is probed for an `{error}` explanation;
    /// absent one, the message is synthesized from the status code. On 2xx
    /// the body must decode as `T`.
    async fn decode<T: DeserializeOwned>(url: &Url, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| Error::http_status_message(status.as_u16()));
            return Err(Error::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
