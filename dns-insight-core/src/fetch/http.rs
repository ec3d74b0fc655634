//! reqwest-backed fetch client

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use super::FetchClient;
use crate::config::ApiConfig;
use crate::error::{PanelError, PanelResult};

/// Maximum number of characters of a body included in log output.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP client for the search API
///
/// Relative API paths are joined onto the configured base URL, so the panel
/// addresses the API the same way regardless of what fronts it.
pub struct HttpFetchClient {
    client: Client,
    base_url: Url,
}

impl HttpFetchClient {
    /// Build a client from the API settings
    pub fn new(config: &ApiConfig) -> PanelResult<Self> {
        let base_url = config.base()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PanelError::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> PanelResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PanelError::NetworkFailure {
                path: path.to_string(),
                detail: format!("invalid request path: {e}"),
            })
    }
}

#[async_trait]
impl FetchClient for HttpFetchClient {
    async fn get(&self, path: &str) -> PanelResult<String> {
        let url = self.resolve(path)?;
        log::debug!("GET {url}");

        let network_failure = |detail: String| PanelError::NetworkFailure {
            path: path.to_string(),
            detail,
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    network_failure(format!("request timed out: {e}"))
                } else {
                    network_failure(e.to_string())
                }
            })?;

        let status = response.status();
        log::debug!("Response Status: {status} for {path}");

        let body = response
            .text()
            .await
            .map_err(|e| network_failure(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            log::warn!("{path} returned HTTP {}", status.as_u16());
            return Err(network_failure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_for_log(&body)
            )));
        }

        log::debug!("Response Body: {}", truncate_for_log(&body));
        Ok(body)
    }
}

/// Shorten a body for logs and error details.
///
/// DKIM keys and SPF policies can be long; only the first characters are kept
/// together with the total byte length.
fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LIMIT) {
        None => body.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &body[..cut],
            body.len()
        ),
    }
}
