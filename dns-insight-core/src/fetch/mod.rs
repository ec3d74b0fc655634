//! Fetch client
//!
//! A fetch issues one GET, decodes the JSON body into the type the caller asks
//! for, and resolves to exactly one of two continuations:
//! - `on_success(payload, context)`
//! - `on_failure(error, context)`
//!
//! The context is opaque here and comes back unmodified, so the caller can tell
//! which pipeline issued the request without matching on URLs. There is no
//! retry, no cancellation and no coalescing of identical requests.

mod http;

pub use http::HttpFetchClient;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{PanelError, PanelResult};

/// Transport behind the [`Fetcher`]
///
/// Implementation:
/// - `HttpFetchClient` (reqwest)
/// - test doubles returning scripted bodies
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// GET a relative API path and return the response body
    ///
    /// # Arguments
    /// * `path` - path and query, e.g. `/api/v1.0/dns?dnsType=mx&list=1`
    async fn get(&self, path: &str) -> PanelResult<String>;
}

/// Parse a JSON body into the schema of the endpoint mode
pub fn parse_json<T>(body: &str, path: &str) -> PanelResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed for {path}: {e}");
        PanelError::MalformedResponse {
            path: path.to_string(),
            detail: e.to_string(),
        }
    })
}

/// Continuation-style fetch front end shared by all pipelines
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<dyn FetchClient>,
}

impl Fetcher {
    #[must_use]
    pub fn new(client: Arc<dyn FetchClient>) -> Self {
        Self { client }
    }

    /// GET and decode, awaiting the result
    pub async fn get_json<T>(&self, path: &str) -> PanelResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.client.get(path).await?;
        parse_json(&body, path)
    }

    /// Issue a request in the background and resolve it through a continuation.
    ///
    /// Must be called from within a tokio runtime. The calling pipeline returns
    /// immediately; exactly one of `on_success` / `on_failure` runs later on the
    /// runtime, receiving `context` back unchanged.
    pub fn fetch<T, C, S, F>(&self, path: String, context: C, on_success: S, on_failure: F)
    where
        T: DeserializeOwned + Send + 'static,
        C: Send + 'static,
        S: FnOnce(T, C) + Send + 'static,
        F: FnOnce(PanelError, C) + Send + 'static,
    {
        let fetcher = self.clone();
        tokio::spawn(async move {
            match fetcher.get_json::<T>(&path).await {
                Ok(payload) => on_success(payload, context),
                Err(e) => on_failure(e, context),
            }
        });
    }
}
