//! HTTP client for the managed store.
//!
//! Wraps reqwest::Client with access-key authentication, status
//! classification, and the read/insert operations the site performs. Each
//! logical operation issues exactly one request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use uip_core::config::{AppConfig, StoreConfig};
use uip_core::constants;
use uip_core::error::{UipError, UipResult};

use crate::query::SelectQuery;

/// HTTP client for the managed relational store.
#[derive(Clone, Debug)]
pub struct StoreClient {
    inner: reqwest::Client,
    /// REST root, e.g. "https://abcdefgh.supabase.co/rest/v1".
    rest_root: String,
}

impl StoreClient {
    /// Create a new StoreClient from store configuration.
    ///
    /// Fails with `MissingConfig` when the endpoint URL or access key is
    /// absent: without both, every read and write would fail anyway.
    pub fn new(config: &StoreConfig) -> UipResult<Self> {
        let url = AppConfig::sanitize_store_url(&config.url);
        if url.is_empty() {
            return Err(UipError::MissingConfig("store endpoint url".into()));
        }
        if config.api_key.trim().is_empty() {
            return Err(UipError::MissingConfig("store access key".into()));
        }

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(config.api_key.trim())
            .map_err(|_| UipError::Config("access key contains invalid characters".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
            .map_err(|_| UipError::Config("access key contains invalid characters".into()))?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let inner = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| UipError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            rest_root: format!("{url}/{}", constants::REST_PATH),
        })
    }

    /// The REST root URL this client talks to.
    pub fn rest_root(&self) -> &str {
        &self.rest_root
    }

    /// Execute a select and deserialize the returned rows.
    ///
    /// Zero rows is a successful, empty result, not an error.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &SelectQuery) -> UipResult<Vec<T>> {
        let url = format!("{}/{}", self.rest_root, query.to_path());
        debug!("GET {}", query.to_path());

        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(classify_error)?;
        let response = check_status(response).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| UipError::Serialization(format!("failed to parse rows: {e}")))
    }

    /// Insert a single row into a collection.
    ///
    /// The row is wrapped in a one-element array on the wire and no
    /// representation is requested back; submissions are write-only.
    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> UipResult<()> {
        let url = format!("{}/{table}", self.rest_root);
        debug!("POST {table}");

        let response = self
            .inner
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .map_err(classify_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Probe the store's REST root. Returns the round-trip latency.
    pub async fn health_check(&self) -> UipResult<Duration> {
        let start = std::time::Instant::now();
        let url = format!("{}/", self.rest_root);
        let response = self.inner.get(&url).send().await.map_err(classify_error)?;
        check_status(response).await?;
        Ok(start.elapsed())
    }
}

/// Check the HTTP status code and convert error responses to UipError.
async fn check_status(response: Response) -> UipResult<Response> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(UipError::AuthFailed(format!("store returned {status}")));
    }

    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        return Err(UipError::Store {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response)
}

/// Classify a reqwest error into a UipError variant.
fn classify_error(e: reqwest::Error) -> UipError {
    if e.is_timeout() {
        UipError::Timeout(e.to_string())
    } else if e.is_connect() {
        UipError::Http(format!("connection failed: {e}"))
    } else {
        UipError::Http(e.to_string())
    }
}
