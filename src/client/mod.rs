// Contentful GraphQL client with cache orchestration
// Author: kelexine (https://github.com/kelexine)

use crate::cache::{CachePayload, CacheStats, ContentfulCacher};
use crate::config::ClientConfig;
use crate::error::{ContentfulError, Result};
use crate::models::ContentfulRequest;
use crate::utils::logging::sanitize;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Client for the Contentful GraphQL content API.
///
/// Holds the endpoint and bearer token, and optionally serves responses
/// through any [`ContentfulCacher`] via [`ContentfulClient::get_or_fetch`].
/// Cloning is cheap; clones share the HTTP connection pool and cache stats.
#[derive(Clone)]
pub struct ContentfulClient {
    http_client: Client,
    url: String,
    token: String,
    operation_timeout: Duration,
    cache_max_age: Option<Duration>,
    stats: Arc<RwLock<CacheStats>>,
}

impl ContentfulClient {
    /// Create a client from an explicit configuration.
    ///
    /// The url and token are not validated until the first request, so they
    /// can still be supplied through [`with_url`](Self::with_url) and
    /// [`with_token`](Self::with_token).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .use_rustls_tls()
            .build()
            .map_err(|e| ContentfulError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            token: config.token.clone(),
            operation_timeout: config.operation_timeout(),
            cache_max_age: config.cache_max_age(),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        })
    }

    /// Create a client from the `CONTENTFUL_URL` and `CONTENTFUL_TOKEN`
    /// environment variables.
    ///
    /// Values set afterwards with `.with_url` or `.with_token` take priority,
    /// which is handy for switching to the preview token.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Deadline for a whole [`get_or_fetch`](Self::get_or_fetch) call.
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Treat cached entries older than `max_age` as missing.
    pub fn with_cache_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.cache_max_age = max_age;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Check that both the url and the token are set.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ContentfulError::UrlNotSet);
        }
        if self.token.is_empty() {
            return Err(ContentfulError::TokenNotSet);
        }

        Ok(())
    }

    /// Run a GraphQL query and decode the response body into `T`.
    ///
    /// Sends exactly one POST, without retries. A non-2xx status is reported
    /// as `ContentfulError::Api` instead of being decoded.
    pub async fn fetch<T: DeserializeOwned>(&self, request: &ContentfulRequest) -> Result<T> {
        self.validate()?;

        let body = serde_json::to_vec(request)?;

        debug!("Calling Contentful GraphQL API at {}", self.url);

        let response = self
            .http_client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let body = sanitize(&response_text);
            error!("Contentful API error: HTTP {} - Response body: {}", status, body);
            return Err(ContentfulError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Contentful response: {}", e);
            debug!(
                "Response body (first 500 chars): {}",
                sanitize(&response_text).chars().take(500).collect::<String>()
            );
            ContentfulError::Json(e)
        })
    }

    /// Serve `request` from `cacher` when possible, otherwise fetch it and
    /// write the result back under the same key.
    ///
    /// - Cache read failures and undecodable entries count as misses.
    /// - Fetch errors are returned unchanged.
    /// - A failed cache write fails the call even though the fetch succeeded.
    /// - The whole operation is bounded by the operation timeout.
    pub async fn get_or_fetch<C, T>(
        &self,
        cacher: &C,
        prefix: &str,
        request: &ContentfulRequest,
    ) -> Result<T>
    where
        C: ContentfulCacher + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        let timeout = self.operation_timeout;

        tokio::time::timeout(timeout, self.cached_fetch(cacher, prefix, request))
            .await
            .map_err(|_| ContentfulError::Timeout(timeout))?
    }

    async fn cached_fetch<C, T>(
        &self,
        cacher: &C,
        prefix: &str,
        request: &ContentfulRequest,
    ) -> Result<T>
    where
        C: ContentfulCacher + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        let key = cacher.generate_key(prefix, request);

        if let Some(target) = self.read_cache(cacher, &key).await {
            debug!("Cache hit: {}", key);
            self.stats.write().await.hits += 1;
            return Ok(target);
        }

        debug!("Cache miss for key: {}", key);
        self.stats.write().await.misses += 1;

        let target: T = self.fetch(request).await?;

        cacher.put(&key, CachePayload::encode(&target)?).await?;
        self.stats.write().await.writes += 1;

        Ok(target)
    }

    async fn read_cache<C, T>(&self, cacher: &C, key: &str) -> Option<T>
    where
        C: ContentfulCacher + ?Sized,
        T: DeserializeOwned,
    {
        let payload = match cacher.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {} from cache: {}", key, e);
                return None;
            }
        };

        if let Some(max_age) = self.cache_max_age {
            if payload.is_expired(max_age) {
                debug!("Cached entry {} is older than {:?}", key, max_age);
                return None;
            }
        }

        match payload.decode() {
            Ok(target) => Some(target),
            Err(e) => {
                warn!("Failed to decode cached payload {}: {}", key, e);
                None
            }
        }
    }

    /// Get cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }
}

impl fmt::Debug for ContentfulClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulClient")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .field("operation_timeout", &self.operation_timeout)
            .field("cache_max_age", &self.cache_max_age)
            .finish()
    }
}
