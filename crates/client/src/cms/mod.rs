//! Strapi-compatible CMS content client.
//!
//! Provides the cached fetch layer and the alias-retrying orchestrator the
//! site sections consume.
//!
//! ### Specification
//!
//! - **Endpoint**: `{base_url}{api_prefix}/{collection}?{query}`
//! - **Authentication**: optional `Authorization: Bearer` header.
//! - **Caching**: successful responses are memoized in an injected
//!   in-memory cache keyed by endpoint + request options; a live entry is
//!   served without touching the network.
//! - **Normalization**: every payload passes through [`normalize`] exactly
//!   once, before it is cached or returned.
//! - **Alias retry**: each logical content type carries several plausible
//!   collection names; they are tried strictly in order and the first
//!   non-error response wins.

pub mod error;
pub mod health;
pub mod normalize;
pub mod query;
pub mod registry;

pub use error::CmsError;
pub use health::{ConnectionReport, ConnectionStatus};
pub use registry::ContentKind;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{StatusCode, header};
use serde::Serialize;
use serde_json::Value;

use dreamnest_core::cache::key::compute_cache_key;
use dreamnest_core::{AppConfig, Content, ContentCache, Document};

/// Default base URL for a local CMS instance.
const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Default API path prefix.
const DEFAULT_API_PREFIX: &str = "/api";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "dreamnest-web/0.1";

/// CMS client configuration.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS backend (no trailing slash).
    pub base_url: String,
    /// API path prefix (default: /api).
    pub api_prefix: String,
    /// Bearer token; requests go out unauthenticated when unset.
    pub api_token: Option<String>,
    /// User-agent string.
    pub user_agent: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            api_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl From<&AppConfig> for CmsConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_prefix: config.api_prefix.clone(),
            api_token: config.api_token.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Per-request options merged into the outgoing HTTP request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestOptions {
    /// Extra headers; these override the client defaults on collision.
    pub headers: Vec<(String, String)>,
}

/// CMS content client.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    config: CmsConfig,
    cache: Arc<ContentCache>,
}

impl CmsClient {
    /// Create a new client with the given configuration and response cache.
    pub fn new(config: CmsConfig, cache: Arc<ContentCache>) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(CmsError::from)?;

        Ok(Self { http, config, cache })
    }

    /// The active configuration.
    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// The injected response cache.
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Fetch a fully-qualified endpoint, going through the cache.
    ///
    /// With `use_cache`, a live cached entry is returned without any
    /// network I/O; otherwise the endpoint is fetched, the payload
    /// normalized, and the result stored back under the composite key.
    pub async fn request(
        &self, endpoint: &str, options: &RequestOptions, use_cache: bool,
    ) -> Result<Content, CmsError> {
        let options_json = serde_json::to_string(options).unwrap_or_default();
        let cache_key = compute_cache_key(endpoint, &options_json);

        if use_cache && let Some(hit) = self.cache.get(&cache_key) {
            tracing::debug!("cache hit for {endpoint}");
            return Ok(hit);
        }

        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!("GET {url}");

        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));

        if let Some(token) = &self.config.api_token {
            match header::HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!("api token is not a valid header value, sending unauthenticated"),
            }
        }

        // caller headers use insert, so they replace the defaults on collision
        for (name, value) in &options.headers {
            match (header::HeaderName::try_from(name.as_str()), header::HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("skipping invalid request header {name}"),
            }
        }

        let response = self.http.get(&url).headers(headers).send().await.map_err(CmsError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Http { status: status.as_u16(), message: error_message(status, &body) });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CmsError::Parse(e.to_string()))?;
        let content = normalize::normalize_response(payload);

        if use_cache {
            self.cache.insert(&cache_key, content.clone());
        }

        Ok(content)
    }

    /// Fetch a logical content type, trying each alias in order.
    ///
    /// Attempts are strictly sequential; the first success short-circuits.
    /// When every candidate fails the last failure is surfaced inside
    /// [`CmsError::Exhausted`].
    pub async fn fetch(
        &self, kind: ContentKind, params: &[(&str, &str)], use_cache: bool,
    ) -> Result<Content, CmsError> {
        let mut last_error = None;

        for index in 0.. {
            let endpoint = match kind.endpoint(&self.config.api_prefix, index) {
                Ok(endpoint) => endpoint,
                Err(_) => break, // candidates exhausted
            };

            let merged = query::merge_params(kind.default_params(), params);
            let full_endpoint = format!("{endpoint}?{}", query::encode(&merged));

            match self.request(&full_endpoint, &RequestOptions::default(), use_cache).await {
                Ok(content) => return Ok(content),
                Err(err) => {
                    tracing::debug!("alias {} of {kind} failed: {err}", kind.aliases()[index]);
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(source) => Err(CmsError::Exhausted { kind, source: Box::new(source) }),
            None => Err(CmsError::AliasIndex { kind, index: 0 }),
        }
    }

    /// Fetch a collection type as a list of normalized documents.
    pub async fn fetch_collection(
        &self, kind: ContentKind, params: &[(&str, &str)], use_cache: bool,
    ) -> Result<Vec<Document>, CmsError> {
        Ok(self.fetch(kind, params, use_cache).await?.into_documents())
    }

    /// Fetch a single type as one normalized document, when the payload
    /// yields one.
    pub async fn fetch_single(
        &self, kind: ContentKind, params: &[(&str, &str)], use_cache: bool,
    ) -> Result<Option<Document>, CmsError> {
        Ok(self.fetch(kind, params, use_cache).await?.into_document())
    }
}

/// Extract a human-readable message from a non-success response body.
///
/// The backend wraps errors as `{"error": {"message": ...}}`; fall back to
/// the whole JSON body, then to the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(error_body) => error_body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error_body.to_string()),
        Err(_) => format!("Status: {} {}", status.as_u16(), status.canonical_reason().unwrap_or("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, ttl: Duration) -> CmsClient {
        let config = CmsConfig { base_url: server.uri(), ..Default::default() };
        CmsClient::new(config, Arc::new(ContentCache::new(ttl))).unwrap()
    }

    #[tokio::test]
    async fn test_alias_order_first_success_wins() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/hero"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/heroes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": 5, "attributes": {"title": "Welcome", "Title": null}}
            })))
            .expect(1)
            .mount(&server)
            .await;
        // never reached: the previous alias already succeeded
        Mock::given(method("GET"))
            .and(path("/api/homepage-hero"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let doc = client
            .fetch_single(ContentKind::Hero, &[("populate", "*")], true)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(doc.id_int(), Some(5));
        assert_eq!(doc.text(&["title", "Title"]), Some("Welcome"));
        assert_eq!(doc.get("Title"), Some(&json!(null)));
    }

    #[tokio::test]
    async fn test_cache_hit_and_expiry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1, "attributes": {"title": "Coaching"}}]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(150));

        let first = client.fetch_collection(ContentKind::Services, &[], true).await.unwrap();
        let second = client.fetch_collection(ContentKind::Services, &[], true).await.unwrap();
        assert_eq!(first, second);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let third = client.fetch_collection(ContentKind::Services, &[], true).await.unwrap();
        assert_eq!(first, third);
        // mock expectation (2 requests for 3 calls) is verified on drop
    }

    #[tokio::test]
    async fn test_cache_disabled_always_fetches() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        client.fetch_collection(ContentKind::Services, &[], false).await.unwrap();
        client.fetch_collection(ContentKind::Services, &[], false).await.unwrap();
    }

    #[tokio::test]
    async fn test_exhaustion_carries_last_failure() {
        let server = MockServer::start().await;

        for alias in ContentKind::Hero.aliases() {
            Mock::given(method("GET"))
                .and(path(format!("/api/{alias}")))
                .respond_with(
                    ResponseTemplate::new(404).set_body_json(json!({"error": {"message": format!("{alias} not found")}})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server, Duration::from_secs(60));
        let err = client.fetch(ContentKind::Hero, &[], true).await.unwrap_err();

        match err {
            CmsError::Exhausted { kind, source } => {
                assert_eq!(kind, ContentKind::Hero);
                match *source {
                    CmsError::Http { status, ref message } => {
                        assert_eq!(status, 404);
                        // the last alias attempted
                        assert_eq!(message, "homepage-hero not found");
                    }
                    ref other => panic!("unexpected source error: {other}"),
                }
            }
            other => panic!("expected exhaustion, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_bearer_token_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/about"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})))
            .expect(1)
            .mount(&server)
            .await;

        let config =
            CmsConfig { base_url: server.uri(), api_token: Some("test-token".into()), ..Default::default() };
        let client = CmsClient::new(config, Arc::new(ContentCache::new(Duration::from_secs(60)))).unwrap();

        let doc = client.fetch_single(ContentKind::About, &[], true).await.unwrap();
        assert!(doc.is_some());
    }

    #[tokio::test]
    async fn test_caller_headers_are_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/global"))
            .and(header("X-Preview", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let options = RequestOptions { headers: vec![("X-Preview".into(), "1".into())] };
        let content = client.request("/api/global", &options, false).await.unwrap();
        assert!(content.into_document().is_some());
    }

    #[tokio::test]
    async fn test_error_body_message_extraction() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/hero"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "boom"}})))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let err = client.request("/api/hero", &RequestOptions::default(), false).await.unwrap_err();
        assert!(matches!(err, CmsError::Http { status: 500, ref message } if message.as_str() == "boom"));
    }

    #[tokio::test]
    async fn test_error_status_line_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/hero"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let err = client.request("/api/hero", &RequestOptions::default(), false).await.unwrap_err();
        assert!(matches!(err, CmsError::Http { status: 502, ref message } if message.contains("502")));
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/hero"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let err = client.request("/api/hero", &RequestOptions::default(), false).await.unwrap_err();
        assert!(matches!(err, CmsError::Parse(_)));
    }

    #[tokio::test]
    async fn test_default_query_params_are_applied() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .and(wiremock::matchers::query_param("sort", "publishedAt:desc"))
            .and(wiremock::matchers::query_param("populate", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(60));
        let docs = client.fetch_collection(ContentKind::Posts, &[], true).await.unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_error_message_plain_json_body() {
        let message = error_message(StatusCode::FORBIDDEN, r#"{"detail": "nope"}"#);
        assert_eq!(message, r#"{"detail":"nope"}"#);
    }
}
