//! CMS connection probe.
//!
//! Checks whether the backend is reachable at all before the page starts
//! rendering, so operators get one clear log line instead of a dozen
//! per-section failures. Tries the admin health endpoint first, then the
//! admin panel, then the preferred alias of every registered content type.

use serde::Serialize;

use crate::cms::{CmsClient, ContentKind};

/// Outcome of a connection probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Error,
}

/// Result of [`CmsClient::check_connection`].
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionReport {
    pub status: ConnectionStatus,
    pub message: String,
    /// Logical content types the client knows about, when connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_types: Option<Vec<&'static str>>,
}

impl ConnectionReport {
    fn connected(message: String) -> Self {
        Self {
            status: ConnectionStatus::Connected,
            message,
            content_types: Some(ContentKind::ALL.iter().map(|kind| kind.name()).collect()),
        }
    }
}

impl CmsClient {
    /// Probe the backend and report how (or whether) it is reachable.
    ///
    /// Never fails; an unreachable backend yields an `Error`-status report.
    pub async fn check_connection(&self) -> ConnectionReport {
        if self.probe("/admin/health", true).await {
            return ConnectionReport::connected("Successfully connected to the CMS API.".into());
        }
        tracing::debug!("health endpoint unavailable, trying the admin panel");

        if self.probe("/admin", false).await {
            return ConnectionReport::connected(
                "Connected to the CMS admin panel, but API access may be limited. \
                 Check the API token and permissions."
                    .into(),
            );
        }
        tracing::debug!("admin panel unavailable, probing content endpoints");

        for kind in ContentKind::ALL {
            if let Ok(endpoint) = kind.endpoint(&self.config().api_prefix, 0)
                && self.probe(&endpoint, true).await
            {
                return ConnectionReport::connected(format!("Connected to the CMS API via the {kind} endpoint."));
            }
        }

        ConnectionReport {
            status: ConnectionStatus::Error,
            message: "Cannot connect to the CMS API. The server may be running but its endpoints are not accessible."
                .into(),
            content_types: None,
        }
    }

    /// GET a path and report whether it answered with a success status.
    async fn probe(&self, path: &str, with_auth: bool) -> bool {
        let url = format!("{}{}", self.config().base_url, path);
        let mut request = self.http.get(&url);
        if with_auth && let Some(token) = &self.config().api_token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::trace!("probe of {path} failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::CmsConfig;
    use dreamnest_core::ContentCache;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CmsClient {
        let config = CmsConfig { base_url: server.uri(), ..Default::default() };
        CmsClient::new(config, Arc::new(ContentCache::new(Duration::from_secs(60)))).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_connected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/health"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let report = client_for(&server).check_connection().await;
        assert_eq!(report.status, ConnectionStatus::Connected);
        assert_eq!(report.content_types.unwrap().len(), ContentKind::ALL.len());
    }

    #[tokio::test]
    async fn test_falls_back_to_content_probe() {
        let server = MockServer::start().await;
        // admin endpoints missing, but one content type answers
        Mock::given(method("GET"))
            .and(path("/api/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let report = client_for(&server).check_connection().await;
        assert_eq!(report.status, ConnectionStatus::Connected);
        assert!(report.message.contains("services"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_error() {
        let server = MockServer::start().await;
        // every probe gets the mock server's default 404

        let report = client_for(&server).check_connection().await;
        assert_eq!(report.status, ConnectionStatus::Error);
        assert!(report.content_types.is_none());
    }
}
