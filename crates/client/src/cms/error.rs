//! CMS client error types.

use std::sync::Arc;

use crate::cms::ContentKind;

/// Errors from the CMS content client.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// No alias at the requested index; resolution candidates exhausted.
    #[error("no alias at index {index} for content type {kind}")]
    AliasIndex { kind: ContentKind, index: usize },

    /// Non-success HTTP response. The message comes from the backend's
    /// error body when it could be parsed, else from the status line.
    #[error("API error: {message}")]
    Http { status: u16, message: String },

    /// Response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Every alias for a content type failed; carries the last failure.
    #[error("all aliases failed for content type {kind}: {source}")]
    Exhausted {
        kind: ContentKind,
        #[source]
        source: Box<CmsError>,
    },
}

impl From<reqwest::Error> for CmsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { CmsError::Timeout } else { CmsError::Network(Arc::new(err)) }
    }
}
