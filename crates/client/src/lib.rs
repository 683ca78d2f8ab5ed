//! CMS client for dreamnest-web.
//!
//! This crate provides the content-type registry, query building, response
//! normalization, and the cached, alias-retrying fetch client shared by the
//! site sections.

pub mod cms;

pub use cms::{
    CmsClient, CmsConfig, CmsError, ConnectionReport, ConnectionStatus, ContentKind, RequestOptions,
};
