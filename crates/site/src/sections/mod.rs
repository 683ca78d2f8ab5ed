//! Page sections.
//!
//! One module per section of the site. Each maps a normalized CMS payload
//! onto a typed view model whose `Default` is the hand-written fallback
//! content, so a failed or misshapen fetch still renders a complete section
//! plus a non-fatal diagnostic note. No section ever propagates an error.

pub mod about;
pub mod audience;
pub mod featured;
pub mod features;
pub mod hero;
pub mod posts;
pub mod scroll_intro;
pub mod services;
pub mod testimonials;

use dreamnest_core::Document;
use serde::Serialize;

/// Image reference resolved from a media relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionImage {
    pub url: String,
    pub alt: String,
}

impl SectionImage {
    pub fn new(url: &str, alt: &str) -> Self {
        Self { url: url.to_string(), alt: alt.to_string() }
    }
}

/// Resolve a media relation field into an image.
///
/// Returns `None` when the field is missing or is an empty relation (the
/// normalizer leaves those wrapped as `{data: null}`), so the caller falls
/// back to its default image.
pub fn media_image(doc: &Document, key: &str, default_alt: &str) -> Option<SectionImage> {
    let media = doc.document(key)?;
    if media.get("data").is_some() {
        return None;
    }
    Some(SectionImage {
        url: media.text_or(&["url"], ""),
        alt: media.text_or(&["alternativeText"], default_alt),
    })
}

/// Escape text for embedding in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the standard non-fatal diagnostic note shown under a section
/// that fell back to default content.
pub fn render_note(error: &Option<String>) -> String {
    match error {
        Some(message) => {
            format!("<p class=\"section-note\">Note: Using default content. {}</p>", escape_html(message))
        }
        None => String::new(),
    }
}
