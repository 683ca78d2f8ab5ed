//! Animated scroll intro section.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{escape_html, render_note};

/// Scroll intro view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollIntroSection {
    pub heading: String,
    pub subtitle: String,
    pub buzzwords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for ScrollIntroSection {
    fn default() -> Self {
        Self {
            heading: "Awaken your authentic expression".into(),
            subtitle: "Discover transformative experiences designed to deepen your connection with \
                       yourself and others, guided by expert coaching that honors your unique journey."
                .into(),
            buzzwords: vec![
                "Authentic".into(),
                "Empowered".into(),
                "Connected".into(),
                "Awakened".into(),
                "Transformed".into(),
                "Liberated".into(),
            ],
            error: None,
        }
    }
}

impl ScrollIntroSection {
    /// Fetch the intro copy; every field falls back individually.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_collection(ContentKind::ScrollIntro, &[], true).await {
            Ok(docs) => match docs.first() {
                Some(doc) => Self::from_document(doc),
                None => {
                    tracing::debug!("no scroll intro published, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!("failed to fetch scroll intro content: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map a normalized document onto the view model, field by field.
    pub fn from_document(doc: &Document) -> Self {
        let defaults = Self::default();
        Self {
            heading: doc.text_or(&["heading", "Heading"], &defaults.heading),
            subtitle: doc.text_or(&["subtitle", "Subtitle"], &defaults.subtitle),
            buzzwords: doc
                .string_list(&["buzzwords"])
                .filter(|words| !words.is_empty())
                .unwrap_or(defaults.buzzwords),
            error: None,
        }
    }

    pub fn render(&self) -> String {
        let buzzwords = self
            .buzzwords
            .iter()
            .map(|word| format!("<span>{}</span>", escape_html(word)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "<section id=\"intro\" class=\"scroll-intro\">\n\
             <h2>{heading}</h2>\n\
             <p>{subtitle}</p>\n\
             <div class=\"buzzwords\">{buzzwords}</div>\n\
             {note}</section>",
            heading = escape_html(&self.heading),
            subtitle = escape_html(&self.subtitle),
            note = render_note(&self.error),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_content() {
        let section = ScrollIntroSection::default();
        assert_eq!(section.heading, "Awaken your authentic expression");
        assert_eq!(section.buzzwords.len(), 6);
        assert_eq!(section.buzzwords[0], "Authentic");
    }

    #[test]
    fn test_from_document_partial_override() {
        let doc = Document::from_value(json!({"heading": "Custom heading"})).unwrap();
        let section = ScrollIntroSection::from_document(&doc);
        assert_eq!(section.heading, "Custom heading");
        // missing fields keep their defaults
        assert_eq!(section.buzzwords, ScrollIntroSection::default().buzzwords);
    }

    #[test]
    fn test_from_document_buzzwords() {
        let doc = Document::from_value(json!({"buzzwords": ["Bold", "Free"]})).unwrap();
        let section = ScrollIntroSection::from_document(&doc);
        assert_eq!(section.buzzwords, vec!["Bold".to_string(), "Free".to_string()]);
    }

    #[test]
    fn test_render_spans_buzzwords() {
        let html = ScrollIntroSection::default().render();
        assert!(html.contains("<span>Liberated</span>"));
    }
}
