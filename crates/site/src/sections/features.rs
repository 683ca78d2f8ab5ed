//! Features section ("why choose us").

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{SectionImage, escape_html, media_image, render_note};

/// A single feature card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<SectionImage>,
}

impl FeatureItem {
    fn from_document(doc: &Document) -> Self {
        let title = doc.text_or(&["title", "Title"], "");
        let icon = media_image(doc, "icon", &title);
        Self {
            id: doc.id_int().unwrap_or_default(),
            title,
            description: doc.text_or(&["description", "Description"], ""),
            icon,
        }
    }
}

/// Features view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesSection {
    pub title: String,
    pub description: String,
    pub items: Vec<FeatureItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Self {
            title: "Why Choose Us".into(),
            description: "Discover what makes our approach unique and effective.".into(),
            items: Vec::new(),
            error: None,
        }
    }
}

impl FeaturesSection {
    /// Fetch the features content, falling back to the defaults on any
    /// failure.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_single(ContentKind::Features, &[("populate", "*")], true).await {
            Ok(Some(doc)) => Self::from_document(&doc),
            Ok(None) => {
                tracing::warn!("unexpected features payload shape");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("failed to fetch features content: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map a normalized document onto the view model, field by field.
    pub fn from_document(doc: &Document) -> Self {
        let defaults = Self::default();
        let items = doc
            .documents("featureItems")
            .map(|docs| docs.iter().map(FeatureItem::from_document).collect())
            .unwrap_or_default();
        Self {
            title: doc.text_or(&["sectionTitle", "title", "Title"], &defaults.title),
            description: doc.text_or(&["sectionDescription", "description"], &defaults.description),
            items,
            error: None,
        }
    }

    pub fn render(&self) -> String {
        let body = if self.items.is_empty() {
            "<p>Our features are being prepared. Please check back soon.</p>".to_string()
        } else {
            self.items
                .iter()
                .map(|item| {
                    let icon = item
                        .icon
                        .as_ref()
                        .map(|icon| {
                            format!(
                                "<img src=\"{}\" alt=\"{}\" width=\"48\" height=\"48\">\n",
                                escape_html(&icon.url),
                                escape_html(&icon.alt)
                            )
                        })
                        .unwrap_or_default();
                    format!(
                        "<article class=\"feature\">\n{icon}<h4>{title}</h4>\n<p>{description}</p>\n</article>",
                        title = escape_html(&item.title),
                        description = escape_html(&item.description),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!(
            "<section id=\"features\" class=\"features\">\n\
             <h2>{title}</h2>\n\
             <p>{description}</p>\n\
             {body}\n\
             {note}</section>",
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            note = render_note(&self.error),
        )
    }
}
