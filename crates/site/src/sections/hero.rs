//! Hero section.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{SectionImage, escape_html, media_image, render_note};

/// Hero view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_url: String,
    pub image: SectionImage,
    /// Non-fatal fetch diagnostic; defaults are rendered when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: "DreamNest".into(),
            subtitle: "Where Your Dreams Find a Home".into(),
            description: "Awaken your wildest dreams, ignite your sensual power, and reclaim your \
                          authentic expression. I guide visionaries like you to break free from societal \
                          conditioning and live with unapologetic passion."
                .into(),
            cta_text: "Begin Your Journey".into(),
            cta_url: "#services".into(),
            image: SectionImage::new("/images/hero-image.jpg", "Lena from DreamNest"),
            error: None,
        }
    }
}

impl HeroSection {
    /// Fetch the hero content, falling back to the defaults on any failure.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_single(ContentKind::Hero, &[("populate", "*")], true).await {
            Ok(Some(doc)) => Self::from_document(&doc),
            Ok(None) => {
                tracing::warn!("unexpected hero payload shape");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("failed to fetch hero content: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map a normalized document onto the view model, field by field.
    pub fn from_document(doc: &Document) -> Self {
        let defaults = Self::default();
        Self {
            title: doc.text_or(&["title", "Title"], &defaults.title),
            subtitle: doc.text_or(&["subtitle", "Subtitle"], &defaults.subtitle),
            description: doc.text_or(&["description", "Description"], &defaults.description),
            cta_text: doc.text_or(&["ctaText", "CtaText"], &defaults.cta_text),
            cta_url: doc.text_or(&["ctaUrl", "CtaUrl"], &defaults.cta_url),
            image: media_image(doc, "heroImage", "Lena from DreamNest").unwrap_or(defaults.image),
            error: None,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "<section id=\"hero\" class=\"hero\">\n\
             <img src=\"{src}\" alt=\"{alt}\">\n\
             <h1>{title}</h1>\n\
             <h2>{subtitle}</h2>\n\
             <p>{description}</p>\n\
             <a class=\"cta\" href=\"{cta_url}\">{cta_text}</a>\n\
             {note}</section>",
            src = escape_html(&self.image.url),
            alt = escape_html(&self.image.alt),
            title = escape_html(&self.title),
            subtitle = escape_html(&self.subtitle),
            description = escape_html(&self.description),
            cta_url = escape_html(&self.cta_url),
            cta_text = escape_html(&self.cta_text),
            note = render_note(&self.error),
        )
    }
}
