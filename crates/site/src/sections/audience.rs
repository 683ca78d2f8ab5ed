//! Audience-targeted sections ("for men" / "for women").
//!
//! The two segments share one view model; they differ only in content type
//! and default copy.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{SectionImage, escape_html, media_image, render_note};

/// Which audience segment a section addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    Men,
    Women,
}

impl Audience {
    fn content_kind(self) -> ContentKind {
        match self {
            Audience::Men => ContentKind::ForMen,
            Audience::Women => ContentKind::ForWomen,
        }
    }

    fn anchor(self) -> &'static str {
        match self {
            Audience::Men => "for-men",
            Audience::Women => "for-women",
        }
    }
}

/// Audience segment view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudienceSection {
    pub audience: Audience,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: SectionImage,
    pub benefits: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AudienceSection {
    /// The documented fallback content for one audience segment.
    pub fn default_for(audience: Audience) -> Self {
        match audience {
            Audience::Men => Self {
                audience,
                title: "For Men".into(),
                subtitle: "Authentic Masculine Presence".into(),
                description: "Discover how to develop authentic masculine presence, overcome \
                              performance anxiety, and create deeper connections with yourself and your \
                              partner."
                    .into(),
                image: SectionImage::new("/images/placeholder-men.jpg", "For Men"),
                benefits: vec![
                    "Develop unshakeable confidence in your masculinity".into(),
                    "Overcome performance anxiety and sexual issues".into(),
                    "Learn to communicate your desires effectively".into(),
                    "Create deeper emotional connections".into(),
                ],
                cta_text: "Start Your Journey".into(),
                cta_url: "#contact".into(),
                error: None,
            },
            Audience::Women => Self {
                audience,
                title: "For Women".into(),
                subtitle: "Reclaim Your Pleasure & Power".into(),
                description: "Lena supports women in unlocking their full sexual expression and \
                              reclaiming pleasure as their birthright. She helps them release shame, heal \
                              past wounds, and step into relationships where they feel cherished, seen, \
                              and fully desired. Whether they seek deeper self-intimacy, more fulfilling \
                              partnerships, or greater confidence in the bedroom, Lena creates a space \
                              where they can explore without judgment and embody their most radiant, \
                              unapologetic selves."
                    .into(),
                image: SectionImage::new("/images/for-women.jpg", "Coaching for Women"),
                benefits: vec![
                    "Release shame and embrace your desires fully".into(),
                    "Heal past relationship wounds and patterns".into(),
                    "Cultivate radiant confidence in and out of the bedroom".into(),
                    "Learn to communicate your needs with clarity and power".into(),
                    "Connect with your body as a source of wisdom and pleasure".into(),
                ],
                cta_text: "Begin Your Journey".into(),
                cta_url: "#contact".into(),
                error: None,
            },
        }
    }

    /// Fetch one audience segment, falling back to its defaults on any
    /// failure.
    pub async fn load(client: &CmsClient, audience: Audience) -> Self {
        match client.fetch_single(audience.content_kind(), &[("populate", "*")], true).await {
            Ok(Some(doc)) => Self::from_document(audience, &doc),
            Ok(None) => {
                tracing::warn!("unexpected {} payload shape", audience.anchor());
                Self::default_for(audience)
            }
            Err(err) => {
                tracing::warn!("failed to fetch {} content: {err}", audience.anchor());
                Self { error: Some(err.to_string()), ..Self::default_for(audience) }
            }
        }
    }

    /// Map a normalized document onto the view model, field by field.
    pub fn from_document(audience: Audience, doc: &Document) -> Self {
        let defaults = Self::default_for(audience);
        let benefits = doc.string_list(&["benefits", "Benefits"]).filter(|b| !b.is_empty());
        Self {
            audience,
            title: doc.text_or(&["title", "Title"], &defaults.title),
            subtitle: doc.text_or(&["subtitle", "Subtitle"], &defaults.subtitle),
            description: doc.text_or(&["description", "Description"], &defaults.description),
            image: media_image(doc, "image", &defaults.image.alt).unwrap_or(defaults.image),
            benefits: benefits.unwrap_or(defaults.benefits),
            cta_text: doc.text_or(&["ctaText", "CtaText", "buttonText", "ButtonText"], &defaults.cta_text),
            cta_url: doc.text_or(&["ctaUrl", "CtaUrl", "buttonUrl", "ButtonUrl"], &defaults.cta_url),
            error: None,
        }
    }

    pub fn render(&self) -> String {
        let benefits = self
            .benefits
            .iter()
            .map(|b| format!("<li>{}</li>", escape_html(b)))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<section id=\"{anchor}\" class=\"audience\">\n\
             <h3>{subtitle}</h3>\n\
             <h2>{title}</h2>\n\
             <p>{description}</p>\n\
             <ul class=\"benefits\">\n{benefits}\n</ul>\n\
             <a class=\"cta\" href=\"{cta_url}\">{cta_text}</a>\n\
             <img src=\"{src}\" alt=\"{alt}\">\n\
             {note}</section>",
            anchor = self.audience.anchor(),
            subtitle = escape_html(&self.subtitle),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            cta_url = escape_html(&self.cta_url),
            cta_text = escape_html(&self.cta_text),
            src = escape_html(&self.image.url),
            alt = escape_html(&self.image.alt),
            note = render_note(&self.error),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_for_men() {
        let section = AudienceSection::default_for(Audience::Men);
        assert_eq!(section.title, "For Men");
        assert_eq!(section.subtitle, "Authentic Masculine Presence");
        assert_eq!(section.benefits.len(), 4);
        assert_eq!(section.cta_text, "Start Your Journey");
        assert_eq!(section.image.url, "/images/placeholder-men.jpg");
    }

    #[test]
    fn test_default_for_women() {
        let section = AudienceSection::default_for(Audience::Women);
        assert_eq!(section.title, "For Women");
        assert_eq!(section.subtitle, "Reclaim Your Pleasure & Power");
        assert_eq!(section.benefits.len(), 5);
        assert_eq!(section.cta_text, "Begin Your Journey");
        assert_eq!(section.image.url, "/images/for-women.jpg");
    }

    #[test]
    fn test_from_document_overrides() {
        let doc = Document::from_value(json!({
            "title": "For Him",
            "benefits": ["one", "two"],
            "buttonText": "Go"
        }))
        .unwrap();
        let section = AudienceSection::from_document(Audience::Men, &doc);
        assert_eq!(section.title, "For Him");
        assert_eq!(section.benefits, vec!["one".to_string(), "two".to_string()]);
        assert_eq!(section.cta_text, "Go");
        // untouched fields keep their defaults
        assert_eq!(section.cta_url, "#contact");
    }

    #[test]
    fn test_from_document_empty_benefits_fall_back() {
        let doc = Document::from_value(json!({"benefits": []})).unwrap();
        let section = AudienceSection::from_document(Audience::Women, &doc);
        assert_eq!(section.benefits.len(), 5);
    }

    #[test]
    fn test_render_anchor_per_audience() {
        assert!(AudienceSection::default_for(Audience::Men).render().contains("id=\"for-men\""));
        assert!(AudienceSection::default_for(Audience::Women).render().contains("id=\"for-women\""));
    }
}
