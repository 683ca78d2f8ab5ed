//! About section.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{SectionImage, escape_html, media_image, render_note};

/// About view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: SectionImage,
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            title: "About Me".into(),
            subtitle: "Guiding You to Sensual Freedom".into(),
            description: "Lena Weisinger is a Sex, Love & Relationship Coach trained under Layla \
                          Martin's renowned VITA method. Her journey into this work was deeply personal - \
                          she spent years unraveling societal conditioning around sexuality, power, and \
                          intimacy, learning firsthand what it means to reclaim desire as a source of \
                          strength rather than shame. She now guides others on that same path, helping \
                          them break free from limiting patterns and step into a fully embodied, \
                          confident, and connected way of loving."
                .into(),
            image: SectionImage::new("/images/about-image.jpg", "Lena from DreamNest"),
            specialties: vec![
                "Sex, Love & Relationship Coaching".into(),
                "VITA Method Certified".into(),
                "Emotional Intelligence Development".into(),
                "Sexual Confidence Building".into(),
                "Trauma-Informed Practices".into(),
            ],
            error: None,
        }
    }
}

impl AboutSection {
    /// Fetch the about content, falling back to the defaults on any failure.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_single(ContentKind::About, &[("populate", "*")], true).await {
            Ok(Some(doc)) => Self::from_document(&doc),
            Ok(None) => {
                tracing::warn!("unexpected about payload shape");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("failed to fetch about content: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map a normalized document onto the view model, field by field.
    pub fn from_document(doc: &Document) -> Self {
        let defaults = Self::default();

        // specialties arrive as a normalized to-many relation of named items
        let specialties: Vec<String> = doc
            .documents("specialties")
            .map(|items| items.iter().filter_map(|item| item.text(&["name"]).map(str::to_string)).collect())
            .unwrap_or_default();

        Self {
            title: doc.text_or(&["title", "Title"], &defaults.title),
            subtitle: doc.text_or(&["subtitle", "Subtitle"], &defaults.subtitle),
            description: doc.text_or(&["description", "Description"], &defaults.description),
            image: media_image(doc, "image", "Lena from DreamNest").unwrap_or(defaults.image),
            specialties: if specialties.is_empty() { defaults.specialties } else { specialties },
            error: None,
        }
    }

    pub fn render(&self) -> String {
        let specialties = self
            .specialties
            .iter()
            .map(|s| format!("<li>{}</li>", escape_html(s)))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<section id=\"about\" class=\"about\">\n\
             <h3>{subtitle}</h3>\n\
             <h2>{title}</h2>\n\
             <img src=\"{src}\" alt=\"{alt}\">\n\
             <p>{description}</p>\n\
             <ul class=\"specialties\">\n{specialties}\n</ul>\n\
             {note}</section>",
            subtitle = escape_html(&self.subtitle),
            title = escape_html(&self.title),
            src = escape_html(&self.image.url),
            alt = escape_html(&self.image.alt),
            description = escape_html(&self.description),
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
        let about = AboutSection::default();
        assert_eq!(about.title, "About Me");
        assert_eq!(about.subtitle, "Guiding You to Sensual Freedom");
        assert_eq!(about.specialties.len(), 5);
        assert_eq!(about.image.url, "/images/about-image.jpg");
    }

    #[test]
    fn test_from_document_specialties() {
        let doc = Document::from_value(json!({
            "title": "About Lena",
            "specialties": [{"id": 1, "name": "Coaching"}, {"id": 2, "name": "Breathwork"}]
        }))
        .unwrap();
        let about = AboutSection::from_document(&doc);
        assert_eq!(about.title, "About Lena");
        assert_eq!(about.specialties, vec!["Coaching".to_string(), "Breathwork".to_string()]);
    }

    #[test]
    fn test_from_document_empty_specialties_fall_back() {
        let doc = Document::from_value(json!({"specialties": []})).unwrap();
        let about = AboutSection::from_document(&doc);
        assert_eq!(about.specialties, AboutSection::default().specialties);
    }

    #[test]
    fn test_render_lists_specialties() {
        let about = AboutSection::default();
        let html = about.render();
        assert!(html.contains("<li>VITA Method Certified</li>"));
        assert!(html.contains("About Me"));
    }
}
