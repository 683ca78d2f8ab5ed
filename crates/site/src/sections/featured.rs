//! Featured services section (bento grid).

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{escape_html, media_image, render_note};

/// A featured service tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub featured: bool,
}

impl FeaturedItem {
    fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id_text().unwrap_or_default(),
            title: doc.text_or(&["title", "Title"], "Service"),
            subtitle: doc.text_or(&["subtitle", "Subtitle"], "Transformative Experience"),
            description: doc.text_or(&["description", "Description"], ""),
            image: media_image(doc, "image", "")
                .map(|image| image.url)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| "/images/placeholder.jpg".into()),
            link: doc.text_or(&["link"], "#contact"),
            featured: doc.boolean(&["featured"]).unwrap_or(false),
        }
    }

    fn new(id: &str, title: &str, subtitle: &str, description: &str, image: &str, featured: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            image: image.into(),
            link: "#contact".into(),
            featured,
        }
    }
}

/// Featured services view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedServicesSection {
    pub heading: String,
    pub tagline: String,
    pub items: Vec<FeaturedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for FeaturedServicesSection {
    fn default() -> Self {
        Self {
            heading: "ready to bring your a-game, baby?".into(),
            tagline: "Explore transformative experiences designed to awaken your authentic \
                      expression and deepen your connection with yourself and others."
                .into(),
            items: vec![
                FeaturedItem::new(
                    "1",
                    "Relationship Breakthrough",
                    "Transform Your Connections",
                    "A transformative coaching program to help you overcome relationship challenges \
                     and create deeper connections.",
                    "/images/relationship-breakthrough.jpg",
                    true,
                ),
                FeaturedItem::new(
                    "2",
                    "Intimacy Mastery",
                    "Deepen Your Connection",
                    "Develop the skills and confidence to create profound intimacy and connection in \
                     your relationships.",
                    "/images/intimacy-mastery.jpg",
                    false,
                ),
                FeaturedItem::new(
                    "3",
                    "Sexual Confidence",
                    "Embrace Your Desires",
                    "Overcome blocks, heal past wounds, and step into your full sexual expression \
                     with confidence.",
                    "/images/sexual-confidence.jpg",
                    false,
                ),
                FeaturedItem::new(
                    "4",
                    "Breathwork Sessions",
                    "Heal Through Breath",
                    "Guided breathwork to release trauma, reduce anxiety, and connect with your \
                     authentic self.",
                    "/images/breathwork.jpg",
                    false,
                ),
                FeaturedItem::new(
                    "5",
                    "Couples Coaching",
                    "Reignite Your Passion",
                    "Rebuild trust, improve communication, and reignite passion in your relationship.",
                    "/images/couples-coaching.jpg",
                    false,
                ),
            ],
            error: None,
        }
    }
}

impl FeaturedServicesSection {
    /// Fetch the featured services, keeping the default tiles on failure or
    /// an empty result.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_collection(ContentKind::FeaturedServices, &[("populate", "*")], true).await {
            Ok(docs) if !docs.is_empty() => Self::from_documents(&docs),
            Ok(_) => {
                tracing::debug!("no featured services published, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("failed to fetch featured services: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map normalized documents onto the view model. Section heading and
    /// tagline may ride along on the first item.
    pub fn from_documents(docs: &[Document]) -> Self {
        let defaults = Self::default();
        let items = docs.iter().map(FeaturedItem::from_document).collect();

        let first = docs.first();
        let heading = first
            .and_then(|doc| doc.text(&["section_heading"]))
            .map_or(defaults.heading, str::to_string);
        let tagline = first
            .and_then(|doc| doc.text(&["section_tagline"]))
            .map_or(defaults.tagline, str::to_string);

        Self { heading, tagline, items, error: None }
    }

    pub fn render(&self) -> String {
        let tiles = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "<article class=\"tile{featured}\">\n\
                     <img src=\"{src}\" alt=\"{title}\">\n\
                     <h4>{title}</h4>\n\
                     <h5>{subtitle}</h5>\n\
                     <p>{description}</p>\n\
                     <a href=\"{link}\">Explore</a>\n\
                     </article>",
                    featured = if item.featured { " featured" } else { "" },
                    src = escape_html(&item.image),
                    title = escape_html(&item.title),
                    subtitle = escape_html(&item.subtitle),
                    description = escape_html(&item.description),
                    link = escape_html(&item.link),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<section id=\"featured-services\" class=\"bento\">\n\
             <h2>{heading}</h2>\n\
             <p>{tagline}</p>\n\
             {tiles}\n\
             {note}</section>",
            heading = escape_html(&self.heading),
            tagline = escape_html(&self.tagline),
            note = render_note(&self.error),
        )
    }
}
