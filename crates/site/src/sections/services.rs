//! Services section.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{escape_html, render_note};

/// A single coaching program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub featured: bool,
    pub button_text: String,
    pub button_url: String,
}

impl ServiceItem {
    fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id_int().unwrap_or_default(),
            title: doc.text_or(&["title", "Title"], ""),
            description: doc.text_or(&["description", "Description"], ""),
            price: doc.text(&["price"]).map(str::to_string),
            duration: doc.text(&["duration"]).map(str::to_string),
            featured: doc.boolean(&["featured"]).unwrap_or(false),
            button_text: doc.text_or(&["buttonText", "ButtonText"], "Learn More"),
            button_url: doc.text_or(&["buttonUrl", "ButtonUrl"], "#contact"),
        }
    }
}

/// Services view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub services: Vec<ServiceItem>,
    pub cta_text: String,
    pub cta_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            title: "My Services".into(),
            subtitle: "Transformative Coaching Programs".into(),
            description: "Explore my range of personalized coaching programs designed to help you \
                          unlock your full potential and transform your relationships."
                .into(),
            services: vec![
                ServiceItem {
                    id: 1,
                    title: "Relationship Breakthrough".into(),
                    description: "A transformative 1:1 coaching program to help you overcome \
                                  relationship challenges and create deeper, more fulfilling connections."
                        .into(),
                    price: Some("From $997".into()),
                    duration: Some("8 weeks".into()),
                    featured: true,
                    button_text: "Learn More".into(),
                    button_url: "#contact".into(),
                },
                ServiceItem {
                    id: 2,
                    title: "Intimacy Mastery".into(),
                    description: "Develop the skills and confidence to create profound intimacy, \
                                  pleasure, and connection in your relationships."
                        .into(),
                    price: Some("From $797".into()),
                    duration: Some("6 weeks".into()),
                    featured: false,
                    button_text: "Learn More".into(),
                    button_url: "#contact".into(),
                },
                ServiceItem {
                    id: 3,
                    title: "Sexual Confidence".into(),
                    description: "Overcome blocks, heal past wounds, and step into your full sexual \
                                  expression with confidence and authenticity."
                        .into(),
                    price: Some("From $597".into()),
                    duration: Some("4 weeks".into()),
                    featured: false,
                    button_text: "Learn More".into(),
                    button_url: "#contact".into(),
                },
                ServiceItem {
                    id: 4,
                    title: "Single Session".into(),
                    description: "A focused coaching session to address a specific challenge or \
                                  question in your relationships or sexual wellbeing."
                        .into(),
                    price: Some("$297".into()),
                    duration: Some("90 minutes".into()),
                    featured: false,
                    button_text: "Book Now".into(),
                    button_url: "#contact".into(),
                },
            ],
            cta_text: "Not sure which program is right for you? Let's talk".into(),
            cta_url: "#contact".into(),
            error: None,
        }
    }
}

impl ServicesSection {
    /// Fetch the services collection, falling back to the default programs
    /// on failure or an empty result.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_collection(ContentKind::Services, &[("populate", "*")], true).await {
            Ok(docs) if !docs.is_empty() => Self::from_documents(&docs),
            Ok(_) => {
                tracing::warn!("services payload held no items");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("failed to fetch services content: {err}");
                Self { error: Some(err.to_string()), ..Self::default() }
            }
        }
    }

    /// Map normalized documents onto the view model; featured programs sort
    /// first, otherwise backend order is kept.
    pub fn from_documents(docs: &[Document]) -> Self {
        let mut services: Vec<ServiceItem> = docs.iter().map(ServiceItem::from_document).collect();
        services.sort_by_key(|service| !service.featured);
        Self { services, error: None, ..Self::default() }
    }

    pub fn render(&self) -> String {
        let cards = self
            .services
            .iter()
            .map(|service| {
                let meta = [service.price.as_deref(), service.duration.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(escape_html)
                    .collect::<Vec<_>>()
                    .join(" \u{00b7} ");
                format!(
                    "<article class=\"service{featured}\">\n\
                     <h4>{title}</h4>\n\
                     <p>{description}</p>\n\
                     <p class=\"meta\">{meta}</p>\n\
                     <a href=\"{url}\">{label}</a>\n\
                     </article>",
                    featured = if service.featured { " featured" } else { "" },
                    title = escape_html(&service.title),
                    description = escape_html(&service.description),
                    url = escape_html(&service.button_url),
                    label = escape_html(&service.button_text),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<section id=\"services\" class=\"services\">\n\
             <h3>{subtitle}</h3>\n\
             <h2>{title}</h2>\n\
             <p>{description}</p>\n\
             {cards}\n\
             <a class=\"cta\" href=\"{cta_url}\">{cta_text}</a>\n\
             {note}</section>",
            subtitle = escape_html(&self.subtitle),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            cta_url = escape_html(&self.cta_url),
            cta_text = escape_html(&self.cta_text),
            note = render_note(&self.error),
        )
    }
}
