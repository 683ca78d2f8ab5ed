//! Testimonials section.
//!
//! Draws from two content types: the `testimonials` single type carries the
//! section chrome, the `testimonial` collection carries the quotes.

use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{escape_html, render_note};

/// A single client quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: u8,
}

impl Testimonial {
    fn new(quote: &str, name: &str, role: &str) -> Self {
        Self { quote: quote.into(), name: name.into(), role: role.into(), image: None, rating: 5 }
    }

    fn from_document(doc: &Document) -> Self {
        Self {
            quote: doc.text_or(&["quote", "Quote"], ""),
            name: doc.text_or(&["name", "Name"], ""),
            role: doc.text_or(&["role", "Role"], ""),
            image: doc.document("image").and_then(|image| image.text(&["url"]).map(str::to_string)),
            rating: match doc.integer(&["rating"]) {
                Some(rating) if (1..=5).contains(&rating) => rating as u8,
                _ => 5,
            },
        }
    }
}

/// Testimonials view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsSection {
    pub title: String,
    pub subtitle: String,
    pub testimonials: Vec<Testimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for TestimonialsSection {
    fn default() -> Self {
        Self {
            title: "What Our Clients Say".into(),
            subtitle: "Real Transformations from Real People".into(),
            testimonials: vec![
                Testimonial::new(
                    "Working with Lena completely transformed my relationship with intimacy. Her \
                     coaching helped me overcome years of shame and discover a whole new level of \
                     connection with my partner.",
                    "Sarah M.",
                    "Executive Coach",
                ),
                Testimonial::new(
                    "The breathwork sessions with Lena were life-changing. I've struggled with \
                     anxiety for years, and her techniques have given me tools I use daily to stay \
                     centered and calm.",
                    "Michael T.",
                    "Entrepreneur",
                ),
                Testimonial::new(
                    "Lena creates such a safe space for exploration. I never thought I could be so \
                     open about my desires and needs, but her approach made it feel natural and \
                     empowering.",
                    "Emma R.",
                    "Therapist",
                ),
            ],
            error: None,
        }
    }
}

impl TestimonialsSection {
    /// Fetch the section chrome and the quotes, falling back per part.
    ///
    /// A chrome failure keeps the whole default section; a quotes failure
    /// keeps whatever chrome was fetched plus the default quotes.
    pub async fn load(client: &CmsClient) -> Self {
        let mut section = Self::default();

        match client.fetch_single(ContentKind::Testimonials, &[("populate", "*")], true).await {
            Ok(Some(doc)) => {
                section.title = doc.text_or(&["title", "Title"], &section.title);
                section.subtitle = doc.text_or(&["subtitle", "Subtitle"], &section.subtitle);
            }
            Ok(None) => tracing::warn!("unexpected testimonials payload shape"),
            Err(err) => {
                tracing::warn!("failed to fetch testimonials section: {err}");
                section.error = Some(err.to_string());
                return section;
            }
        }

        match client
            .fetch_collection(ContentKind::Testimonial, &[("populate", "*"), ("sort", "order:asc")], true)
            .await
        {
            Ok(docs) if !docs.is_empty() => {
                section.testimonials = docs.iter().map(Testimonial::from_document).collect();
            }
            Ok(_) => tracing::debug!("no testimonials published, using defaults"),
            Err(err) => {
                tracing::warn!("failed to fetch testimonial items: {err}");
                section.error = Some(err.to_string());
            }
        }

        section
    }

    pub fn render(&self) -> String {
        let quotes = self
            .testimonials
            .iter()
            .map(|t| {
                format!(
                    "<blockquote>\n<p>{quote}</p>\n<footer>{name}{role} ({rating}/5)</footer>\n</blockquote>",
                    quote = escape_html(&t.quote),
                    name = escape_html(&t.name),
                    role = if t.role.is_empty() { String::new() } else { format!(", {}", escape_html(&t.role)) },
                    rating = t.rating,
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<section id=\"testimonials\" class=\"testimonials\">\n\
             <h2>{title}</h2>\n\
             <p>{subtitle}</p>\n\
             {quotes}\n\
             {note}</section>",
            title = escape_html(&self.title),
            subtitle = escape_html(&self.subtitle),
            note = render_note(&self.error),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from_value(value).unwrap()
    }

    #[test]
    fn test_default_content() {
        let section = TestimonialsSection::default();
        assert_eq!(section.title, "What Our Clients Say");
        assert_eq!(section.subtitle, "Real Transformations from Real People");
        assert_eq!(section.testimonials.len(), 3);
        assert_eq!(section.testimonials[0].name, "Sarah M.");
        assert!(section.testimonials.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_item_mapping() {
        let item = Testimonial::from_document(&doc(json!({
            "id": 1,
            "quote": "Life changing.",
            "name": "Alex P.",
            "role": "Designer",
            "rating": 4,
            "image": {"id": 2, "url": "/uploads/alex.jpg"}
        })));
        assert_eq!(item.quote, "Life changing.");
        assert_eq!(item.rating, 4);
        assert_eq!(item.image.as_deref(), Some("/uploads/alex.jpg"));
    }

    #[test]
    fn test_rating_out_of_range_defaults_to_five() {
        assert_eq!(Testimonial::from_document(&doc(json!({"rating": 0}))).rating, 5);
        assert_eq!(Testimonial::from_document(&doc(json!({"rating": 11}))).rating, 5);
        assert_eq!(Testimonial::from_document(&doc(json!({}))).rating, 5);
    }

    #[test]
    fn test_render_contains_quotes() {
        let html = TestimonialsSection::default().render();
        assert!(html.contains("Sarah M."));
        assert!(html.contains("(5/5)"));
    }
}
