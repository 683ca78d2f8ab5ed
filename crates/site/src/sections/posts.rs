//! Blog posts section.

use chrono::{DateTime, Utc};
use dreamnest_client::{CmsClient, ContentKind};
use dreamnest_core::Document;
use serde::Serialize;

use super::{escape_html, render_note};

/// Preview length for the post body.
const PREVIEW_CHARS: usize = 150;

/// A normalized blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a post from a normalized document.
    ///
    /// A document qualifies when it has an id and at least a title or some
    /// body text; anything else is skipped rather than rendered empty.
    pub fn from_document(doc: &Document) -> Option<Self> {
        let id = doc.id_text()?;
        let title = doc.text(&["title", "Title", "name"]);
        let content = doc.text(&["content", "description", "body", "text"]);
        if title.is_none() && content.is_none() {
            return None;
        }

        Some(Self {
            id,
            title: title.unwrap_or("Untitled").to_string(),
            content: content.unwrap_or_default().to_string(),
            published_at: parse_timestamp(doc, &["publishedAt", "published_at", "createdAt"])
                .unwrap_or_else(Utc::now),
            updated_at: parse_timestamp(doc, &["updatedAt", "updated_at", "createdAt"]).unwrap_or_else(Utc::now),
        })
    }

    /// The body, truncated for card display.
    pub fn preview(&self) -> String {
        if self.content.chars().count() > PREVIEW_CHARS {
            let truncated: String = self.content.chars().take(PREVIEW_CHARS).collect();
            format!("{truncated}...")
        } else {
            self.content.clone()
        }
    }
}

fn parse_timestamp(doc: &Document, keys: &[&str]) -> Option<DateTime<Utc>> {
    doc.text(keys)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Posts view model.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PostsSection {
    pub posts: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostsSection {
    /// Fetch the posts collection. There is no canned fallback content;
    /// failure or emptiness renders the "no posts" notice.
    pub async fn load(client: &CmsClient) -> Self {
        match client.fetch_collection(ContentKind::Posts, &[], true).await {
            Ok(docs) => {
                let posts: Vec<Post> = docs.iter().filter_map(Post::from_document).collect();
                let error = if posts.is_empty() && !docs.is_empty() {
                    Some("Could not find any valid posts in the response.".to_string())
                } else {
                    None
                };
                Self { posts, error }
            }
            Err(err) => {
                tracing::warn!("failed to fetch posts: {err}");
                Self { posts: Vec::new(), error: Some(err.to_string()) }
            }
        }
    }

    pub fn render(&self) -> String {
        let body = if self.posts.is_empty() {
            "<p class=\"notice\">No posts found. Please create and publish some posts in the CMS \
             admin panel.</p>"
                .to_string()
        } else {
            self.posts
                .iter()
                .map(|post| {
                    format!(
                        "<article class=\"post\">\n\
                         <h4>{title}</h4>\n\
                         <p>{preview}</p>\n\
                         <p class=\"meta\">Published: {published}</p>\n\
                         </article>",
                        title = escape_html(&post.title),
                        preview = escape_html(&post.preview()),
                        published = post.published_at.format("%B %-d, %Y"),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!(
            "<section id=\"posts\" class=\"posts\">\n\
             <h2>Latest Posts</h2>\n\
             {body}\n\
             {note}</section>",
            note = render_note(&self.error),
        )
    }
}
