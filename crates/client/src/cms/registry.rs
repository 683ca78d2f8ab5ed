//! Content-type registry.
//!
//! Each logical content type maps to an ordered list of candidate
//! collection names and a set of default query parameters. The backend's
//! actual collection names are operator-configured and unknown in advance,
//! so the client tries each alias in turn (see the orchestrator in the
//! parent module) rather than requiring exact configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cms::CmsError;

/// Logical content types served by the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Posts,
    Services,
    Hero,
    Features,
    Global,
    Testimonials,
    Testimonial,
    About,
    ForMen,
    ForWomen,
    FeaturedServices,
    ScrollIntro,
}

impl ContentKind {
    /// Every registered content type, in declaration order.
    pub const ALL: [ContentKind; 12] = [
        ContentKind::Posts,
        ContentKind::Services,
        ContentKind::Hero,
        ContentKind::Features,
        ContentKind::Global,
        ContentKind::Testimonials,
        ContentKind::Testimonial,
        ContentKind::About,
        ContentKind::ForMen,
        ContentKind::ForWomen,
        ContentKind::FeaturedServices,
        ContentKind::ScrollIntro,
    ];

    /// The logical name of this content type.
    pub fn name(self) -> &'static str {
        match self {
            ContentKind::Posts => "posts",
            ContentKind::Services => "services",
            ContentKind::Hero => "hero",
            ContentKind::Features => "features",
            ContentKind::Global => "global",
            ContentKind::Testimonials => "testimonials",
            ContentKind::Testimonial => "testimonial",
            ContentKind::About => "about",
            ContentKind::ForMen => "for-men",
            ContentKind::ForWomen => "for-women",
            ContentKind::FeaturedServices => "featured-services",
            ContentKind::ScrollIntro => "scroll-intro",
        }
    }

    /// Candidate collection names, in order of preference.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ContentKind::Posts => &["posts", "post", "articles", "article", "blogs", "blog"],
            ContentKind::Services => &["services", "service"],
            ContentKind::Hero => &["hero", "heroes", "homepage-hero"],
            ContentKind::Features => &["features", "feature-section"],
            ContentKind::Global => &["global", "globals", "global-settings"],
            ContentKind::Testimonials => &["testimonials", "testimonial-section"],
            ContentKind::Testimonial => &["testimonial", "testimonials-item", "testimonial-item"],
            ContentKind::About => &["about", "about-me", "about-section"],
            ContentKind::ForMen => &["for-men", "men", "for-him"],
            ContentKind::ForWomen => &["for-women", "women", "for-her"],
            ContentKind::FeaturedServices => {
                &["featured-services", "featured-service", "horizontal-services"]
            }
            ContentKind::ScrollIntro => &["scroll-intro", "scroll-section", "intro-section"],
        }
    }

    /// Default query parameters for this content type.
    pub fn default_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ContentKind::Posts => &[("populate", "*"), ("sort", "publishedAt:desc")],
            _ => &[("populate", "*")],
        }
    }

    /// Candidate endpoint path for the `index`-th alias.
    ///
    /// # Errors
    ///
    /// Returns `CmsError::AliasIndex` when `index` is past the end of the
    /// alias list; the orchestrator treats that as "all candidates tried".
    pub fn endpoint(self, api_prefix: &str, index: usize) -> Result<String, CmsError> {
        match self.aliases().get(index) {
            Some(alias) => Ok(format!("{api_prefix}/{alias}")),
            None => Err(CmsError::AliasIndex { kind: self, index }),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_order() {
        assert_eq!(ContentKind::Hero.aliases(), &["hero", "heroes", "homepage-hero"]);
        assert_eq!(ContentKind::Posts.aliases()[0], "posts");
    }

    #[test]
    fn test_endpoint_resolution() {
        let endpoint = ContentKind::Hero.endpoint("/api", 1).unwrap();
        assert_eq!(endpoint, "/api/heroes");
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let result = ContentKind::Services.endpoint("/api", 2);
        assert!(matches!(result, Err(CmsError::AliasIndex { kind: ContentKind::Services, index: 2 })));
    }

    #[test]
    fn test_default_params() {
        assert_eq!(ContentKind::Posts.default_params(), &[("populate", "*"), ("sort", "publishedAt:desc")]);
        assert_eq!(ContentKind::Hero.default_params(), &[("populate", "*")]);
    }

    #[test]
    fn test_all_kinds_have_aliases() {
        for kind in ContentKind::ALL {
            assert!(!kind.aliases().is_empty(), "{kind} has no aliases");
            assert_eq!(kind.aliases()[0], kind.name(), "{kind} should prefer its own name");
        }
    }

    #[test]
    fn test_display_uses_logical_name() {
        assert_eq!(ContentKind::ForMen.to_string(), "for-men");
        assert_eq!(ContentKind::FeaturedServices.to_string(), "featured-services");
    }
}
