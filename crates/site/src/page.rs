//! Page composition.
//!
//! Loads every section concurrently and assembles the final HTML document.
//! Section loads are independent and never fail, so the page always renders
//! complete; sections that fell back to defaults carry their own note.

use dreamnest_client::CmsClient;
use serde::Serialize;

use crate::sections::about::AboutSection;
use crate::sections::audience::{Audience, AudienceSection};
use crate::sections::featured::FeaturedServicesSection;
use crate::sections::features::FeaturesSection;
use crate::sections::hero::HeroSection;
use crate::sections::posts::PostsSection;
use crate::sections::scroll_intro::ScrollIntroSection;
use crate::sections::services::ServicesSection;
use crate::sections::testimonials::TestimonialsSection;

/// The fully composed page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub hero: HeroSection,
    pub scroll_intro: ScrollIntroSection,
    pub about: AboutSection,
    pub featured: FeaturedServicesSection,
    pub for_men: AudienceSection,
    pub for_women: AudienceSection,
    pub services: ServicesSection,
    pub testimonials: TestimonialsSection,
    pub features: FeaturesSection,
    pub posts: PostsSection,
}

impl Page {
    /// Load every section. Independent sections fetch concurrently; each
    /// one degrades to its own defaults, so this never fails.
    pub async fn load(client: &CmsClient) -> Self {
        let (hero, scroll_intro, about, featured, for_men, for_women, services, testimonials, features, posts) = tokio::join!(
            HeroSection::load(client),
            ScrollIntroSection::load(client),
            AboutSection::load(client),
            FeaturedServicesSection::load(client),
            AudienceSection::load(client, Audience::Men),
            AudienceSection::load(client, Audience::Women),
            ServicesSection::load(client),
            TestimonialsSection::load(client),
            FeaturesSection::load(client),
            PostsSection::load(client),
        );

        Self { hero, scroll_intro, about, featured, for_men, for_women, services, testimonials, features, posts }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let body = [
            self.hero.render(),
            self.scroll_intro.render(),
            self.about.render(),
            self.featured.render(),
            self.for_men.render(),
            self.for_women.render(),
            self.services.render(),
            self.testimonials.render(),
            self.features.render(),
            self.posts.render(),
        ]
        .join("\n");

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>DreamNest | Where Your Dreams Find a Home</title>\n\
             </head>\n\
             <body>\n{body}\n</body>\n\
             </html>"
        )
    }
}
