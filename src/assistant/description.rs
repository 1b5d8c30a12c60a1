use std::time::Duration;

use tracing::debug;

use super::Delay;
use crate::models::{Category, EventMode};

pub const GENERATE_DELAY: Duration = Duration::from_millis(2000);
pub const ENHANCE_DELAY: Duration = Duration::from_millis(1500);

const ENHANCEMENT_BLOCK: &str = "\n\nWhat to Expect:\n\
• Engaging presentations from industry experts\n\
• Interactive Q&A sessions\n\
• Networking opportunities with peers\n\
• Practical takeaways you can implement immediately\n\n\
Don't miss this opportunity to be part of something extraordinary!";

/// Picks the category template and fills in title and mode. Categories
/// without their own template share the default one.
pub fn generate_description(title: &str, category: Option<Category>, mode: EventMode) -> String {
    let title = title.trim();
    let name = |fallback: &'static str| if title.is_empty() { fallback } else { title };

    match category {
        Some(Category::Technology) => format!(
            "Join us for an immersive {} designed to bring together innovators, developers, and tech enthusiasts. \
This {} event will feature cutting-edge demonstrations, expert-led sessions, and unparalleled networking opportunities. \
Whether you're a seasoned professional or just starting your journey, you'll gain valuable insights into the latest trends and technologies shaping our digital future.",
            name("technology event"),
            mode
        ),
        Some(Category::Business) => format!(
            "Discover new opportunities at {}, where industry leaders and entrepreneurs converge to share insights and forge meaningful connections. \
This {} gathering offers a unique platform for professionals to exchange ideas, explore innovative business strategies, and build lasting partnerships.",
            name("our business event"),
            mode
        ),
        Some(Category::Education) => format!(
            "Transform your learning journey at {}, offering comprehensive training and skill development opportunities. \
This {} program combines expert instruction with hands-on practice, ensuring participants gain practical knowledge they can apply immediately.",
            name("this educational event"),
            mode
        ),
        Some(Category::ArtsAndCulture) => format!(
            "Immerse yourself in creativity at {}, showcasing diverse artistic expressions and cultural heritage. \
This {} event brings together artists, performers, and culture enthusiasts in a vibrant celebration of human creativity.",
            name("this cultural celebration"),
            mode
        ),
        _ => format!(
            "Experience {} that brings people together for meaningful engagement and shared experiences. \
This {} gathering is thoughtfully designed to deliver value, foster connections, and create lasting memories.",
            name("an exceptional event"),
            mode
        ),
    }
}

pub fn enhance_description(text: &str) -> String {
    format!("{}{}", text, ENHANCEMENT_BLOCK)
}

/// Description generator with an injectable delay in front of each answer.
#[derive(Debug, Clone, Default)]
pub struct DescriptionAssistant<D> {
    delay: D,
}

impl<D: Delay> DescriptionAssistant<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn generate(&self, title: &str, category: Option<Category>, mode: EventMode) -> String {
        debug!(?category, %mode, "Generating event description");
        self.delay.wait(GENERATE_DELAY);
        generate_description(title, category, mode)
    }

    /// Extends an existing description. An empty one gets a generated
    /// description instead.
    pub fn enhance(
        &self,
        description: &str,
        title: &str,
        category: Option<Category>,
        mode: EventMode,
    ) -> String {
        if description.is_empty() {
            return self.generate(title, category, mode);
        }
        debug!(len = description.len(), "Enhancing event description");
        self.delay.wait(ENHANCE_DELAY);
        enhance_description(description)
    }
}
