//! Blog post fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{blog_post, StringList};

/// Default test post title.
pub const DEFAULT_TITLE: &str = "Getting Started";

/// Default test post slug.
pub const DEFAULT_SLUG: &str = "getting-started";

/// Creates a blog post entity model with default values.
///
/// Both timestamps are fixed at 2024-01-01T00:00:00Z.
pub fn entity() -> blog_post::Model {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    blog_post::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        slug: DEFAULT_SLUG.to_string(),
        excerpt: "How to install your first APK".to_string(),
        content: "<p>Download, allow unknown sources, install.</p>".to_string(),
        cover_image: None,
        tags: StringList(vec!["guide".to_string()]),
        created_at: stamp,
        updated_at: stamp,
    }
}
