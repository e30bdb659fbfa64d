//! App item fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{app_item, StringList};

/// Default test item title.
pub const DEFAULT_TITLE: &str = "Test App";

/// Default test item slug.
pub const DEFAULT_SLUG: &str = "test-app";

/// Default item type.
pub const DEFAULT_KIND: &str = "app";

/// Default category slug.
pub const DEFAULT_CATEGORY: &str = "tools";

/// Default download URL.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://cdn.example.com/test-app.apk";

/// Creates an app item entity model with default values.
///
/// Both timestamps are fixed at 2024-01-01T00:00:00Z so tests that depend on ordering set
/// them explicitly.
///
/// # Returns
/// - `app_item::Model` - In-memory app item entity
pub fn entity() -> app_item::Model {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    app_item::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        title_search: DEFAULT_TITLE.to_lowercase(),
        slug: DEFAULT_SLUG.to_string(),
        kind: DEFAULT_KIND.to_string(),
        short_description: "A short description".to_string(),
        description: "A longer description of the test app".to_string(),
        version: "1.0.0".to_string(),
        size: "12 MB".to_string(),
        category: DEFAULT_CATEGORY.to_string(),
        tags: StringList::default(),
        features: StringList::default(),
        screenshots: StringList::default(),
        download_type: "APK".to_string(),
        download_url: DEFAULT_DOWNLOAD_URL.to_string(),
        is_premium: false,
        created_at: stamp,
        updated_at: stamp,
    }
}
