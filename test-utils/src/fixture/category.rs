//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Tools";

/// Default test category slug.
pub const DEFAULT_SLUG: &str = "tools";

/// Default category type.
pub const DEFAULT_KIND: &str = "both";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Tools"`
/// - slug: `"tools"`
/// - type: `"both"`
/// - icon: `None`
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        slug: DEFAULT_SLUG.to_string(),
        kind: DEFAULT_KIND.to_string(),
        icon: None,
    }
}
