//! App item factory for creating test listing entities.

use chrono::{DateTime, Utc};
use entity::StringList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test app items with customizable fields.
///
/// Defaults are sourced from `fixture::app_item::entity()` with a unique title and slug
/// per instance.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::app_item::AppItemFactory;
///
/// let game = AppItemFactory::new(&db)
///     .title("Space Racer")
///     .kind("game")
///     .build()
///     .await?;
/// ```
pub struct AppItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::app_item::Model,
}

impl<'a> AppItemFactory<'a> {
    /// Creates a new AppItemFactory with default values from fixture.
    ///
    /// Defaults:
    /// - title: `"App {id}"`
    /// - slug: `"app-{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::app_item::entity();
        entity.title = format!("App {}", id);
        entity.title_search = entity.title.to_lowercase();
        entity.slug = format!("app-{}", id);

        Self { db, entity }
    }

    /// Sets the title and its lowercased search key.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self.entity.title_search = self.entity.title.to_lowercase();
        self
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Sets the item type (`app` or `game`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.entity.kind = kind.into();
        self
    }

    /// Sets the category slug.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    /// Sets the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.entity.version = version.into();
        self
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.entity.tags = StringList(tags);
        self
    }

    /// Sets the premium flag.
    pub fn premium(mut self, is_premium: bool) -> Self {
        self.entity.is_premium = is_premium;
        self
    }

    /// Sets the last update timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.entity.updated_at = updated_at;
        self
    }

    /// Builds and inserts the app item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app_item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::app_item::Model, DbErr> {
        let entity = self.entity;

        entity::app_item::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(entity.title),
            title_search: ActiveValue::Set(entity.title_search),
            slug: ActiveValue::Set(entity.slug),
            kind: ActiveValue::Set(entity.kind),
            short_description: ActiveValue::Set(entity.short_description),
            description: ActiveValue::Set(entity.description),
            version: ActiveValue::Set(entity.version),
            size: ActiveValue::Set(entity.size),
            category: ActiveValue::Set(entity.category),
            tags: ActiveValue::Set(entity.tags),
            features: ActiveValue::Set(entity.features),
            screenshots: ActiveValue::Set(entity.screenshots),
            download_type: ActiveValue::Set(entity.download_type),
            download_url: ActiveValue::Set(entity.download_url),
            is_premium: ActiveValue::Set(entity.is_premium),
            created_at: ActiveValue::Set(entity.created_at),
            updated_at: ActiveValue::Set(entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an app item with default values.
///
/// Shorthand for `AppItemFactory::new(db).build().await`.
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::app_item::Model, DbErr> {
    AppItemFactory::new(db).build().await
}
