//! Category factory for creating test category entities.
//!
//! Categories have no creation endpoint; tests and seed tooling insert them directly.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .name("Puzzle")
///     .kind("game")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values from fixture.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - slug: `"category-{id}"`
    /// - type: `"both"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::category::entity();
        entity.name = format!("Category {}", id);
        entity.slug = format!("category-{}", id);

        Self { db, entity }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the category slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Sets the category type (`app`, `game` or `both`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.entity.kind = kind.into();
        self
    }

    /// Sets the icon name.
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.entity.icon = icon;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert (including duplicate slug)
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            slug: ActiveValue::Set(self.entity.slug),
            kind: ActiveValue::Set(self.entity.kind),
            icon: ActiveValue::Set(self.entity.icon),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
