//! Blog post factory for creating test post entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test blog posts with customizable fields.
pub struct BlogPostFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::blog_post::Model,
}

impl<'a> BlogPostFactory<'a> {
    /// Creates a new BlogPostFactory with default values from fixture.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - slug: `"post-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::blog_post::entity();
        entity.title = format!("Post {}", id);
        entity.slug = format!("post-{}", id);

        Self { db, entity }
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the post slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the blog post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blog_post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blog_post::Model, DbErr> {
        let entity = self.entity;

        entity::blog_post::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(entity.title),
            slug: ActiveValue::Set(entity.slug),
            excerpt: ActiveValue::Set(entity.excerpt),
            content: ActiveValue::Set(entity.content),
            cover_image: ActiveValue::Set(entity.cover_image),
            tags: ActiveValue::Set(entity.tags),
            created_at: ActiveValue::Set(entity.created_at),
            updated_at: ActiveValue::Set(entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blog post with default values.
///
/// Shorthand for `BlogPostFactory::new(db).build().await`.
pub async fn create_post(db: &DatabaseConnection) -> Result<entity::blog_post::Model, DbErr> {
    BlogPostFactory::new(db).build().await
}
