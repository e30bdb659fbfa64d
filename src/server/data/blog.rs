use chrono::{DateTime, Utc};
use entity::StringList;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::blog::{BlogPost, CreateBlogPostParams};

pub struct BlogPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new blog post.
    ///
    /// `created_at` keeps the value from `params` when present and falls back to `now`;
    /// `updated_at` is always `now`.
    pub async fn create(
        &self,
        params: CreateBlogPostParams,
        now: DateTime<Utc>,
    ) -> Result<BlogPost, DbErr> {
        let entity = entity::blog_post::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            excerpt: ActiveValue::Set(params.excerpt),
            content: ActiveValue::Set(params.content),
            cover_image: ActiveValue::Set(params.cover_image),
            tags: ActiveValue::Set(StringList(params.tags)),
            created_at: ActiveValue::Set(params.created_at.unwrap_or(now)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BlogPost::from_entity(entity))
    }

    /// Gets posts newest first, at most `limit` of them when a limit is given.
    pub async fn get_recent(&self, limit: Option<u64>) -> Result<Vec<BlogPost>, DbErr> {
        let entities = entity::prelude::BlogPost::find()
            .order_by_desc(entity::blog_post::Column::CreatedAt)
            .order_by_desc(entity::blog_post::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BlogPost::from_entity).collect())
    }

    /// Finds the earliest inserted post with the given slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DbErr> {
        let entity = entity::prelude::BlogPost::find()
            .filter(entity::blog_post::Column::Slug.eq(slug))
            .order_by_asc(entity::blog_post::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(BlogPost::from_entity))
    }
}
