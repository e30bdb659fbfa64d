use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::blog::BlogPostRepository,
    error::AppError,
    model::blog::{BlogPost, CreateBlogPostParams},
};

pub struct BlogPostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post, stamping `updated_at` and, when absent, `created_at`.
    pub async fn create(&self, params: CreateBlogPostParams) -> Result<BlogPost, AppError> {
        let repo = BlogPostRepository::new(self.db);

        Ok(repo.create(params, Utc::now()).await?)
    }

    /// Gets posts newest first.
    pub async fn get_recent(&self, limit: Option<u64>) -> Result<Vec<BlogPost>, AppError> {
        let repo = BlogPostRepository::new(self.db);

        Ok(repo.get_recent(limit).await?)
    }

    /// Gets a post by slug, failing with `NotFound` on a miss.
    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        let repo = BlogPostRepository::new(self.db);

        repo.find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Artikel tidak ditemukan".to_string()))
    }
}
