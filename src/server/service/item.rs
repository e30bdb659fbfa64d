use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::item::AppItemRepository,
    error::AppError,
    model::item::{AppItem, CreateAppItemParams, ItemQuery},
};

pub struct AppItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an item with `updated_at` set to the current time.
    pub async fn create(&self, params: CreateAppItemParams) -> Result<AppItem, AppError> {
        let repo = AppItemRepository::new(self.db);

        Ok(repo.create(params, Utc::now()).await?)
    }

    /// Lists items matching a typed query.
    pub async fn list(&self, query: ItemQuery) -> Result<Vec<AppItem>, AppError> {
        let repo = AppItemRepository::new(self.db);

        Ok(repo.list(&query).await?)
    }

    /// Gets an item by slug.
    ///
    /// # Returns
    /// - `Ok(AppItem)` - The earliest inserted item with this slug
    /// - `Err(AppError::NotFound)` - No item has this slug
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<AppItem, AppError> {
        let repo = AppItemRepository::new(self.db);

        repo.find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Item tidak ditemukan".to_string()))
    }
}
