use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactMessageRepository, error::AppError,
    model::contact::CreateContactMessageParams,
};

pub struct ContactMessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a contact message and returns its id.
    pub async fn submit(&self, params: CreateContactMessageParams) -> Result<i32, AppError> {
        let repo = ContactMessageRepository::new(self.db);

        Ok(repo.create(params, Utc::now()).await?)
    }
}
