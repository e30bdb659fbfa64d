use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::contact::CreateContactMessageParams;

pub struct ContactMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a contact message and returns its id.
    pub async fn create(
        &self,
        params: CreateContactMessageParams,
        now: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }
}
