use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message submitted from the contact page.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ContactMessageDto {
    pub name: String,
    /// Stored as given; the address format is not verified.
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Request body for `POST /api/contact`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateContactMessageRequest {
    pub data: ContactMessageDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ContactReceiptDto {
    pub status: String,
    pub id: String,
}
