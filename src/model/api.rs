use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

/// Identifier of a newly created document.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedDto {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
