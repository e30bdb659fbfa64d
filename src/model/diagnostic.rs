use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store connectivity report returned by `GET /test`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiagnosticDto {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
