use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactReceiptDto, CreateContactMessageRequest},
    },
    server::{
        error::AppError, extract::ApiJson, model::contact::CreateContactMessageParams,
        service::contact::ContactMessageService, state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit a contact message.
///
/// The message is stored as given; there is no endpoint to read it back.
///
/// # Returns
/// - `200 OK` - `{"status": "ok", "id": "<new id>"}`
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = CreateContactMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactReceiptDto),
        (status = 422, description = "Invalid message data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateContactMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateContactMessageParams::from_dto(payload.data);

    let service = ContactMessageService::new(state.db()?);

    let id = service.submit(params).await?;

    Ok((
        StatusCode::OK,
        Json(ContactReceiptDto {
            status: "ok".to_string(),
            id: id.to_string(),
        }),
    ))
}
