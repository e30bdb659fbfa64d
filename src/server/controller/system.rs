use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, diagnostic::DiagnosticDto},
    server::{service::diagnostic::DiagnosticService, state::AppState},
};

/// Tag for grouping liveness and diagnostic endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Liveness check.
///
/// Answers without touching the database.
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "API Mod APK Hub berjalan".to_string(),
        }),
    )
}

/// Report database connectivity.
///
/// Always answers 200; failures while probing the store are described in the
/// `database` field.
#[utoipa::path(
    get,
    path = "/test",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Connectivity report", body = DiagnosticDto)
    ),
)]
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let service = DiagnosticService::new(state.try_db());

    let report = service
        .report(state.database_url_set, state.database_name.as_deref())
        .await;

    (StatusCode::OK, Json(report.into_dto()))
}
