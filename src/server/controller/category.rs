use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, category::CategoryListDto},
    server::{
        error::AppError, model::category::Category, service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// Returns every category sorted by name, without filtering or limit.
///
/// # Returns
/// - `200 OK` - All categories
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = CategoryListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(state.db()?);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CategoryListDto {
            categories: categories.into_iter().map(Category::into_dto).collect(),
        }),
    ))
}
