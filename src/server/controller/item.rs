use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        item::{AppItemDto, AppItemListDto, CreateAppItemRequest},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiQuery},
        model::item::{AppItem, CreateAppItemParams, ItemQuery},
        service::item::AppItemService,
        state::AppState,
        util::limit::unbounded_limit,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsParams {
    /// Case-insensitive title substring
    pub q: Option<String>,
    /// Category slug
    pub category: Option<String>,
    /// Item type, `app` or `game`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Between 1 and 100
    #[serde(default = "default_list_limit")]
    #[param(default = 24, minimum = 1, maximum = 100)]
    pub limit: i64,
    /// Sort field
    #[serde(default = "default_sort")]
    #[param(default = "updated_at")]
    pub sort: String,
    /// `1` ascending, `-1` descending (default)
    #[serde(default = "default_order")]
    pub order: i64,
}

fn default_list_limit() -> i64 {
    24
}

fn default_sort() -> String {
    "updated_at".to_string()
}

fn default_order() -> i64 {
    -1
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestItemsParams {
    /// `0` returns every item; negative values count by magnitude
    #[serde(default = "default_latest_limit")]
    #[param(default = 12)]
    pub limit: i64,
}

fn default_latest_limit() -> i64 {
    12
}

/// List catalog items.
///
/// Filters by title substring, category slug and item type, then sorts and truncates
/// the result. The sort field must be one of `updated_at`, `created_at`, `title`,
/// `slug`, `type`, `category`, `version`, `size` or `is_premium`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Filters, sort field, sort order and limit
///
/// # Returns
/// - `200 OK` - Matching items
/// - `422 Unprocessable Entity` - Limit out of range or unsupported sort parameters
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    params(ListItemsParams),
    responses(
        (status = 200, description = "Matching items", body = AppItemListDto),
        (status = 422, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListItemsParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ItemQuery::listing(params.limit, &params.sort, params.order)?
        .search(params.q)
        .category(params.category)
        .kind(params.kind);

    let service = AppItemService::new(state.db()?);

    let items = service.list(query).await?;

    Ok((
        StatusCode::OK,
        Json(AppItemListDto {
            items: items.into_iter().map(AppItem::into_dto).collect(),
        }),
    ))
}

/// List the most recently updated items.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Limit, defaults to 12 and has no upper bound
///
/// # Returns
/// - `200 OK` - Items sorted by `updated_at` descending
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/items/latest",
    tag = ITEM_TAG,
    params(LatestItemsParams),
    responses(
        (status = 200, description = "Most recently updated items", body = AppItemListDto),
        (status = 422, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn latest_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LatestItemsParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ItemQuery::latest(unbounded_limit(params.limit));

    let service = AppItemService::new(state.db()?);

    let items = service.list(query).await?;

    Ok((
        StatusCode::OK,
        Json(AppItemListDto {
            items: items.into_iter().map(AppItem::into_dto).collect(),
        }),
    ))
}

/// Get a single item by slug.
///
/// When several items share the slug, the earliest inserted one is returned.
///
/// # Returns
/// - `200 OK` - The item
/// - `404 Not Found` - No item has this slug
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/items/{slug}",
    tag = ITEM_TAG,
    params(
        ("slug" = String, Path, description = "Item slug")
    ),
    responses(
        (status = 200, description = "The item", body = AppItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppItemService::new(state.db()?);

    let item = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Create a new item.
///
/// `updated_at` is set by the server; a value in the payload is ignored. Duplicate
/// slugs are accepted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - `{"data": AppItem}`
///
/// # Returns
/// - `200 OK` - `{"id": "<new id>"}`
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = CreateAppItemRequest,
    responses(
        (status = 200, description = "Item created", body = CreatedDto),
        (status = 422, description = "Invalid item data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAppItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAppItemParams::from_dto(payload.data);

    let service = AppItemService::new(state.db()?);

    let item = service.create(params).await?;

    Ok((
        StatusCode::OK,
        Json(CreatedDto {
            id: item.id.to_string(),
        }),
    ))
}
