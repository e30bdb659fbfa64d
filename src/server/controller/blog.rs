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
        blog::{BlogPostDto, BlogPostListDto, CreateBlogPostRequest},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiQuery},
        model::blog::{BlogPost, CreateBlogPostParams},
        service::blog::BlogPostService,
        state::AppState,
        util::limit::unbounded_limit,
    },
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// `0` returns every post; negative values count by magnitude
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// List recent blog posts.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Limit, defaults to 10 and has no upper bound
///
/// # Returns
/// - `200 OK` - Posts sorted by `created_at` descending
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = BLOG_TAG,
    params(ListPostsParams),
    responses(
        (status = 200, description = "Recent posts", body = BlogPostListDto),
        (status = 422, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListPostsParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BlogPostService::new(state.db()?);

    let posts = service.get_recent(unbounded_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(BlogPostListDto {
            posts: posts.into_iter().map(BlogPost::into_dto).collect(),
        }),
    ))
}

/// Get a single blog post by slug.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - No post has this slug
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = BLOG_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "The post", body = BlogPostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BlogPostService::new(state.db()?);

    let post = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Create a new blog post.
///
/// `created_at` is kept when supplied and set to the current time otherwise;
/// `updated_at` is always set by the server.
///
/// # Returns
/// - `200 OK` - `{"id": "<new id>"}`
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database unavailable or database error
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = BLOG_TAG,
    request_body = CreateBlogPostRequest,
    responses(
        (status = 200, description = "Post created", body = CreatedDto),
        (status = 422, description = "Invalid post data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBlogPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBlogPostParams::from_dto(payload.data);

    let service = BlogPostService::new(state.db()?);

    let post = service.create(params).await?;

    Ok((
        StatusCode::OK,
        Json(CreatedDto {
            id: post.id.to_string(),
        }),
    ))
}
