use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        blog::{BlogPostDto, BlogPostListDto, CreateBlogPostDto, CreateBlogPostRequest},
        category::{CategoryDto, CategoryKind, CategoryListDto},
        contact::{ContactMessageDto, ContactReceiptDto, CreateContactMessageRequest},
        diagnostic::DiagnosticDto,
        item::{
            AppItemDto, AppItemListDto, CreateAppItemDto, CreateAppItemRequest, DownloadType,
            ItemKind,
        },
    },
    server::{
        controller::{blog, category, contact, item, system},
        state::AppState,
    },
};

/// OpenAPI document assembled from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(title = "Mod APK Hub API", version = "1.0.0"),
    paths(
        system::root,
        system::test_database,
        item::list_items,
        item::latest_items,
        item::get_item,
        item::create_item,
        category::list_categories,
        blog::list_posts,
        blog::get_post,
        blog::create_post,
        contact::submit_contact,
    ),
    components(schemas(
        ErrorDto,
        CreatedDto,
        MessageDto,
        ItemKind,
        DownloadType,
        CreateAppItemDto,
        CreateAppItemRequest,
        AppItemDto,
        AppItemListDto,
        CategoryKind,
        CategoryDto,
        CategoryListDto,
        CreateBlogPostDto,
        CreateBlogPostRequest,
        BlogPostDto,
        BlogPostListDto,
        ContactMessageDto,
        CreateContactMessageRequest,
        ContactReceiptDto,
        DiagnosticDto,
    )),
    tags(
        (name = "system", description = "Liveness and diagnostics"),
        (name = "item", description = "App and game listings"),
        (name = "category", description = "Catalog categories"),
        (name = "blog", description = "Blog posts"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(system::root))
        .route("/test", get(system::test_database))
        .route("/api/items", get(item::list_items).post(item::create_item))
        .route("/api/items/latest", get(item::latest_items))
        .route("/api/items/{slug}", get(item::get_item))
        .route("/api/categories", get(category::list_categories))
        .route("/api/blog", get(blog::list_posts).post(blog::create_post))
        .route("/api/blog/{slug}", get(blog::get_post))
        .route("/api/contact", post(contact::submit_contact))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the complete application with CORS, request tracing and state.
///
/// CORS admits any origin, method and header with credentials. Because a wildcard
/// cannot be combined with credentials, each is mirrored from the request instead.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
