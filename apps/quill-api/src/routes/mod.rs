//! API routes

pub mod posts;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::posts::{CommentRequest, CommentResponse, ErrorResponse, PostRequest, PostResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::posts::list_posts,
        handlers::posts::get_post,
        handlers::posts::create_post,
        handlers::posts::update_post,
        handlers::posts::delete_post,
        handlers::posts::add_comment,
        health_handler
    ),
    components(
        schemas(PostRequest, CommentRequest, PostResponse, CommentResponse, ErrorResponse)
    ),
    tags(
        (name = "posts", description = "Blog post and comment endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Quill API",
        version = "0.1.0",
        description = "CRUD API for blog posts and their comments"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(posts::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
