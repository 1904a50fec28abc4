//! Post and comment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use quill_domain::blog::{error::BlogError, ids::PostId};

use crate::{
    dto::posts::{CommentRequest, CommentResponse, ErrorResponse, PostRequest, PostResponse},
    AppState,
};

/// Map a domain error to a status code and error body
///
/// Store failures are logged with their detail but answered with a generic
/// message; the other variants carry client-safe text already.
fn error_response(err: BlogError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        BlogError::InvalidPost => (StatusCode::BAD_REQUEST, err.to_string()),
        BlogError::PostNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        BlogError::StoreFailure(detail) => {
            error!(detail = %detail, "Store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message }))
}

/// List all blog posts
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All blog posts, comment lists not populated", body = [PostResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    match state.blog_service.all_posts().await {
        Ok(posts) => {
            let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

/// Get a single post with its comments
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post with its full comment list", body = PostResponse),
        (status = 404, description = "No post with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = PostId::from(id);

    match state.blog_service.get_post(&id).await {
        Ok(post) => (StatusCode::OK, Json(PostResponse::from(post))).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// Create a new blog post
#[utoipa::path(
    post,
    path = "/posts",
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post created", body = PostResponse),
        (status = 400, description = "Title or content empty or absent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostRequest>,
) -> impl IntoResponse {
    info!("Received create post request");

    match state.blog_service.create_post(payload.into()).await {
        Ok(post) => {
            info!(post_id = %post.id(), "Created post");
            (StatusCode::OK, Json(PostResponse::from(post))).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

/// Update an existing blog post
#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Title or content empty or absent", body = ErrorResponse),
        (status = 404, description = "No post with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PostRequest>,
) -> impl IntoResponse {
    let id = PostId::from(id);

    match state.blog_service.update_post(&id, payload.into()).await {
        Ok(post) => {
            info!(post_id = %post.id(), "Updated post");
            (StatusCode::OK, Json(PostResponse::from(post))).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

/// Delete a blog post and its comments
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted; body is the pre-deletion post", body = PostResponse),
        (status = 404, description = "No post with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = PostId::from(id);

    match state.blog_service.delete_post(&id).await {
        Ok(post) => {
            info!(post_id = %post.id(), "Deleted post");
            (StatusCode::OK, Json(PostResponse::from(post))).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}

/// Add a comment to a post
#[utoipa::path(
    post,
    path = "/posts/{id}/comment",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "The persisted comment with its generated id and timestamp", body = CommentResponse),
        (status = 404, description = "No post with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> impl IntoResponse {
    let id = PostId::from(id);

    match state.blog_service.add_comment(&id, payload.into()).await {
        Ok(comment) => {
            info!(comment_id = %comment.id(), post_id = %id, "Added comment");
            (StatusCode::OK, Json(CommentResponse::from(comment))).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}
