//! Post routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::posts::{add_comment, create_post, delete_post, get_post, list_posts, update_post},
    AppState,
};

/// Create post and comment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/:id/comment", post(add_comment))
}
