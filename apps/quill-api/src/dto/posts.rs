//! DTOs for post and comment endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use quill_domain::blog::entity::{Comment, CommentDraft, Post, PostDraft};

/// Request body for creating or updating a post
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// Post title
    #[schema(example = "Hello World")]
    pub title: Option<String>,
    /// Post body
    #[schema(example = "First post")]
    pub content: Option<String>,
    /// Optional cover image URL
    #[schema(example = "https://example.com/cover.png")]
    pub image_url: Option<String>,
}

impl From<PostRequest> for PostDraft {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            image_url: req.image_url,
        }
    }
}

/// Request body for adding a comment to a post
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    /// Comment body
    #[schema(example = "Great read!")]
    pub content: Option<String>,
}

impl From<CommentRequest> for CommentDraft {
    fn from(req: CommentRequest) -> Self {
        Self {
            content: req.content,
        }
    }
}

/// A post as returned by the API
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Unique post identifier, slug plus random suffix
    #[schema(example = "HelloWorld_0Cu3LWyzRoqAOc9MdVV0hQ")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    /// Comments attached to the post; empty in list views
    pub comments: Vec<CommentResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id().to_string(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            image_url: post.image_url().map(str::to_string),
            comments: post.comments().iter().map(CommentResponse::from).collect(),
        }
    }
}

/// A comment as returned by the API
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Unique comment identifier
    #[schema(example = "0Cu3LWyzRoqAOc9MdVV0hQ")]
    pub id: String,
    /// Identifier of the owning post
    pub post_id: String,
    pub content: String,
    /// Server-assigned publish timestamp
    pub publish_date: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            post_id: comment.post_id().to_string(),
            content: comment.content().to_string(),
            publish_date: *comment.published_at(),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "No post found for id HelloWorld_0Cu3LWyzRoqAOc9MdVV0hQ")]
    pub error: String,
}
