//! Domain entities for the blog
//!
//! This module defines the core domain model for posts and comments.
//! A Post owns its Comments for lifecycle purposes (deleting a post removes
//! its comments); a Comment holds a back-reference to its owning post used
//! only for lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blog::ids::{CommentId, PostId};

/// A blog post
///
/// Posts are the aggregate root of the blog domain:
/// - **Identified by title**: the id embeds a slug of the title plus a
///   random suffix, and never changes once assigned
/// - **Always valid**: a persisted post has a non-empty title and content
/// - **Comment owner**: comments live and die with their post
///
/// # Example
///
/// ```rust
/// use quill_domain::blog::entity::Post;
///
/// let post = Post::new("Hello World".to_string(), "First post".to_string(), None);
/// println!("Created post: {}", post.id());
/// assert!(post.comments().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, derived from the title at creation
    id: PostId,

    /// Post title, non-empty
    title: String,

    /// Post body, non-empty
    content: String,

    /// Optional cover image URL
    image_url: Option<String>,

    /// Comments attached to this post, in store order
    comments: Vec<Comment>,
}

impl Post {
    /// Create a new Post with the given fields
    ///
    /// This is a pure domain constructor - it doesn't perform any I/O.
    /// The id is derived from the title; the comment list starts empty.
    /// Callers are expected to have validated title and content already.
    pub fn new(title: String, content: String, image_url: Option<String>) -> Self {
        Self {
            id: PostId::from_title(&title),
            title,
            content,
            image_url,
            comments: Vec::new(),
        }
    }

    /// Create a Post with explicit values (used for reconstruction)
    pub fn from_parts(
        id: PostId,
        title: String,
        content: String,
        image_url: Option<String>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image_url,
            comments,
        }
    }

    /// Get the post's unique identifier
    pub fn id(&self) -> &PostId {
        &self.id
    }

    /// Get the post title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the post body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the cover image URL (if set)
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Get the comments attached to this post
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Overwrite the mutable fields of the post in place
    ///
    /// Only title, content and image URL change; the id and the comment
    /// list are untouched.
    pub fn apply(&mut self, title: String, content: String, image_url: Option<String>) {
        self.title = title;
        self.content = content;
        self.image_url = image_url;
    }

    /// Attach the post's comments after a separate comment fetch
    ///
    /// Called by the service's two-step read; replaces the current list.
    pub fn attach_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }
}

/// A comment on a blog post
///
/// Comments are append-only: once created they are never edited or removed
/// individually, only swept away with their owning post. The publish
/// timestamp is assigned server-side at creation and never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for this comment
    id: CommentId,

    /// Identifier of the owning post
    post_id: PostId,

    /// Free-text comment body
    content: String,

    /// Timestamp when the comment was published
    published_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment on the given post
    ///
    /// Assigns a fresh id and stamps the comment with the current time.
    pub fn new(post_id: PostId, content: String) -> Self {
        Self {
            id: CommentId::generate(),
            post_id,
            content,
            published_at: Utc::now(),
        }
    }

    /// Create a Comment with explicit values (used for reconstruction)
    pub fn from_parts(
        id: CommentId,
        post_id: PostId,
        content: String,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_id,
            content,
            published_at,
        }
    }

    /// Get the comment's unique identifier
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Get the identifier of the owning post
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Get the comment body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the publish timestamp
    pub fn published_at(&self) -> &DateTime<Utc> {
        &self.published_at
    }
}

/// A not-yet-validated candidate post arriving at the boundary
///
/// All fields are optional so that "absent" and "empty" are both
/// expressible; validation happens in the service, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostDraft {
    /// Convenience constructor from borrowed strings
    pub fn new(title: Option<&str>, content: Option<&str>, image_url: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            image_url: image_url.map(str::to_string),
        }
    }
}

/// A candidate comment arriving at the boundary
///
/// Comment content is free text and not validated; an absent body becomes
/// an empty comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: Option<String>,
}

impl CommentDraft {
    /// Convenience constructor from a borrowed string
    pub fn new(content: Option<&str>) -> Self {
        Self {
            content: content.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation() {
        let post = Post::new(
            "Hello World".to_string(),
            "First post".to_string(),
            Some("https://example.com/cover.png".to_string()),
        );

        assert!(post.id().as_str().starts_with("HelloWorld_"));
        assert_eq!(post.title(), "Hello World");
        assert_eq!(post.content(), "First post");
        assert_eq!(post.image_url(), Some("https://example.com/cover.png"));
        assert!(post.comments().is_empty());
    }

    #[test]
    fn test_post_apply_keeps_id_and_comments() {
        let mut post = Post::new("Old Title".to_string(), "Old body".to_string(), None);
        let id = post.id().clone();
        post.attach_comments(vec![Comment::new(id.clone(), "hi".to_string())]);

        post.apply("New Title".to_string(), "New body".to_string(), None);

        assert_eq!(post.id(), &id);
        assert_eq!(post.title(), "New Title");
        assert_eq!(post.content(), "New body");
        assert_eq!(post.comments().len(), 1);
    }

    #[test]
    fn test_comment_creation_stamps_time() {
        let before = Utc::now();
        let comment = Comment::new(PostId::from("Post_abc"), "nice read".to_string());

        assert_eq!(comment.post_id().as_str(), "Post_abc");
        assert_eq!(comment.content(), "nice read");
        assert!(*comment.published_at() >= before);
    }

    #[test]
    fn test_comment_from_parts() {
        let id = CommentId::generate();
        let now = Utc::now();

        let comment = Comment::from_parts(
            id.clone(),
            PostId::from("Post_abc"),
            "restored".to_string(),
            now,
        );

        assert_eq!(comment.id(), &id);
        assert_eq!(comment.published_at(), &now);
    }
}
