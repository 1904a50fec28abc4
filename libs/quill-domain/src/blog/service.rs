//! Blog service - Business logic orchestration
//!
//! This module contains the core business logic for the post and comment
//! lifecycle. The service coordinates between the domain entities and the
//! repository port.

use super::{BlogError, Comment, CommentDraft, Post, PostDraft, PostId};
use crate::ports::PostRepository;

/// Service for managing blog posts and their comments
///
/// This service encapsulates the business rules of the post lifecycle:
/// - Validates candidate posts (non-empty title and content)
/// - Assigns identifiers and publish timestamps server-side
/// - Coordinates with the backing store via the repository port
///
/// ## Static Dispatch
///
/// The service is generic over any `PostRepository` implementation.
/// The compiler will generate specialized versions for each concrete type,
/// resulting in zero-cost abstractions.
///
/// There is no concurrency control: concurrent updates or deletes to the
/// same post are last-write-wins, and the two-step read in [`get_post`]
/// is a non-atomic snapshot.
///
/// [`get_post`]: BlogService::get_post
pub struct BlogService<R> {
    repository: R,
}

impl<R> BlogService<R>
where
    R: PostRepository,
{
    /// Create a new BlogService with the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a new blog post
    ///
    /// Validates the draft, derives the post id from its title, persists
    /// the post, and returns the stored value with an empty comment list.
    ///
    /// # Errors
    ///
    /// - `BlogError::InvalidPost` if title or content is empty or absent;
    ///   nothing is persisted in that case
    /// - `BlogError::StoreFailure` if the store operation fails
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, BlogError> {
        let (title, content, image_url) = validate(draft)?;

        let post = Post::new(title, content, image_url);
        self.repository.insert_post(&post).await?;

        Ok(post)
    }

    /// Get every post currently in the store
    ///
    /// Comment lists are not populated in the list view; ordering is
    /// store-defined and unspecified.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the query fails
    pub async fn all_posts(&self) -> Result<Vec<Post>, BlogError> {
        self.repository.fetch_all_posts().await
    }

    /// Get a single post with its full, current set of comments
    ///
    /// The post record and its comments are read separately and merged.
    /// The two reads are not atomic: a concurrent write between them can
    /// yield a stale comment list.
    ///
    /// # Errors
    ///
    /// - `BlogError::PostNotFound` if no post with that id exists
    /// - `BlogError::StoreFailure` if a query fails
    pub async fn get_post(&self, id: &PostId) -> Result<Post, BlogError> {
        let mut post = self
            .repository
            .fetch_post(id)
            .await?
            .ok_or_else(|| BlogError::PostNotFound(id.clone()))?;

        let comments = self.repository.fetch_comments(id).await?;
        post.attach_comments(comments);

        Ok(post)
    }

    /// Update an existing post in place
    ///
    /// The draft is validated exactly as in [`create_post`], and before the
    /// existence check: an invalid draft against a nonexistent id fails
    /// with `InvalidPost`, not `PostNotFound`. On success only title,
    /// content and image URL change; the id and comments are untouched.
    ///
    /// # Errors
    ///
    /// - `BlogError::InvalidPost` if title or content is empty or absent
    /// - `BlogError::PostNotFound` if no post with that id exists
    /// - `BlogError::StoreFailure` if a store operation fails
    ///
    /// [`create_post`]: BlogService::create_post
    pub async fn update_post(&self, id: &PostId, draft: PostDraft) -> Result<Post, BlogError> {
        // Input shape is checked before existence
        let (title, content, image_url) = validate(draft)?;

        let mut post = self
            .repository
            .fetch_post(id)
            .await?
            .ok_or_else(|| BlogError::PostNotFound(id.clone()))?;

        post.apply(title, content, image_url);
        self.repository.update_post(&post).await?;

        Ok(post)
    }

    /// Delete a post and, through the store cascade, its comments
    ///
    /// Returns the pre-deletion post value.
    ///
    /// # Errors
    ///
    /// - `BlogError::PostNotFound` if no post with that id exists
    /// - `BlogError::StoreFailure` if a store operation fails
    pub async fn delete_post(&self, id: &PostId) -> Result<Post, BlogError> {
        let post = self
            .repository
            .fetch_post(id)
            .await?
            .ok_or_else(|| BlogError::PostNotFound(id.clone()))?;

        self.repository.delete_post(id).await?;

        Ok(post)
    }

    /// Add a comment to an existing post
    ///
    /// Assigns a fresh comment id and the current server time as publish
    /// timestamp, persists the comment, and returns the persisted value
    /// (not an echo of the caller's input).
    ///
    /// # Errors
    ///
    /// - `BlogError::PostNotFound` if the named post does not exist;
    ///   no comment is created in that case
    /// - `BlogError::StoreFailure` if a store operation fails
    pub async fn add_comment(
        &self,
        post_id: &PostId,
        draft: CommentDraft,
    ) -> Result<Comment, BlogError> {
        let post = self
            .repository
            .fetch_post(post_id)
            .await?
            .ok_or_else(|| BlogError::PostNotFound(post_id.clone()))?;

        let comment = Comment::new(post.id().clone(), draft.content.unwrap_or_default());
        self.repository.insert_comment(&comment).await?;

        Ok(comment)
    }
}

/// Check a candidate post for empty or absent required fields
///
/// Returns the owned field values on success so the caller moves them
/// straight into the entity.
fn validate(draft: PostDraft) -> Result<(String, String, Option<String>), BlogError> {
    let title = draft.title.filter(|t| !t.is_empty());
    let content = draft.content.filter(|c| !c.is_empty());

    match (title, content) {
        (Some(title), Some(content)) => Ok((title, content, draft.image_url)),
        _ => Err(BlogError::InvalidPost),
    }
}
