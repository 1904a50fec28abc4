//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must
//! implement. Following hexagonal architecture, the domain defines what it
//! needs, and the infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::blog::{
    entity::{Comment, Post},
    error::BlogError,
    ids::PostId,
};

/// Port for post and comment persistence
///
/// This trait abstracts away the backing store (SQLite, Postgres, in-memory,
/// etc.). Implementations must handle:
/// - Durable CRUD for post records keyed by their string id
/// - Comment rows carrying a foreign reference to their owning post
/// - Cascade delete: removing a post removes its comments
/// - Converting infrastructure errors to `BlogError::StoreFailure`
///
/// Posts returned by `fetch_post` and `fetch_all_posts` carry an empty
/// comment list; attaching comments is the service's two-step read, not a
/// store concern.
pub trait PostRepository: Send + Sync {
    /// Insert a newly created post
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the insert fails
    fn insert_post(&self, post: &Post) -> impl Future<Output = Result<(), BlogError>> + Send;

    /// Fetch a single post record by id
    ///
    /// Returns `None` when no post with that id exists. The returned post
    /// has an empty comment list.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the query fails
    fn fetch_post(&self, id: &PostId)
        -> impl Future<Output = Result<Option<Post>, BlogError>> + Send;

    /// Fetch every post currently in the store
    ///
    /// Ordering is store-defined and unspecified; comment lists are empty.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the query fails
    fn fetch_all_posts(&self) -> impl Future<Output = Result<Vec<Post>, BlogError>> + Send;

    /// Persist the mutable fields of an existing post
    ///
    /// Overwrites title, content and image URL for the post with the same
    /// id. The comment rows are untouched.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the update fails
    fn update_post(&self, post: &Post) -> impl Future<Output = Result<(), BlogError>> + Send;

    /// Delete a post by id
    ///
    /// The store cascades the delete to the post's comments.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the delete fails
    fn delete_post(&self, id: &PostId) -> impl Future<Output = Result<(), BlogError>> + Send;

    /// Insert a new comment against its owning post
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the insert fails
    fn insert_comment(
        &self,
        comment: &Comment,
    ) -> impl Future<Output = Result<(), BlogError>> + Send;

    /// Fetch all comments belonging to the given post
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the query fails
    fn fetch_comments(
        &self,
        post_id: &PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, BlogError>> + Send;
}
