//! Domain errors for blog operations
//!
//! This module defines all possible errors that can occur in the post and
//! comment lifecycle. These are domain-level errors that abstract away
//! infrastructure details.

use thiserror::Error;

use crate::blog::ids::PostId;

/// Errors that can occur during blog operations
///
/// The three variants stand for the three distinguishable outcomes the
/// service contract promises: invalid input, absent entity, and an
/// unexpected store failure (which surfaces as a server error and is not
/// retried).
#[derive(Error, Debug)]
pub enum BlogError {
    /// A required post field is missing or empty
    #[error("Title or Content cannot be empty")]
    InvalidPost,

    /// No post exists with the given identifier
    #[error("No post found for id {0}")]
    PostNotFound(PostId),

    /// The backing store failed unexpectedly
    #[error("Store operation failed: {0}")]
    StoreFailure(String),
}

impl BlogError {
    /// Create a not-found error for the given post id
    pub fn post_not_found(id: impl Into<PostId>) -> Self {
        Self::PostNotFound(id.into())
    }

    /// Create a store failure error with a message
    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::StoreFailure(msg.into())
    }
}

/// Result type alias for blog operations
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_post_error() {
        let err = BlogError::InvalidPost;
        assert_eq!(err.to_string(), "Title or Content cannot be empty");
    }

    #[test]
    fn test_post_not_found_error() {
        let err = BlogError::post_not_found("HelloWorld_abc123");
        assert!(matches!(err, BlogError::PostNotFound(_)));
        assert_eq!(err.to_string(), "No post found for id HelloWorld_abc123");
    }

    #[test]
    fn test_store_failure_error() {
        let err = BlogError::store_failure("connection reset");
        assert!(matches!(err, BlogError::StoreFailure(_)));
        assert_eq!(err.to_string(), "Store operation failed: connection reset");
    }
}
