use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Separator between the title slug and the random suffix of a `PostId`.
const SLUG_SEPARATOR: char = '_';

/// Generate a URL-safe random identifier string.
///
/// Encodes 128 random bits with the URL-safe base64 alphabet, unpadded.
/// The result is always 22 characters and never contains `+`, `/`, `=` or
/// spaces, so it can be embedded in a URL path segment as-is. Uniqueness is
/// probabilistic; no check against the store is performed.
fn random_id() -> String {
    URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}

/// Unique identifier for a Post
///
/// The identifier doubles as the post's URL segment: a slug derived from the
/// title keeps it human-readable, while the random suffix guarantees
/// uniqueness even for duplicate titles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(String);

impl PostId {
    /// Derive a fresh PostId from a post title.
    ///
    /// Spaces are removed from the title; no other characters are escaped.
    /// A title containing the separator itself is taken verbatim.
    pub fn from_title(title: &str) -> Self {
        let slug = title.replace(' ', "");
        Self(format!("{slug}{SLUG_SEPARATOR}{}", random_id()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a Comment
///
/// CommentId is a plain random identifier; comments are never addressed by
/// URL, but the same URL-safe alphabet is used for consistency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(String);

impl CommentId {
    /// Generate a new random CommentId
    pub fn generate() -> Self {
        Self(random_id())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CommentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_distinct_and_url_safe() {
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let id = random_id();

            assert_eq!(id.len(), 22, "unpadded 128-bit encoding is 22 chars");
            assert!(
                !id.contains(['+', '/', '=', ' ']),
                "id {} contains a URL-unsafe character",
                id
            );
            assert!(seen.insert(id), "duplicate id generated");
        }
    }

    #[test]
    fn test_post_id_embeds_title_slug() {
        let id = PostId::from_title("Hello World");

        let (slug, suffix) = id
            .as_str()
            .split_once(SLUG_SEPARATOR)
            .expect("post id should contain the separator");

        assert_eq!(slug, "HelloWorld");
        assert_eq!(suffix.len(), 22);
    }

    #[test]
    fn test_post_ids_for_same_title_differ() {
        let id1 = PostId::from_title("Same Title");
        let id2 = PostId::from_title("Same Title");

        assert_ne!(id1, id2, "random suffix should disambiguate equal titles");
    }

    #[test]
    fn test_post_id_display_roundtrip() {
        let id = PostId::from("HelloWorld_abc123");
        assert_eq!(format!("{}", id), "HelloWorld_abc123");
        assert_eq!(id.as_str(), "HelloWorld_abc123");
    }

    #[test]
    fn test_comment_id_generation() {
        let id1 = CommentId::generate();
        let id2 = CommentId::generate();

        assert_ne!(id1, id2, "Each CommentId should be unique");
        assert_eq!(id1.as_str().len(), 22);
    }
}
