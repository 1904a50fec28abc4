//! # Quill Domain Layer
//!
//! This crate contains the pure business logic and domain models for the Quill
//! blog platform. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Post, Comment)
//! - **Ports**: Trait definitions for external dependencies (PostRepository)
//! - **Services**: Business logic orchestration
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, HTTP, etc.).
//! All external dependencies are expressed as traits (ports) that will be
//! implemented by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use quill_domain::blog::{BlogService, PostDraft};
//! use quill_domain::ports::PostRepository;
//!
//! // The service is generic over any PostRepository implementation
//! async fn example<R: PostRepository>(service: BlogService<R>) {
//!     let draft = PostDraft::new(Some("Hello World"), Some("First post"), None);
//!     let post = service.create_post(draft).await.unwrap();
//!     println!("Created post: {}", post.id());
//! }
//! ```

pub mod blog;
pub mod ports;

// Re-export commonly used types
pub use blog::{BlogError, BlogService, Comment, CommentDraft, CommentId, Post, PostDraft, PostId};
pub use ports::PostRepository;
