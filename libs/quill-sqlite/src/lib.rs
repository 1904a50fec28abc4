//! # Quill SQLite Adapter
//!
//! This crate implements the domain's `PostRepository` port on SQLite via
//! sqlx. It owns the relational schema (posts and comments tables with a
//! cascade-deleting foreign key) and converts all sqlx errors to domain
//! errors.

pub mod infrastructure;

pub use infrastructure::SqlitePostRepository;
