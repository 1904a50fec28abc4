//! Quill API - Blog HTTP Service
//!
//! HTTP service exposing CRUD endpoints for blog posts and their comments,
//! backed by a SQLite store behind the domain's repository port.

mod dto;
mod handlers;
mod routes;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use quill_domain::blog::service::BlogService;
use quill_sqlite::SqlitePostRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<SqlitePostRepository>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting Quill API service");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database location, created on first run
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        info!("DATABASE_URL not set, using default: sqlite://quill.db");
        "sqlite://quill.db".to_string()
    });

    info!(url = %database_url, "Initializing SQLite post repository");

    // Open the store and apply the schema
    let repository = SqlitePostRepository::connect(&database_url).await?;

    // Create the blog service
    let service = BlogService::new(repository);

    // Create shared application state
    let state = AppState {
        blog_service: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    // Get bind address from environment
    let host = std::env::var("QUILL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("QUILL_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
