//! SQLite Post Repository Implementation
//!
//! This module implements the `PostRepository` trait using SQLite as the
//! backend. It owns the relational schema and converts sqlx errors to
//! domain errors.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

use quill_domain::{
    blog::{
        entity::{Comment, Post},
        error::BlogError,
        ids::PostId,
    },
    ports::PostRepository,
};

/// Schema applied on connect.
///
/// Comments carry a cascade-deleting foreign key to posts, so removing a
/// post removes its comments at the store level, not in service logic.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS posts (
    id        TEXT PRIMARY KEY,
    title     TEXT NOT NULL,
    content   TEXT NOT NULL,
    image_url TEXT
);

CREATE TABLE IF NOT EXISTS comments (
    id           TEXT PRIMARY KEY,
    post_id      TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    content      TEXT NOT NULL,
    published_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id);
";

/// SQLite-based implementation of the PostRepository port
///
/// This adapter translates domain store operations into SQL against a
/// connection pool. Post and comment rows live in two related tables;
/// `ON DELETE CASCADE` on the comments foreign key implements the
/// post-owns-comments lifecycle.
///
/// ## Error Handling
///
/// All sqlx errors are converted to `BlogError::StoreFailure` with
/// descriptive messages for debugging.
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Open (or create) a SQLite database at the given URL
    ///
    /// Foreign key enforcement is switched on for every pooled connection
    /// and the schema is applied before the repository is returned.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::StoreFailure` if the URL is invalid, the
    /// database cannot be opened, or the schema cannot be applied
    pub async fn connect(url: &str) -> Result<Self, BlogError> {
        info!(url = %url, "Opening SQLite database");

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|err| {
                BlogError::store_failure(format!("invalid database url '{}': {}", url, err))
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|err| {
                BlogError::store_failure(format!("failed to open database '{}': {}", url, err))
            })?;

        Self::with_pool(pool).await
    }

    /// Open an in-memory database for testing
    pub async fn in_memory() -> Result<Self, BlogError> {
        debug!("Opening in-memory SQLite database");

        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|err| BlogError::store_failure(err.to_string()))?
            .foreign_keys(true);

        // An in-memory database exists per connection; the pool must stay
        // on a single connection or each checkout sees an empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|err| {
                BlogError::store_failure(format!("failed to open in-memory database: {}", err))
            })?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, BlogError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|err| {
                BlogError::store_failure(format!("failed to apply schema: {}", err))
            })?;

        Ok(Self { pool })
    }
}

/// Post row as stored; comments are a separate table
#[derive(sqlx::FromRow)]
struct PostRow {
    id: String,
    title: String,
    content: String,
    image_url: Option<String>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::from_parts(
            row.id.into(),
            row.title,
            row.content,
            row.image_url,
            Vec::new(),
        )
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    post_id: String,
    content: String,
    published_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::from_parts(
            row.id.into(),
            row.post_id.into(),
            row.content,
            row.published_at,
        )
    }
}

impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self, post), fields(post_id = %post.id()))]
    fn insert_post(
        &self,
        post: &Post,
    ) -> impl std::future::Future<Output = Result<(), BlogError>> + Send {
        let pool = self.pool.clone();
        let id = post.id().to_string();
        let title = post.title().to_string();
        let content = post.content().to_string();
        let image_url = post.image_url().map(str::to_string);

        async move {
            debug!(post_id = %id, "Inserting post");

            sqlx::query("INSERT INTO posts (id, title, content, image_url) VALUES (?, ?, ?, ?)")
                .bind(&id)
                .bind(&title)
                .bind(&content)
                .bind(&image_url)
                .execute(&pool)
                .await
                .map_err(|err| {
                    error!(post_id = %id, error = ?err, "Failed to insert post");
                    BlogError::store_failure(format!("insert failed for post '{}': {}", id, err))
                })?;

            Ok(())
        }
    }

    #[instrument(skip(self), fields(post_id = %id))]
    fn fetch_post(
        &self,
        id: &PostId,
    ) -> impl std::future::Future<Output = Result<Option<Post>, BlogError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();

        async move {
            let row = sqlx::query_as::<_, PostRow>(
                "SELECT id, title, content, image_url FROM posts WHERE id = ?",
            )
            .bind(&id)
            .fetch_optional(&pool)
            .await
            .map_err(|err| {
                error!(post_id = %id, error = ?err, "Failed to fetch post");
                BlogError::store_failure(format!("fetch failed for post '{}': {}", id, err))
            })?;

            Ok(row.map(Post::from))
        }
    }

    #[instrument(skip(self))]
    fn fetch_all_posts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Post>, BlogError>> + Send {
        let pool = self.pool.clone();

        async move {
            let rows =
                sqlx::query_as::<_, PostRow>("SELECT id, title, content, image_url FROM posts")
                    .fetch_all(&pool)
                    .await
                    .map_err(|err| {
                        error!(error = ?err, "Failed to fetch posts");
                        BlogError::store_failure(format!("fetch of all posts failed: {}", err))
                    })?;

            Ok(rows.into_iter().map(Post::from).collect())
        }
    }

    #[instrument(skip(self, post), fields(post_id = %post.id()))]
    fn update_post(
        &self,
        post: &Post,
    ) -> impl std::future::Future<Output = Result<(), BlogError>> + Send {
        let pool = self.pool.clone();
        let id = post.id().to_string();
        let title = post.title().to_string();
        let content = post.content().to_string();
        let image_url = post.image_url().map(str::to_string);

        async move {
            debug!(post_id = %id, "Updating post");

            sqlx::query("UPDATE posts SET title = ?, content = ?, image_url = ? WHERE id = ?")
                .bind(&title)
                .bind(&content)
                .bind(&image_url)
                .bind(&id)
                .execute(&pool)
                .await
                .map_err(|err| {
                    error!(post_id = %id, error = ?err, "Failed to update post");
                    BlogError::store_failure(format!("update failed for post '{}': {}", id, err))
                })?;

            Ok(())
        }
    }

    #[instrument(skip(self), fields(post_id = %id))]
    fn delete_post(
        &self,
        id: &PostId,
    ) -> impl std::future::Future<Output = Result<(), BlogError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();

        async move {
            debug!(post_id = %id, "Deleting post");

            // Comments go with the post via ON DELETE CASCADE
            sqlx::query("DELETE FROM posts WHERE id = ?")
                .bind(&id)
                .execute(&pool)
                .await
                .map_err(|err| {
                    error!(post_id = %id, error = ?err, "Failed to delete post");
                    BlogError::store_failure(format!("delete failed for post '{}': {}", id, err))
                })?;

            Ok(())
        }
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id(), post_id = %comment.post_id()))]
    fn insert_comment(
        &self,
        comment: &Comment,
    ) -> impl std::future::Future<Output = Result<(), BlogError>> + Send {
        let pool = self.pool.clone();
        let id = comment.id().to_string();
        let post_id = comment.post_id().to_string();
        let content = comment.content().to_string();
        let published_at = *comment.published_at();

        async move {
            debug!(comment_id = %id, post_id = %post_id, "Inserting comment");

            sqlx::query(
                "INSERT INTO comments (id, post_id, content, published_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&post_id)
            .bind(&content)
            .bind(published_at)
            .execute(&pool)
            .await
            .map_err(|err| {
                error!(comment_id = %id, error = ?err, "Failed to insert comment");
                BlogError::store_failure(format!("insert failed for comment '{}': {}", id, err))
            })?;

            Ok(())
        }
    }

    #[instrument(skip(self), fields(post_id = %post_id))]
    fn fetch_comments(
        &self,
        post_id: &PostId,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>, BlogError>> + Send {
        let pool = self.pool.clone();
        let post_id = post_id.to_string();

        async move {
            let rows = sqlx::query_as::<_, CommentRow>(
                "SELECT id, post_id, content, published_at FROM comments WHERE post_id = ?",
            )
            .bind(&post_id)
            .fetch_all(&pool)
            .await
            .map_err(|err| {
                error!(post_id = %post_id, error = ?err, "Failed to fetch comments");
                BlogError::store_failure(format!(
                    "fetch of comments failed for post '{}': {}",
                    post_id, err
                ))
            })?;

            Ok(rows.into_iter().map(Comment::from).collect())
        }
    }
}
