//! Integration tests for the SQLite post repository
//!
//! These tests verify that:
//! 1. Post rows round-trip through insert and fetch
//! 2. Updates persist the mutable fields only
//! 3. Comment rows stay attached to their owning post
//! 4. Deleting a post cascades to its comments at the store level

use quill_domain::blog::entity::{Comment, Post};
use quill_domain::blog::ids::PostId;
use quill_domain::ports::PostRepository;
use quill_sqlite::SqlitePostRepository;

async fn repository() -> SqlitePostRepository {
    SqlitePostRepository::in_memory()
        .await
        .expect("Failed to open in-memory database")
}

#[tokio::test]
async fn test_post_roundtrip() {
    let repo = repository().await;

    let post = Post::new(
        "Hello World".to_string(),
        "First post".to_string(),
        Some("https://example.com/cover.png".to_string()),
    );
    repo.insert_post(&post).await.expect("insert should succeed");

    let fetched = repo
        .fetch_post(post.id())
        .await
        .expect("fetch should succeed")
        .expect("post should exist");

    assert_eq!(fetched.id(), post.id());
    assert_eq!(fetched.title(), "Hello World");
    assert_eq!(fetched.content(), "First post");
    assert_eq!(fetched.image_url(), Some("https://example.com/cover.png"));
    assert!(fetched.comments().is_empty());
}

#[tokio::test]
async fn test_fetch_unknown_post_is_none() {
    let repo = repository().await;

    let missing = repo
        .fetch_post(&PostId::from("Missing_abc"))
        .await
        .expect("fetch should succeed");

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_fetch_all_posts() {
    let repo = repository().await;

    let one = Post::new("One".to_string(), "a".to_string(), None);
    let two = Post::new("Two".to_string(), "b".to_string(), None);
    repo.insert_post(&one).await.unwrap();
    repo.insert_post(&two).await.unwrap();

    let all = repo.fetch_all_posts().await.unwrap();

    let mut ids: Vec<String> = all.iter().map(|p| p.id().to_string()).collect();
    let mut expected = vec![one.id().to_string(), two.id().to_string()];
    ids.sort();
    expected.sort();

    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_update_persists_mutable_fields() {
    let repo = repository().await;

    let mut post = Post::new("Old Title".to_string(), "Old body".to_string(), None);
    repo.insert_post(&post).await.unwrap();

    post.apply(
        "New Title".to_string(),
        "New body".to_string(),
        Some("https://x/y.png".to_string()),
    );
    repo.update_post(&post).await.unwrap();

    let fetched = repo.fetch_post(post.id()).await.unwrap().unwrap();
    assert_eq!(fetched.id(), post.id());
    assert_eq!(fetched.title(), "New Title");
    assert_eq!(fetched.content(), "New body");
    assert_eq!(fetched.image_url(), Some("https://x/y.png"));
}

#[tokio::test]
async fn test_comments_stay_with_their_post() {
    let repo = repository().await;

    let chatty = Post::new("Chatty".to_string(), "body".to_string(), None);
    let quiet = Post::new("Quiet".to_string(), "body".to_string(), None);
    repo.insert_post(&chatty).await.unwrap();
    repo.insert_post(&quiet).await.unwrap();

    let first = Comment::new(chatty.id().clone(), "nice".to_string());
    let second = Comment::new(chatty.id().clone(), "very nice".to_string());
    repo.insert_comment(&first).await.unwrap();
    repo.insert_comment(&second).await.unwrap();

    let chatty_comments = repo.fetch_comments(chatty.id()).await.unwrap();
    let quiet_comments = repo.fetch_comments(quiet.id()).await.unwrap();

    assert_eq!(chatty_comments.len(), 2);
    assert!(quiet_comments.is_empty());

    let restored = chatty_comments
        .iter()
        .find(|c| c.id() == first.id())
        .expect("first comment should be stored");
    assert_eq!(restored.content(), "nice");
    assert_eq!(restored.post_id(), chatty.id());
    assert_eq!(restored.published_at(), first.published_at());
}

#[tokio::test]
async fn test_delete_cascades_to_comments() {
    let repo = repository().await;

    let post = Post::new("Doomed".to_string(), "body".to_string(), None);
    repo.insert_post(&post).await.unwrap();
    repo.insert_comment(&Comment::new(post.id().clone(), "gone soon".to_string()))
        .await
        .unwrap();

    repo.delete_post(post.id()).await.unwrap();

    assert!(repo.fetch_post(post.id()).await.unwrap().is_none());
    assert!(repo.fetch_comments(post.id()).await.unwrap().is_empty());
}
