use crate::models::{Post, Sentiment};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

/// Typed update command applied to a stored post.
///
/// There is deliberately no standalone `sentiment` field: a new label can
/// only travel alongside the new content it was computed from, so clients
/// can never set the label themselves.
#[derive(Debug, Default)]
pub struct PostChange {
    pub author: Option<String>,
    pub content: Option<(String, Sentiment)>,
}

/// Thread-safe post table with server-assigned auto-increment ids.
///
/// `DashMap` gives per-row atomicity: each create/update/delete below is a
/// single map operation, which is all the isolation this service needs.
#[derive(Clone, Default)]
pub struct PostStore {
    rows: Arc<DashMap<i64, Post>>,
    next_id: Arc<AtomicI64>,
}

impl PostStore {
    /// Insert a new post. Id, timestamps and the stored sentiment all come
    /// from the server side; the caller supplies the label it computed from
    /// `content`.
    pub fn create(&self, author: String, content: String, sentiment: Sentiment) -> Post {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            author,
            content,
            sentiment,
            created_at: now,
            updated_at: now,
        };

        self.rows.insert(post.id, post.clone());
        post
    }

    /// All posts, newest first (id as tiebreak for equal timestamps).
    pub fn list(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.rows.iter().map(|entry| entry.value().clone()).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.rows.get(&id).map(|post| post.clone())
    }

    /// Apply a change to an existing post. `updated_at` is refreshed on
    /// every successful call; `created_at` never changes.
    pub fn update(&self, id: i64, change: PostChange) -> Option<Post> {
        let mut row = self.rows.get_mut(&id)?;

        if let Some(author) = change.author {
            row.author = author;
        }
        if let Some((content, sentiment)) = change.content {
            row.content = content;
            row.sentiment = sentiment;
        }
        row.updated_at = Utc::now();

        Some(row.clone())
    }

    /// Remove a post, returning it if it existed. Deleting the same id
    /// twice fails the second time.
    pub fn remove(&self, id: i64) -> Option<Post> {
        self.rows.remove(&id).map(|(_, post)| post)
    }
}

/// Shared application state, cloned into every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub posts: PostStore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn create_assigns_sequential_ids_and_timestamps() {
        let store = PostStore::default();

        let first = store.create("a".into(), "x".into(), Sentiment::Neutral);
        let second = store.create("b".into(), "y".into(), Sentiment::Positive);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn list_orders_newest_first() {
        let store = PostStore::default();

        let first = store.create("a".into(), "x".into(), Sentiment::Neutral);
        let second = store.create("b".into(), "y".into(), Sentiment::Neutral);

        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, first.id);
    }

    #[test]
    fn update_refreshes_updated_at_but_not_created_at() {
        let store = PostStore::default();
        let post = store.create("a".into(), "x".into(), Sentiment::Neutral);

        thread::sleep(Duration::from_millis(5));

        let updated = store
            .update(
                post.id,
                PostChange {
                    author: None,
                    content: Some(("y".into(), Sentiment::Negative)),
                },
            )
            .unwrap();

        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at > post.updated_at);
        assert_eq!(updated.content, "y");
        assert_eq!(updated.sentiment, Sentiment::Negative);
        assert_eq!(updated.author, "a");
    }

    #[test]
    fn update_missing_id_returns_none() {
        let store = PostStore::default();
        assert!(store.update(42, PostChange::default()).is_none());
    }

    #[test]
    fn remove_is_not_idempotent() {
        let store = PostStore::default();
        let post = store.create("a".into(), "x".into(), Sentiment::Neutral);

        assert!(store.remove(post.id).is_some());
        assert!(store.remove(post.id).is_none());
        assert!(store.get(post.id).is_none());
    }
}
