//! In-memory post repository - the only store the service has.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Ordered in-memory post store behind an async RwLock.
///
/// Insertion order is creation order. Updates keep the position of the post;
/// deletes leave the remaining order untouched.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Id of the post a fresh server starts with.
    pub const SEED_ID: i64 = 1;

    /// Empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Store holding the single seed post.
    pub fn seeded() -> Self {
        let seed = PostDraft::parse(
            Some("First Post".to_string()),
            Some("Hello world!".to_string()),
        )
        .map(|draft| Post::new(Self::SEED_ID, draft));

        Self::with_posts(seed.into_iter().collect())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("duplicate post id {}", post.id)));
        }

        posts.push(post.clone());
        tracing::debug!(post_id = post.id, total = posts.len(), "Post stored");
        Ok(post)
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(draft);
        tracing::debug!(post_id = id, "Post updated in place");
        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        tracing::debug!(post_id = id, remaining = posts.len(), "Post removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft::parse(Some(title.to_string()), Some(content.to_string())).unwrap()
    }

    async fn store_with(titles: &[&str]) -> InMemoryPostRepository {
        let store = InMemoryPostRepository::new();
        for (i, title) in titles.iter().enumerate() {
            store
                .insert(Post::new(i as i64 + 10, draft(title, "body")))
                .await
                .unwrap();
        }
        store
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = InMemoryPostRepository::seeded();
        let posts = store.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, InMemoryPostRepository::SEED_ID);
        assert_eq!(posts[0].title, "First Post");
        assert_eq!(posts[0].content, "Hello world!");
    }

    #[tokio::test]
    async fn test_insert_appends_in_order() {
        let store = store_with(&["a", "b", "c"]).await;
        assert_eq!(titles(&store.list().await.unwrap()), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = store_with(&["a"]).await;
        let err = store.insert(Post::new(10, draft("x", "y"))).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_identity() {
        let store = store_with(&["a", "b", "c"]).await;
        let before = store.find_by_id(11).await.unwrap().unwrap();

        let updated = store.update(11, draft("B", "new body")).await.unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.content, "new body");
        assert_eq!(titles(&store.list().await.unwrap()), ["a", "B", "c"]);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = store_with(&["a"]).await;
        let err = store.update(99, draft("x", "y")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_one_and_keeps_order() {
        let store = store_with(&["a", "b", "c"]).await;
        store.delete(11).await.unwrap();
        assert_eq!(titles(&store.list().await.unwrap()), ["a", "c"]);
        assert!(store.find_by_id(11).await.unwrap().is_none());

        let err = store.delete(11).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
