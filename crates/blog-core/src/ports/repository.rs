use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository over an ordered sequence. Order is insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in store order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Append a post. Fails with `Constraint` if the id is taken.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace title and content in place, keeping position.
    async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove a post by its id.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
