//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{IdGenerator, PostRepository};
use blog_infra::{InMemoryPostRepository, MonotonicIdGenerator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Build the state for a fresh process: the seeded store and an id
    /// generator that starts past the seed id.
    pub fn new() -> Self {
        let state = Self::with_store(
            Arc::new(InMemoryPostRepository::seeded()),
            Arc::new(MonotonicIdGenerator::starting_after(
                InMemoryPostRepository::SEED_ID,
            )),
        );
        tracing::info!("Application state initialized with seed post");
        state
    }

    pub fn with_store(posts: Arc<dyn PostRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { posts, ids }
    }
}
