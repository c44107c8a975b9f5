//! # Blog Client
//!
//! Client-side half of the blog: a cached copy of the server's posts, the
//! create and edit forms, and the searched/paginated view derived from them.
//!
//! The cache is never authoritative. It is replaced wholesale by
//! [`PostListClient::load`] and reconciled with each mutation's response.

pub mod api;
pub mod error;
pub mod list;
pub mod prompt;
pub mod view;

pub use api::{HttpPostsApi, PostsApi};
pub use error::ClientError;
pub use list::{EditingSlot, Outcome, PostInput, PostListClient};
pub use prompt::Prompt;
pub use view::{ListView, PAGE_SIZE};
