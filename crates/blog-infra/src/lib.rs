//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Everything here lives in process memory; a restart resets the store to
//! its seed post.

pub mod id;
pub mod store;

pub use id::MonotonicIdGenerator;
pub use store::InMemoryPostRepository;
