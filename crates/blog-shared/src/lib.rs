//! # Blog Shared
//!
//! Wire types shared between the API server and the post list client.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
