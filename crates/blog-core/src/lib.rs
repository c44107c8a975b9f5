//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post entity, its validation rules, and the ports
//! that storage adapters implement. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
