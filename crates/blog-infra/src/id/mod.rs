//! Id generators.

mod monotonic;

pub use monotonic::MonotonicIdGenerator;
