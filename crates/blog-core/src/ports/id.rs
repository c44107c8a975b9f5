/// Source of unique post ids.
pub trait IdGenerator: Send + Sync {
    /// Produce an id never returned before by this generator.
    fn next_id(&self) -> i64;
}
