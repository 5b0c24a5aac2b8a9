/// Produces public tokens of the form `VU-XXXXXX`.
///
/// Implementations do not check for collisions; the store does.
pub trait UniqueIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
