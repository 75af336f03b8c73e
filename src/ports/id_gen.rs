//! ID generator port for producing task identifiers.

/// Generates candidate task identifiers.
///
/// The manager still checks candidates against the collection, so an
/// implementation only needs to be unique with high probability.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier string.
    fn generate_id(&self) -> String;
}
