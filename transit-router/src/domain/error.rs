//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from store and I/O errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude is not finite or out of range
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Edge mode is empty or whitespace
    #[error("travel mode must not be blank")]
    BlankMode,

    /// A path must contain at least one node
    #[error("path must contain at least one node")]
    EmptyPath,
}
