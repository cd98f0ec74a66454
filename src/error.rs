//! Error types for draftcore

use thiserror::Error;

/// Main error type for entity operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Vertex index outside the valid range for the requested operation
    #[error("vertex index {index} out of range for polyline with {len} vertices")]
    OutOfRange { index: usize, len: usize },
}

/// Result type alias for draftcore operations
pub type Result<T> = std::result::Result<T, DraftError>;
