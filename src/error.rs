//! Error types for penalty connection assembly

use thiserror::Error;

/// Main error type for connection stiffness operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Requested {requested} shape function terms but only {available} are available")]
    TooManyTerms { requested: usize, available: usize },

    #[error("{what} block at {offset} with extent {extent} exceeds a {size}x{size} matrix")]
    OutOfBounds {
        what: &'static str,
        offset: usize,
        extent: usize,
        size: usize,
    },

    #[error("Matrix size mismatch: expected {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Panel degree-of-freedom ranges overlap")]
    OverlappingPanels,
}

/// Result type for connection stiffness operations
pub type ConnectionResult<T> = Result<T, ConnectionError>;
