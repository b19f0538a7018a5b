//! Error handling for Polyzone
//!
//! Provides error types for the two layers that can fail:
//! - Geometry errors (malformed point-strings, degenerate shapes)
//! - Storage errors (layout persistence)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! failure in the editor core is recoverable: callers degrade to a safe
//! default (dropping a malformed entry, starting with an empty layout)
//! rather than aborting.

use thiserror::Error;

/// Geometry error type
///
/// Represents errors raised while parsing or validating polygon geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A point token was not a `x,y` pair
    #[error("Malformed point token '{token}' at position {index}")]
    MalformedToken {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },

    /// A coordinate failed to parse as a float
    #[error("Non-numeric coordinate '{value}' at position {index}")]
    NonNumericCoordinate {
        /// The text that failed to parse.
        value: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },

    /// The input contained no point tokens
    #[error("Empty point string")]
    Empty,

    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },
}

/// Storage error type
///
/// Represents errors related to reading or writing the persisted layout.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored value was not valid JSON
    #[error("Corrupt layout data under key '{key}': {source}")]
    CorruptData {
        /// The storage key that held the corrupt value.
        key: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Underlying key-value store failure
    #[error("Storage backend error: {message}")]
    Backend {
        /// A message describing the backend failure.
        message: String,
    },
}

/// Top-level error type combining all error categories
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias using the top-level error
pub type Result<T> = std::result::Result<T, Error>;
