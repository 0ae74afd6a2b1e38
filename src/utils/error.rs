// src/utils/error.rs

//! Crate-wide error type for the block coding operations.
//!
//! The error surface is narrow on purpose: the coding core is pure
//! arithmetic over in-memory buffers, so the only failures are shape
//! problems surfaced straight to the caller. Nothing here is retriable.

use thiserror::Error;

/// The primary error type for all operations in the block coder library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoderError {
    /// A raster was handed to an operation that requires an exact tile shape.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    /// Strict reassembly was given a tile sequence that does not cover the
    /// target shape exactly.
    #[error("tile count mismatch: shape needs {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
    /// A run-length stream ended on a literal zero with no run count after it.
    #[error("truncated zero run at position {position}")]
    TruncatedRun { position: usize },
    /// A run-length stream paired a literal zero with a count that cannot
    /// describe a run.
    #[error("invalid run length {length} at position {position}")]
    InvalidRunLength { position: usize, length: i32 },
}

/// A specialized `Result` type for block coder operations.
pub type Result<T> = std::result::Result<T, CoderError>;
