//! Error types for relief I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for relief I/O.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading samples or writing meshes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The output path has no file name to derive companion files from.
    #[error("invalid output path: {path}")]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The input held no records.
    #[error("no records in input")]
    EmptyInput,

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    InvalidFace {
        /// Face position.
        face: usize,
        /// Offending 1-based index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// CSV parsing or deserialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
