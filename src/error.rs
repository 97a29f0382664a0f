//! Error types for trirast operations.
//!
//! The rasterizer core never fails; these errors come from the collaborators
//! around it (framebuffer allocation, scene parsing, PNG output).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trirast operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed scene record.
    #[error("Scene record {record}: {message}")]
    Parse {
        /// 1-based record number within the scene source.
        record: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// Draw command referring to a vertex that has not been declared yet.
    #[error("Scene record {record}: vertex index {index} out of range ({declared} declared)")]
    VertexIndex {
        /// 1-based record number within the scene source.
        record: usize,
        /// The offending index.
        index: usize,
        /// Number of vertices declared before the record.
        declared: usize,
    },
}

impl Error {
    pub(crate) fn parse(record: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            record,
            message: message.into(),
        }
    }
}
