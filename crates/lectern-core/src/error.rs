//! Error types for Lectern.

use thiserror::Error;

/// Main error type for Lectern operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction failed
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Chunking failed
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// Vector store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Content extraction errors.
///
/// These are recovered per-document: a failed extraction skips that document
/// and indexing continues (never fatal to an index build).
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("not valid UTF-8: {0}")]
    NotUtf8(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("extraction failed: {0}")]
    Failed(String),
}

/// Chunking errors.
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Vector store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query and stored vectors come from incompatible vectorizations.
    /// A contract error: fails fast rather than degrading silently.
    #[error("dimension mismatch: store is {expected}, vector is {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for Lectern operations.
pub type Result<T> = std::result::Result<T, Error>;
