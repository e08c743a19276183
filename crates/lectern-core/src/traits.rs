//! Core traits for Lectern components.
//!
//! - [`ContentExtractor`]: turn files into plain text (the only I/O seam)
//! - [`Chunker`]: split a document into provenance-tagged chunks
//! - [`Vectorizer`]: turn text into a vector and compare two vectors
//!
//! These traits keep the engine pluggable: the lexical TF-IDF model and the
//! dense character-frequency model both implement [`Vectorizer`] and share
//! one cosine-top-k ranking contract, selected by the caller.

use async_trait::async_trait;
use std::path::Path;

use crate::error::{ChunkError, ExtractError};
use crate::types::{ChunkConfig, DocChunk, Document};

// ============================================================================
// Content Extraction
// ============================================================================

/// Trait for extracting plain text from files.
///
/// Extraction can fail per file; callers must treat that as a skip, not an
/// abort.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Returns the MIME types this extractor can handle.
    fn supported_types(&self) -> &[&str];

    /// Check if this extractor can handle the given file.
    fn can_extract(&self, path: &Path, mime_type: &str) -> bool {
        self.supported_types().contains(&mime_type) || self.can_extract_by_extension(path)
    }

    /// Check if the extractor can handle a file based on its extension.
    fn can_extract_by_extension(&self, _path: &Path) -> bool {
        false
    }

    /// Extract the text content of a file.
    async fn extract(&self, path: &Path) -> Result<Document, ExtractError>;
}

// ============================================================================
// Chunking
// ============================================================================

/// Trait for splitting a document into chunks.
///
/// Chunking is pure CPU: no I/O, no shared state, deterministic for a given
/// document and configuration.
pub trait Chunker: Send + Sync {
    /// Name of this chunking strategy.
    fn name(&self) -> &str;

    /// Split the document into provenance-tagged chunks.
    ///
    /// A document with no non-empty text yields zero chunks; that is not an
    /// error.
    fn chunk(&self, document: &Document, config: &ChunkConfig)
        -> Result<Vec<DocChunk>, ChunkError>;
}

// ============================================================================
// Vectorization
// ============================================================================

/// Capability interface for a text vectorization strategy.
///
/// Implementations pair a vector representation with a similarity measure
/// over it. Both must be pure: the same text always produces the same
/// vector, and `similarity(a, a)` is `1.0` for any non-zero-norm `a` while a
/// zero-norm vector has similarity exactly `0.0` with everything.
pub trait Vectorizer: Send + Sync {
    /// The vector representation this strategy produces.
    type Vector;

    /// Vectorize a piece of text.
    fn vectorize(&self, text: &str) -> Self::Vector;

    /// Similarity between two vectors, in `[-1, 1]`.
    fn similarity(&self, a: &Self::Vector, b: &Self::Vector) -> f64;
}
