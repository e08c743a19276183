//! Core types for Lectern.
//!
//! This module contains the shared data structures used across Lectern:
//!
//! ## Documents and Chunks
//! - [`Document`]: A unit of extracted text with its source identifier
//! - [`DocChunk`]: A bounded-size excerpt of a document with provenance
//! - [`ChunkConfig`]: Configuration for chunking behavior
//!
//! ## Retrieval
//! - [`ScoredChunk`]: A chunk paired with its similarity score
//!
//! ## Indexing
//! - [`IndexStats`]: Aggregate statistics for an indexing pass

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Documents
// ============================================================================

/// A unit of extracted text, ready for chunking.
///
/// Extraction (turning PDFs, slides, etc. into plain text) happens upstream;
/// by the time a `Document` exists it is just an identifier and its text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (typically a file name)
    pub id: String,
    /// Full extracted text, with form feeds marking page boundaries
    pub text: String,
}

impl Document {
    /// Create a document from an identifier and its extracted text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

// ============================================================================
// Chunks
// ============================================================================

/// A chunk of text from a source document.
///
/// Chunks are immutable values: once produced by the chunker they are never
/// modified. Identity is structural; the retrieval algorithms do not require
/// an independent id, though the dense store assigns one for its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocChunk {
    /// Identifier of the source document
    pub source_id: String,
    /// Page number within the source (1-indexed)
    pub page: u32,
    /// The chunk text
    pub text: String,
}

impl DocChunk {
    /// Create a new chunk.
    pub fn new(source_id: impl Into<String>, page: u32, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            page,
            text: text.into(),
        }
    }

    /// Provenance label in `[source, page N]` form, suitable for citations.
    #[must_use]
    pub fn citation(&self) -> String {
        format!("[{}, page {}]", self.source_id, self.page)
    }
}

/// Configuration for chunking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum chunk size in characters
    pub chunk_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self { chunk_size: 800 }
    }
}

// ============================================================================
// Retrieval results
// ============================================================================

/// A chunk with its similarity score against a query.
///
/// Produced only as a ranking result; ordering is by descending score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The matched chunk
    pub chunk: DocChunk,
    /// Cosine similarity in `[-1, 1]`; exactly `0.0` when either vector has
    /// zero norm
    pub score: f64,
    /// Store entry id, when the result came from the dense store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl ScoredChunk {
    /// Create a result without a store id (lexical ranking path).
    #[must_use]
    pub fn new(chunk: DocChunk, score: f64) -> Self {
        Self {
            chunk,
            score,
            id: None,
        }
    }

    /// Create a result carrying a dense-store entry id.
    #[must_use]
    pub fn with_id(chunk: DocChunk, score: f64, id: Uuid) -> Self {
        Self {
            chunk,
            score,
            id: Some(id),
        }
    }
}

// ============================================================================
// Index statistics
// ============================================================================

/// Aggregate statistics for one indexing pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total documents seen
    pub total_documents: u64,
    /// Documents successfully indexed
    pub indexed_documents: u64,
    /// Documents skipped because extraction failed
    pub error_documents: u64,
    /// Total chunks in the index
    pub total_chunks: u64,
    /// When the snapshot was built
    pub built_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Document Tests ====================

    #[test]
    fn test_document_new() {
        let doc = Document::new("notes.txt", "some text");
        assert_eq!(doc.id, "notes.txt");
        assert_eq!(doc.text, "some text");
    }

    #[test]
    fn test_document_serialization() {
        let doc = Document::new("slides.pdf", "page one\x0cpage two");
        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(doc.id, deserialized.id);
        assert_eq!(doc.text, deserialized.text);
    }

    // ==================== DocChunk Tests ====================

    #[test]
    fn test_chunk_serialization() {
        let chunk = DocChunk::new("lecture1.pdf", 3, "the halting problem");
        let json = serde_json::to_string(&chunk).unwrap();
        let deserialized: DocChunk = serde_json::from_str(&json).unwrap();

        assert_eq!(chunk, deserialized);
    }

    #[test]
    fn test_chunk_citation() {
        let chunk = DocChunk::new("lecture1.pdf", 3, "text");
        assert_eq!(chunk.citation(), "[lecture1.pdf, page 3]");
    }

    #[test]
    fn test_chunk_structural_equality() {
        let a = DocChunk::new("a.txt", 1, "same");
        let b = DocChunk::new("a.txt", 1, "same");
        assert_eq!(a, b);
    }

    // ==================== ChunkConfig Tests ====================

    #[test]
    fn test_chunk_config_default() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_size, 800);
    }

    #[test]
    fn test_chunk_config_serialization() {
        let config = ChunkConfig { chunk_size: 256 };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ChunkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.chunk_size, deserialized.chunk_size);
    }

    // ==================== ScoredChunk Tests ====================

    #[test]
    fn test_scored_chunk_new_has_no_id() {
        let result = ScoredChunk::new(DocChunk::new("a.txt", 1, "text"), 0.5);
        assert!(result.id.is_none());
        assert!((result.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scored_chunk_with_id() {
        let id = Uuid::new_v4();
        let result = ScoredChunk::with_id(DocChunk::new("a.txt", 1, "text"), 0.9, id);
        assert_eq!(result.id, Some(id));
    }

    #[test]
    fn test_scored_chunk_json_omits_missing_id() {
        let result = ScoredChunk::new(DocChunk::new("a.txt", 1, "text"), 0.5);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"id\""));
    }

    // ==================== IndexStats Tests ====================

    #[test]
    fn test_index_stats_default() {
        let stats = IndexStats::default();
        assert_eq!(stats.total_documents, 0);
        assert_eq!(stats.indexed_documents, 0);
        assert_eq!(stats.error_documents, 0);
        assert_eq!(stats.total_chunks, 0);
        assert!(stats.built_at.is_none());
    }

    #[test]
    fn test_index_stats_serialization() {
        let stats = IndexStats {
            total_documents: 12,
            indexed_documents: 10,
            error_documents: 2,
            total_chunks: 240,
            built_at: Some(Utc::now()),
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: IndexStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.total_documents, deserialized.total_documents);
        assert_eq!(stats.total_chunks, deserialized.total_chunks);
    }
}
