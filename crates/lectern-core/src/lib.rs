//! # lectern-core
//!
//! Core types and traits for the Lectern course-document retrieval engine.
//!
//! This crate provides the foundational abstractions used throughout Lectern:
//!
//! - **Content Extraction**: [`ContentExtractor`] trait for extracting text from files
//! - **Document Chunking**: [`Chunker`] trait for splitting documents into searchable chunks
//! - **Vectorization**: [`Vectorizer`] trait pairing a vector representation with a similarity measure
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline pattern:
//!
//! ```text
//! File → ContentExtractor → Chunker → Vectorizer → ranked retrieval
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Document`] | Extracted text with its source identifier |
//! | [`DocChunk`] | A bounded excerpt of a document with source and page provenance |
//! | [`ChunkConfig`] | Chunking configuration |
//! | [`ScoredChunk`] | A matching chunk with its similarity score |
//! | [`IndexStats`] | Aggregate statistics for an indexing pass |
//!
//! ## Related Crates
//!
//! - `lectern-extract`: Content extraction implementations
//! - `lectern-chunker`: Page-aware fixed-window chunking
//! - `lectern-retriever`: TF-IDF vectorization and cosine-ranked retrieval
//! - `lectern-store`: Dense character-frequency vector store
//! - `lectern-index`: Indexing pipeline coordination
//! - `lectern`: Command-line interface

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ChunkError, Error, ExtractError, Result, StoreError};
pub use traits::*;
pub use types::*;
