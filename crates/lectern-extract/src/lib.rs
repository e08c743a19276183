//! # lectern-extract
//!
//! Content extraction from course material files for the Lectern indexing
//! pipeline.
//!
//! This crate provides the extraction layer that reads files and produces
//! [`Document`](lectern_core::Document)s for downstream chunking and
//! retrieval. Extraction failures are per-file: a document that cannot be
//! read is skipped by the indexer, never fatal to an index build.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lectern_extract::ExtractorRegistry;
//! use std::path::Path;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let doc = registry.extract_path(Path::new("lecture1.txt")).await?;
//! println!("Extracted {} chars", doc.text.len());
//! ```
//!
//! ## Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ExtractorRegistry`] | Routes files to appropriate extractors by MIME type |
//! | [`TextExtractor`] | Handles UTF-8 text files (notes, markdown, transcripts) |

pub mod registry;
pub mod text;

pub use registry::ExtractorRegistry;
pub use text::TextExtractor;
