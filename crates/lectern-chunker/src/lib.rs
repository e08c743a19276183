//! # lectern-chunker
//!
//! Chunking strategies for the Lectern indexing pipeline.
//!
//! Chunking is pure CPU work: a [`Document`](lectern_core::Document) goes in,
//! a list of provenance-tagged [`DocChunk`](lectern_core::DocChunk)s comes
//! out, deterministically.
//!
//! ## Strategy
//!
//! [`PageChunker`] splits on form feeds first (the page-break convention of
//! text exporters), then cuts each page into fixed-size character windows so
//! no chunk exceeds the configured size. Every chunk keeps its source
//! identifier and 1-indexed page number for citations.

pub mod page;

pub use page::PageChunker;
