//! # lectern-retriever
//!
//! Lexical retrieval for Lectern: TF-IDF vectorization and cosine-ranked
//! top-k search over an indexed chunk corpus.
//!
//! ## Pipeline
//!
//! ```text
//! chunks → term_frequencies → CorpusStats (IDF) → SparseVector per chunk
//!                                                       ↓
//!                               query → SparseVector → cosine → top-k
//! ```
//!
//! The index is immutable once built: [`TfIdfRetriever::index`] computes
//! corpus statistics and chunk vectors in one pass, and
//! [`TfIdfRetriever::retrieve`] is a pure read. Re-indexing means building a
//! new retriever.
//!
//! ## Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`term_frequencies`] | Normalize text and count terms |
//! | [`CorpusStats`] | Document frequencies and smoothed IDF |
//! | [`SparseVector`] | Term-weight vector with cosine similarity |
//! | [`TfIdfVectorizer`] | Text to TF-IDF vector against fixed statistics |
//! | [`TfIdfRetriever`] | Immutable index with top-k retrieval |

pub mod corpus;
pub mod retriever;
pub mod text;
pub mod vector;

pub use corpus::CorpusStats;
pub use retriever::{TfIdfRetriever, TfIdfVectorizer};
pub use text::term_frequencies;
pub use vector::SparseVector;
