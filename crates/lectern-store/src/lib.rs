//! # lectern-store
//!
//! Dense-vector retrieval for Lectern: a fixed-dimension character-frequency
//! embedder and an in-memory brute-force store.
//!
//! This is the alternate retrieval path next to the TF-IDF index. Both share
//! the same ranking contract (cosine, descending, stable ties, truncate to
//! `min(k, n)`); the difference is the vector representation.
//!
//! ## Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DenseVector`] | Fixed-dimension vector with cosine similarity |
//! | [`CharFrequencyEmbedder`] | 128-dim normalized ASCII histogram embedding |
//! | [`MemoryVectorStore`] | Insertion-ordered store with brute-force top-k search |

pub mod dense;
pub mod memory;

pub use dense::{CharFrequencyEmbedder, DenseVector, CHAR_FREQ_DIMENSION};
pub use memory::MemoryVectorStore;
