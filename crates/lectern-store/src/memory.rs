//! In-memory dense vector store with brute-force search.

use lectern_core::{DocChunk, ScoredChunk, StoreError};
use tracing::debug;
use uuid::Uuid;

use crate::dense::DenseVector;

/// One stored chunk with its embedding.
#[derive(Debug, Clone)]
struct StoreEntry {
    id: Uuid,
    chunk: DocChunk,
    vector: DenseVector,
}

/// In-memory vector store.
///
/// Entries live in insertion order in a flat vector; search is brute-force
/// cosine over every entry. At course-corpus scale (thousands of chunks)
/// that is faster than any index would pay for.
///
/// The store enforces a single dimension fixed at construction: adding or
/// querying with a vector of any other dimension is a contract violation
/// and fails fast with [`StoreError::DimensionMismatch`].
pub struct MemoryVectorStore {
    dimension: usize,
    entries: Vec<StoreEntry>,
}

impl MemoryVectorStore {
    /// Create an empty store for vectors of the given dimension.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// The dimension this store accepts.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_dimension(&self, vector: &DenseVector) -> Result<(), StoreError> {
        if vector.dim() != self.dimension {
            return Err(StoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dim(),
            });
        }
        Ok(())
    }

    /// Add a chunk with its embedding, returning the assigned entry id.
    pub fn add(&mut self, chunk: DocChunk, vector: DenseVector) -> Result<Uuid, StoreError> {
        self.check_dimension(&vector)?;

        let id = Uuid::new_v4();
        self.entries.push(StoreEntry { id, chunk, vector });
        debug!(total = self.entries.len(), "stored chunk embedding");
        Ok(id)
    }

    /// Return the `k` entries most similar to `query`, best first.
    ///
    /// Ties keep insertion order; a zero-norm query scores everything
    /// exactly `0.0` and still returns `min(k, len)` entries.
    pub fn search(&self, query: &DenseVector, k: usize) -> Result<Vec<ScoredChunk>, StoreError> {
        self.check_dimension(query)?;

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .map(|entry| query.cosine(&entry.vector))
            .enumerate()
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k.min(self.entries.len()));

        Ok(scored
            .into_iter()
            .map(|(idx, score)| {
                let entry = &self.entries[idx];
                ScoredChunk::with_id(entry.chunk.clone(), score, entry.id)
            })
            .collect())
    }
}
