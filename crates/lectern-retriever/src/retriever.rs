//! TF-IDF retriever over an indexed chunk corpus.

use lectern_core::{DocChunk, ScoredChunk, Vectorizer};

use crate::corpus::CorpusStats;
use crate::text::term_frequencies;
use crate::vector::SparseVector;

/// Vectorizes text as TF-IDF weights against fixed corpus statistics.
///
/// The statistics are frozen at index time; vectorizing a query later uses
/// the same IDF table, so query vectors and chunk vectors live in the same
/// space.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    stats: CorpusStats,
}

impl TfIdfVectorizer {
    /// Create a vectorizer over the given corpus statistics.
    #[must_use]
    pub fn new(stats: CorpusStats) -> Self {
        Self { stats }
    }

    /// The corpus statistics backing this vectorizer.
    #[must_use]
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }
}

impl Vectorizer for TfIdfVectorizer {
    type Vector = SparseVector;

    fn vectorize(&self, text: &str) -> SparseVector {
        let weights = term_frequencies(text)
            .into_iter()
            .map(|(term, count)| {
                let idf = self.stats.idf(&term);
                (term, count as f64 * idf)
            })
            .collect();
        SparseVector::from_weights(weights)
    }

    fn similarity(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        a.cosine(b)
    }
}

/// An immutable TF-IDF index over a corpus of chunks.
///
/// Built in one pass and never mutated; re-indexing builds a fresh retriever
/// and swaps it in at a higher layer. Chunk vectors are precomputed at build
/// time so a query costs one vectorization plus one similarity per chunk.
pub struct TfIdfRetriever {
    chunks: Vec<DocChunk>,
    vectors: Vec<SparseVector>,
    vectorizer: TfIdfVectorizer,
}

impl TfIdfRetriever {
    /// Build an index over the given chunks.
    #[must_use]
    pub fn index(chunks: Vec<DocChunk>) -> Self {
        let tables: Vec<_> = chunks
            .iter()
            .map(|chunk| term_frequencies(&chunk.text))
            .collect();
        let stats = CorpusStats::from_term_tables(tables.iter());
        let vectorizer = TfIdfVectorizer::new(stats);

        let vectors = chunks
            .iter()
            .map(|chunk| vectorizer.vectorize(&chunk.text))
            .collect();

        Self {
            chunks,
            vectors,
            vectorizer,
        }
    }

    /// Number of chunks in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when the index holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The indexed chunks, in insertion order.
    #[must_use]
    pub fn chunks(&self) -> &[DocChunk] {
        &self.chunks
    }

    /// The vectorizer sharing this index's corpus statistics.
    #[must_use]
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Return the `k` chunks most similar to `query`, best first.
    ///
    /// Always succeeds: an empty index or an all-symbols query yields fewer
    /// (possibly zero) results or zero scores, never an error. Ties keep
    /// insertion order.
    #[must_use]
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<ScoredChunk> {
        let query_vector = self.vectorizer.vectorize(query);

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .map(|v| self.vectorizer.similarity(&query_vector, v))
            .enumerate()
            .collect();

        // Stable sort: equal scores stay in insertion order. Scores are
        // never NaN (zero-norm cosines are exactly 0.0).
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k.min(self.chunks.len()));

        scored
            .into_iter()
            .map(|(idx, score)| ScoredChunk::new(self.chunks[idx].clone(), score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chunks() -> Vec<DocChunk> {
        vec![
            DocChunk::new("pets.txt", 1, "cats purr and chase mice"),
            DocChunk::new("pets.txt", 2, "dogs bark and fetch sticks"),
            DocChunk::new("pets.txt", 3, "birds sing in the morning"),
        ]
    }

    // ==================== Vectorizer Tests ====================

    #[test]
    fn test_vectorize_weights_terms_by_count_and_idf() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let vectorizer = retriever.vectorizer();

        let v = vectorizer.vectorize("cats cats dogs");
        let cat_idf = vectorizer.stats().idf("cats");
        let dog_idf = vectorizer.stats().idf("dogs");

        assert!((v.weight("cats") - 2.0 * cat_idf).abs() < 1e-12);
        assert!((v.weight("dogs") - dog_idf).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_unseen_terms_still_weighted() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let v = retriever.vectorizer().vectorize("quantum");

        assert!(v.weight("quantum") > 0.0);
    }

    #[test]
    fn test_vectorize_is_deterministic() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let a = retriever.vectorizer().vectorize("cats and dogs");
        let b = retriever.vectorizer().vectorize("cats and dogs");

        assert_eq!(a, b);
    }

    // ==================== Retrieval Tests ====================

    #[test]
    fn test_retrieve_ranks_matching_chunk_first() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("do cats chase mice", 3);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].chunk.page, 1);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_retrieve_scores_descend() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("dogs fetch", 3);

        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(results[0].chunk.page, 2);
    }

    #[test]
    fn test_retrieve_truncates_to_k() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("cats", 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_retrieve_k_larger_than_corpus() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("cats", 50);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_retrieve_k_zero() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        assert!(retriever.retrieve("cats", 0).is_empty());
    }

    #[test]
    fn test_retrieve_empty_corpus() {
        let retriever = TfIdfRetriever::index(vec![]);
        assert!(retriever.is_empty());
        assert!(retriever.retrieve("anything", 5).is_empty());
    }

    #[test]
    fn test_retrieve_symbols_only_query_scores_zero() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("!!! ???", 3);

        // Zero-norm query: everything scores exactly 0.0, insertion order
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.score == 0.0));
        assert_eq!(results[0].chunk.page, 1);
        assert_eq!(results[1].chunk.page, 2);
        assert_eq!(results[2].chunk.page, 3);
    }

    #[test]
    fn test_retrieve_ties_keep_insertion_order() {
        let chunks = vec![
            DocChunk::new("a.txt", 1, "same words here"),
            DocChunk::new("b.txt", 1, "same words here"),
        ];
        let retriever = TfIdfRetriever::index(chunks);
        let results = retriever.retrieve("same words", 2);

        assert_eq!(results[0].chunk.source_id, "a.txt");
        assert_eq!(results[1].chunk.source_id, "b.txt");
    }

    #[test]
    fn test_retrieve_unrelated_query_returns_zero_scores() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("quantum chromodynamics", 3);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_no_stemming_singular_does_not_match_plural() {
        // "cat" and "cats" are distinct tokens, so the query "cat" gives
        // the second chunk a score of exactly zero
        let retriever = TfIdfRetriever::index(vec![
            DocChunk::new("notes.txt", 1, "The cat sat on the mat."),
            DocChunk::new("notes.txt", 2, "Dogs chase cats."),
        ]);
        let results = retriever.retrieve("cat", 2);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.text, "The cat sat on the mat.");
        assert!(results[0].score > 0.0);
        assert_eq!(results[1].score, 0.0);
    }

    #[test]
    fn test_retrieve_is_idempotent() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let first = retriever.retrieve("cats chase mice", 3);
        let second = retriever.retrieve("cats chase mice", 3);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.chunk, b.chunk);
            assert!((a.score - b.score).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_scores_bounded_by_one() {
        let retriever = TfIdfRetriever::index(sample_chunks());
        let results = retriever.retrieve("cats purr and chase mice", 3);

        assert!(results.iter().all(|r| r.score <= 1.0 + 1e-12));
        // Query identical to a chunk scores (numerically) 1.0 on it
        assert!((results[0].score - 1.0).abs() < 1e-9);
    }
}
