//! Corpus-level term statistics.

use std::collections::HashMap;

/// Document frequencies over an indexed corpus of chunks.
///
/// Built once per index pass and then read-only. `corpus_size` counts
/// chunks, not source documents, since chunks are the retrieval unit.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    document_frequencies: HashMap<String, usize>,
    corpus_size: usize,
}

impl CorpusStats {
    /// Build statistics from the term sets of each chunk.
    ///
    /// Each map is the term-frequency table of one chunk; a term's document
    /// frequency is the number of chunks whose table contains it, regardless
    /// of how often it occurs within a chunk.
    #[must_use]
    pub fn from_term_tables<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a HashMap<String, usize>>,
    {
        let mut document_frequencies: HashMap<String, usize> = HashMap::new();
        let mut corpus_size = 0;

        for table in tables {
            corpus_size += 1;
            for term in table.keys() {
                *document_frequencies.entry(term.clone()).or_insert(0) += 1;
            }
        }

        Self {
            document_frequencies,
            corpus_size,
        }
    }

    /// Number of chunks in the corpus.
    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of chunks containing `term`. Zero for unseen terms.
    #[must_use]
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency: `ln(1 + N / (1 + df))`.
    ///
    /// The smoothing keeps the value finite and positive for every term,
    /// including ones never seen at index time, so query-only vocabulary
    /// still contributes weight instead of being dropped.
    #[must_use]
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.document_frequency(term);
        (1.0 + self.corpus_size as f64 / (1.0 + df as f64)).ln()
    }
}
