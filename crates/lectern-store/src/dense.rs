//! Fixed-dimension dense vectors and the character-frequency embedder.

use lectern_core::Vectorizer;

/// Dimensionality of character-frequency embeddings: one slot per ASCII
/// code point.
pub const CHAR_FREQ_DIMENSION: usize = 128;

/// A fixed-dimension dense vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    /// Wrap raw component values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Dimensionality of the vector.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// The raw component values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity; exactly `0.0` when either vector has zero norm.
    ///
    /// Callers are responsible for dimension agreement; the store checks it
    /// before ever reaching this point.
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());

        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }

        let dot: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();
        dot / denom
    }
}

/// Embeds text as a normalized 128-dimension ASCII character histogram.
///
/// A deliberately crude embedding: no vocabulary, no model weights, just
/// character frequencies. It captures enough surface similarity to exercise
/// the full dense-retrieval path with zero external dependencies.
#[derive(Debug, Clone, Default)]
pub struct CharFrequencyEmbedder;

impl CharFrequencyEmbedder {
    /// Create a new embedder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Vectorizer for CharFrequencyEmbedder {
    type Vector = DenseVector;

    fn vectorize(&self, text: &str) -> DenseVector {
        let mut values = vec![0.0_f64; CHAR_FREQ_DIMENSION];

        // Only ASCII code points have a slot; everything else is ignored,
        // including Latin-1 (128..=255).
        for c in text.to_lowercase().chars() {
            if c.is_ascii() {
                values[c as usize] += 1.0;
            }
        }

        // L2-normalize so cosine reduces to a dot product; a text with no
        // ASCII characters keeps its zero vector.
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut values {
                *v /= norm;
            }
        }

        DenseVector::new(values)
    }

    fn similarity(&self, a: &DenseVector, b: &DenseVector) -> f64 {
        a.cosine(b)
    }
}
