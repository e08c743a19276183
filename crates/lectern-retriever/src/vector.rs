//! Sparse term-weight vectors and cosine similarity.

use std::collections::HashMap;

/// A sparse vector of term weights.
///
/// Only non-zero dimensions are stored; the implicit dimensionality is the
/// whole vocabulary, so vectors from any two texts are always comparable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: HashMap<String, f64>,
}

impl SparseVector {
    /// Create a vector from precomputed term weights.
    #[must_use]
    pub fn from_weights(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Weight of a term, zero when absent.
    #[must_use]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of non-zero dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when the vector has no non-zero dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product with another sparse vector.
    ///
    /// Iterates the smaller map and probes the larger one.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };

        small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|v| w * v))
            .sum()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine similarity with another vector.
    ///
    /// Defined as exactly `0.0` when either vector has zero norm, never NaN
    /// and never an error. An empty query scoring zero against everything is
    /// the correct retrieval answer.
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(&str, f64)]) -> SparseVector {
        SparseVector::from_weights(
            entries
                .iter()
                .map(|(t, w)| ((*t).to_string(), *w))
                .collect(),
        )
    }

    #[test]
    fn test_weight_lookup() {
        let v = vector(&[("cat", 2.0)]);
        assert!((v.weight("cat") - 2.0).abs() < f64::EPSILON);
        assert_eq!(v.weight("dog"), 0.0);
    }

    #[test]
    fn test_dot_product_shared_terms_only() {
        let a = vector(&[("cat", 2.0), ("dog", 1.0)]);
        let b = vector(&[("cat", 3.0), ("bird", 5.0)]);

        assert!((a.dot(&b) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_product_is_symmetric() {
        let a = vector(&[("cat", 2.0), ("dog", 1.0), ("fish", 4.0)]);
        let b = vector(&[("cat", 3.0)]);

        assert!((a.dot(&b) - b.dot(&a)).abs() < 1e-12);
    }

    #[test]
    fn test_norm() {
        let v = vector(&[("a", 3.0), ("b", 4.0)]);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm_of_empty_vector() {
        assert_eq!(SparseVector::default().norm(), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vector(&[("cat", 2.0), ("dog", 1.0)]);
        assert!((v.cosine(&v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vector(&[("cat", 1.0)]);
        let b = vector(&[("dog", 1.0)]);
        assert_eq!(a.cosine(&b), 0.0);
    }

    #[test]
    fn test_cosine_zero_norm_is_exactly_zero() {
        let empty = SparseVector::default();
        let v = vector(&[("cat", 1.0)]);

        assert_eq!(empty.cosine(&v), 0.0);
        assert_eq!(v.cosine(&empty), 0.0);
        assert_eq!(empty.cosine(&empty), 0.0);
    }

    #[test]
    fn test_cosine_never_nan() {
        let empty = SparseVector::default();
        let v = vector(&[("cat", 1.0)]);

        assert!(!empty.cosine(&v).is_nan());
        assert!(!empty.cosine(&empty).is_nan());
    }

    #[test]
    fn test_cosine_is_scale_invariant() {
        let a = vector(&[("cat", 1.0), ("dog", 2.0)]);
        let b = vector(&[("cat", 10.0), ("dog", 20.0)]);

        assert!((a.cosine(&b) - 1.0).abs() < 1e-12);
    }
}
