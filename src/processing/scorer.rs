//! Semantic match scoring between a resume and a job description

use crate::error::Result;
use crate::processing::embeddings::{cosine_similarity, EmbeddingProvider};

/// Computes a 0-100 similarity score between two texts using an injected
/// embedding provider and cosine similarity.
pub struct MatchScorer<'a> {
    provider: &'a dyn EmbeddingProvider,
}

impl<'a> MatchScorer<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider) -> Self {
        Self { provider }
    }

    /// Score two non-empty texts. Validating non-emptiness is the caller's
    /// responsibility.
    ///
    /// Cosine similarity is clamped to [0, 1], scaled to [0, 100], and
    /// rounded to 2 decimal places. Pure function of its inputs for a fixed
    /// provider; no I/O, no side effects.
    pub fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let emb_a = self.provider.embed(text_a)?;
        let emb_b = self.provider.embed(text_b)?;

        let similarity = cosine_similarity(&emb_a, &emb_b)?;
        let percentage = similarity.clamp(0.0, 1.0) * 100.0;

        Ok((percentage * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatcherError;
    use std::collections::HashMap;

    /// Fixed embedding oracle for deterministic tests
    struct FakeProvider {
        vectors: HashMap<String, Vec<f32>>,
    }

    impl FakeProvider {
        fn new(entries: &[(&str, Vec<f32>)]) -> Self {
            Self {
                vectors: entries
                    .iter()
                    .map(|(text, v)| (text.to_string(), v.clone()))
                    .collect(),
            }
        }
    }

    impl EmbeddingProvider for FakeProvider {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            self.vectors
                .get(text)
                .cloned()
                .ok_or_else(|| MatcherError::Embedding(format!("no fake vector for '{}'", text)))
        }

        fn dimension(&self) -> usize {
            2
        }

        fn id(&self) -> &str {
            "fake-provider"
        }
    }

    #[test]
    fn test_identical_texts_score_100() {
        let provider = FakeProvider::new(&[("rust developer", vec![0.6, 0.8])]);
        let scorer = MatchScorer::new(&provider);

        let score = scorer.score("rust developer", "rust developer").unwrap();
        assert!((score - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_score_is_idempotent() {
        let provider = FakeProvider::new(&[
            ("resume", vec![1.0, 0.0]),
            ("job", vec![0.6, 0.8]),
        ]);
        let scorer = MatchScorer::new(&provider);

        let first = scorer.score("resume", "job").unwrap();
        let second = scorer.score("resume", "job").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_bounds() {
        let provider = FakeProvider::new(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![0.0, 1.0]),
            ("c", vec![-1.0, 0.0]),
        ]);
        let scorer = MatchScorer::new(&provider);

        for (x, y) in [("a", "b"), ("a", "c"), ("b", "c"), ("a", "a")] {
            let score = scorer.score(x, y).unwrap();
            assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_negative_cosine_clamps_to_zero() {
        let provider = FakeProvider::new(&[("a", vec![1.0, 0.0]), ("b", vec![-1.0, 0.0])]);
        let scorer = MatchScorer::new(&provider);

        assert_eq!(scorer.score("a", "b").unwrap(), 0.0);
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        // cosine = 1/3 with unit vectors at the right angle
        let third: f32 = 1.0 / 3.0;
        let ortho = (1.0 - third * third).sqrt();
        let provider = FakeProvider::new(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![third, ortho]),
        ]);
        let scorer = MatchScorer::new(&provider);

        let score = scorer.score("a", "b").unwrap();
        assert!((score - 33.33).abs() < 1e-3);
    }
}
