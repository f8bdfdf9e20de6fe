//! Embedding provider abstraction and the Model2Vec-backed implementation

use crate::error::{MatcherError, Result};
use log::info;
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Source of fixed-dimension dense text embeddings.
///
/// The provider is constructed once at process start and passed by reference
/// to the scorer, so tests can substitute a deterministic fake.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a text string into an L2-normalized vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn dimension(&self) -> usize;

    /// Identifier of the underlying model, for reporting
    fn id(&self) -> &str;
}

/// Model2Vec static embedding model. Loading is comparatively expensive, so
/// the model is loaded once and reused for all subsequent scoring calls.
pub struct Model2VecProvider {
    model: StaticModel,
    model_id: String,
    dimension: usize,
}

impl Model2VecProvider {
    /// Load a Model2Vec model from a local folder or the HuggingFace Hub,
    /// in normalized mode.
    pub fn load(model_id: &str) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading embedding model: {}", model_id);

        let model = StaticModel::from_pretrained(model_id, None, Some(true), None)
            .map_err(|e| {
                MatcherError::Embedding(format!("Failed to load model '{}': {}", model_id, e))
            })?;

        // Probe once to learn the output dimension
        let dimension = model.encode_single("dimension probe").len();

        info!(
            "Embedding model loaded in {:.2?} ({} dimensions)",
            start_time.elapsed(),
            dimension
        );

        Ok(Self {
            model,
            model_id: model_id.to_string(),
            dimension,
        })
    }
}

impl EmbeddingProvider for Model2VecProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embedding = self.model.encode_single(text);
        if embedding.is_empty() {
            return Err(MatcherError::Embedding(format!(
                "Model '{}' returned an empty embedding",
                self.model_id
            )));
        }
        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn id(&self) -> &str {
        &self.model_id
    }
}

/// Cosine similarity between two embedding vectors.
///
/// Dimension mismatch is an error; zero-norm vectors yield 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(MatcherError::Processing(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.6, 0.8];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!(cosine_similarity(&a, &b).is_err());
    }

    #[test]
    fn test_cosine_zero_norm() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }
}
