//! Embeddings generation using Model2Vec

use crate::config::ModelConfig;
use crate::error::{AnalysisError, Result};
use crate::processing::round2;
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::PathBuf;
use std::time::Instant;

/// Wrapper around a static embedding model.
///
/// Loaded once at startup and used read-only afterwards, so one instance
/// can be shared across concurrent requests.
pub struct EmbeddingEngine {
    model: StaticModel,
    model_name: String,
}

impl EmbeddingEngine {
    /// Load the model named in the configuration. A local copy under
    /// `models_dir` takes precedence over the hub id.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let start_time = Instant::now();
        let source = Self::resolve_model_source(config);

        info!("Loading embedding model from: {}", source.display());

        let model = StaticModel::from_pretrained(
            &source, None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| AnalysisError::ModelLoading(format!("Failed to load model: {}", e)))?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: config.embedding_model.clone(),
        })
    }

    fn resolve_model_source(config: &ModelConfig) -> PathBuf {
        let local_path = config.models_dir.join(&config.embedding_model);
        if local_path.exists() {
            local_path
        } else {
            PathBuf::from(&config.embedding_model)
        }
    }

    /// Encode a single text into an embedding vector
    pub fn encode_single(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }

    /// Cosine similarity of the two texts, scaled to a percentage and
    /// rounded to two decimals.
    pub fn similarity_percent(&self, text1: &str, text2: &str) -> Result<f64> {
        let embedding1 = self.encode_single(text1);
        let embedding2 = self.encode_single(text2);

        let score = Self::cosine_similarity(&embedding1, &embedding2)?;
        Ok(round2(score as f64 * 100.0))
    }

    /// Calculate cosine similarity between two embeddings
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
        if a.len() != b.len() {
            return Err(AnalysisError::Embedding(format!(
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

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.5, 0.2];
        let score = EmbeddingEngine::cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let score = EmbeddingEngine::cosine_similarity(&a, &b).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        let score = EmbeddingEngine::cosine_similarity(&a, &b).unwrap();
        assert!((score + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(EmbeddingEngine::cosine_similarity(&a, &b).is_err());
    }

    #[test]
    fn test_cosine_zero_norm() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        let score = EmbeddingEngine::cosine_similarity(&a, &b).unwrap();
        assert_eq!(score, 0.0);
    }
}
