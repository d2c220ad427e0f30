use crate::image_normalizer::NormalizedTensor;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to load model {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model produced no scores")]
    EmptyOutput,
    #[error("model produced {actual} scores, expected {expected}")]
    OutputShape { expected: usize, actual: usize },
    #[error("model produced a non-finite score at index {index}")]
    NonFiniteScore { index: usize },
}

/// A loaded, read-only classifier artifact. Implementations add the batch
/// dimension themselves and return one score per class.
pub trait ScoreModel: Send + Sync {
    fn predict(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, ModelError>;

    /// Number of output classes, when the artifact declares it.
    fn num_classes(&self) -> Option<usize> {
        None
    }
}
