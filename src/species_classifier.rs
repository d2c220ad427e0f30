pub mod classifier;
pub mod decision;
pub mod predict;
pub mod prediction;
pub mod threshold;

pub use classifier::SpeciesClassifier;
pub use prediction::{PredictionResponse, PredictionResult};
pub use threshold::ConfidenceThreshold;
