use super::classifier::SpeciesClassifier;
use crate::image_normalizer::normalize;
use crate::model::interface::ModelError;
use crate::species_classifier::prediction::PredictionResult;

impl SpeciesClassifier {
    /// Decodes, normalizes and classifies raw image bytes. Bytes that are
    /// not an image yield the unknown result without touching the model.
    pub fn predict_image(&self, raw_image: &[u8]) -> Result<PredictionResult, ModelError> {
        let tensor = match normalize(raw_image) {
            Ok(tensor) => tensor,
            Err(e) => {
                let _ = self.logger.error(&format!("{} ({} bytes)", e, raw_image.len()));
                return Ok(PredictionResult::unknown());
            }
        };

        self.classify(&tensor)
    }
}
