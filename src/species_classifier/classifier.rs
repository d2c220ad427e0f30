use crate::image_normalizer::NormalizedTensor;
use crate::library::logger::interface::Logger;
use crate::model::interface::{ModelError, ScoreModel};
use crate::species::ClassCatalog;
use crate::species_classifier::decision::decide;
use crate::species_classifier::prediction::PredictionResult;
use crate::species_classifier::threshold::ConfidenceThreshold;
use std::sync::Arc;

#[derive(Clone)]
pub struct SpeciesClassifier {
    pub(super) model: Arc<dyn ScoreModel + Send + Sync>,
    pub(super) catalog: ClassCatalog,
    pub(super) threshold: ConfidenceThreshold,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
}

impl SpeciesClassifier {
    pub fn new(
        model: Arc<dyn ScoreModel + Send + Sync>,
        catalog: ClassCatalog,
        threshold: ConfidenceThreshold,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelError> {
        if let Some(num_classes) = model.num_classes() {
            if num_classes != catalog.len() {
                return Err(ModelError::OutputShape {
                    expected: catalog.len(),
                    actual: num_classes,
                });
            }
        }

        Ok(Self {
            model,
            catalog,
            threshold,
            logger: logger.with_namespace("species_classifier"),
        })
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn classify(&self, tensor: &NormalizedTensor) -> Result<PredictionResult, ModelError> {
        let scores = self.model.predict(tensor)?;
        let result = decide(&scores, &self.catalog, self.threshold)?;

        let _ = self.logger.debug(&format!(
            "Predicted {} ({:.4}, threshold {})",
            result.label,
            result.confidence,
            self.threshold.value()
        ));

        Ok(result)
    }
}
