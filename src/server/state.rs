use crate::library::logger::interface::Logger;
use crate::server::error::ApiError;
use crate::species_classifier::{PredictionResult, SpeciesClassifier};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub species_classifier: Arc<SpeciesClassifier>,
    pub upload_dir: PathBuf,
    pub logger: Arc<dyn Logger + Send + Sync>,
}

impl AppState {
    pub fn new(
        species_classifier: Arc<SpeciesClassifier>,
        upload_dir: PathBuf,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            species_classifier,
            upload_dir,
            logger: logger.with_namespace("server"),
        }
    }

    /// Decoding and inference are CPU bound, so they run off the async
    /// workers.
    pub async fn predict_image(&self, raw_image: Vec<u8>) -> Result<PredictionResult, ApiError> {
        let species_classifier = self.species_classifier.clone();
        let result =
            tokio::task::spawn_blocking(move || species_classifier.predict_image(&raw_image))
                .await??;
        Ok(result)
    }
}
