use crate::image_normalizer::NormalizedTensor;
use crate::library::logger::interface::Logger;
use crate::model::interface::{ModelError, ScoreModel};
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

enum Scores {
    #[cfg(test)]
    Fixed(Vec<f32>),
    Random { num_classes: usize },
}

pub struct ScoreModelFake {
    scores: Scores,
    calls: AtomicUsize,
    logger: Option<Arc<dyn Logger + Send + Sync>>,
}

impl ScoreModelFake {
    /// Always answers with `scores`.
    #[cfg(test)]
    pub fn fixed(scores: Vec<f32>) -> Self {
        Self {
            scores: Scores::Fixed(scores),
            calls: AtomicUsize::new(0),
            logger: None,
        }
    }

    /// Answers with a random probability vector over `num_classes`.
    pub fn random(num_classes: usize, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            scores: Scores::Random { num_classes },
            calls: AtomicUsize::new(0),
            logger: Some(logger.with_namespace("model").with_namespace("fake")),
        }
    }

    #[cfg(test)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn random_scores(num_classes: usize) -> Result<Vec<f32>, ModelError> {
        let dist = Uniform::new(0.0f32, 1.0).map_err(|e| ModelError::Inference(e.to_string()))?;
        let mut rng = rand::rng();

        // Cubing skews the mass towards one class so both branches of the
        // threshold show up.
        let raw: Vec<f32> = (0..num_classes)
            .map(|_| dist.sample(&mut rng).powi(3))
            .collect();
        let total: f32 = raw.iter().sum();

        if total <= f32::EPSILON {
            return Ok(vec![1.0 / num_classes as f32; num_classes]);
        }

        Ok(raw.into_iter().map(|value| value / total).collect())
    }
}

impl ScoreModel for ScoreModelFake {
    fn predict(&self, _tensor: &NormalizedTensor) -> Result<Vec<f32>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scores = match &self.scores {
            #[cfg(test)]
            Scores::Fixed(scores) => scores.clone(),
            Scores::Random { num_classes } => Self::random_scores(*num_classes)?,
        };

        if let Some(logger) = &self.logger {
            let _ = logger.debug(&format!("Scores: {:?}", scores));
        }

        Ok(scores)
    }

    fn num_classes(&self) -> Option<usize> {
        match &self.scores {
            #[cfg(test)]
            Scores::Fixed(_) => None,
            Scores::Random { num_classes } => Some(*num_classes),
        }
    }
}
