use crate::model::interface::ModelError;
use crate::species::{ClassCatalog, ClassLabel};
use crate::species_classifier::prediction::PredictionResult;
use crate::species_classifier::threshold::ConfidenceThreshold;

/// Picks the top score. A top score below `threshold` is reported as
/// unknown but keeps its raw value as the confidence. Ties go to the lowest
/// index.
pub fn decide(
    scores: &[f32],
    catalog: &ClassCatalog,
    threshold: ConfidenceThreshold,
) -> Result<PredictionResult, ModelError> {
    if scores.is_empty() {
        return Err(ModelError::EmptyOutput);
    }
    if scores.len() != catalog.len() {
        return Err(ModelError::OutputShape {
            expected: catalog.len(),
            actual: scores.len(),
        });
    }
    if let Some(index) = scores.iter().position(|score| !score.is_finite()) {
        return Err(ModelError::NonFiniteScore { index });
    }

    let (index, p_max) = scores
        .iter()
        .copied()
        .enumerate()
        .fold((0, scores[0]), |best, (index, score)| {
            if score > best.1 {
                (index, score)
            } else {
                best
            }
        });

    if !threshold.accepts(p_max) {
        return Ok(PredictionResult {
            label: ClassLabel::UnknownFish,
            confidence: p_max,
        });
    }

    let species = catalog.species_at(index).ok_or(ModelError::OutputShape {
        expected: catalog.len(),
        actual: scores.len(),
    })?;

    Ok(PredictionResult {
        label: ClassLabel::Species(species),
        confidence: p_max,
    })
}
