use crate::species::ClassLabel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub label: ClassLabel,
    pub confidence: f32,
}

impl PredictionResult {
    /// Result for input that could not be decoded.
    pub fn unknown() -> Self {
        Self {
            label: ClassLabel::UnknownFish,
            confidence: 0.0,
        }
    }

    /// Confidence as a percentage with one decimal, e.g. `0.8734` -> `"87.3"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}", f64::from(self.confidence) * 100.0)
    }

    pub fn to_response(&self) -> PredictionResponse {
        PredictionResponse {
            predicted_class: self.label,
            confidence: self.confidence_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub predicted_class: ClassLabel,
    pub confidence: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;

    fn with_confidence(confidence: f32) -> PredictionResult {
        PredictionResult {
            label: ClassLabel::Species(Species::Trout),
            confidence,
        }
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(with_confidence(0.8734).confidence_percent(), "87.3");
        assert_eq!(with_confidence(0.92).confidence_percent(), "92.0");
        assert_eq!(with_confidence(1.0).confidence_percent(), "100.0");
        assert_eq!(with_confidence(0.0).confidence_percent(), "0.0");
        assert_eq!(with_confidence(0.12345).confidence_percent(), "12.3");
    }

    #[test]
    fn test_unknown_response_json() {
        let json = serde_json::to_value(PredictionResult::unknown().to_response()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"predicted_class": "Unknown Fish", "confidence": "0.0"})
        );
    }
}
