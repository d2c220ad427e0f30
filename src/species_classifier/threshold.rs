/// Minimum top score for a prediction to be reported as a species.
/// Anything strictly below it is reported as unknown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceThreshold(f32);

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("confidence threshold must be within [0, 1], got {0}")]
pub struct InvalidThreshold(pub f32);

impl ConfidenceThreshold {
    pub const DEFAULT: ConfidenceThreshold = ConfidenceThreshold(0.85);

    pub fn new(value: f32) -> Result<Self, InvalidThreshold> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn accepts(&self, score: f32) -> bool {
        score >= self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(ConfidenceThreshold::new(0.0).is_ok());
        assert!(ConfidenceThreshold::new(1.0).is_ok());
        assert_eq!(ConfidenceThreshold::new(1.5), Err(InvalidThreshold(1.5)));
        assert!(ConfidenceThreshold::new(-0.1).is_err());
        assert!(ConfidenceThreshold::new(f32::NAN).is_err());
    }

    #[test]
    fn test_accepts_is_inclusive() {
        let threshold = ConfidenceThreshold::default();

        assert!(threshold.accepts(0.85));
        assert!(threshold.accepts(1.0));
        assert!(!threshold.accepts(0.849999));
    }
}
