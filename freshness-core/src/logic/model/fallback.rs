//! Fallback Classifier - deterministic threshold rules
//!
//! Used when no ONNX model is available at startup so the dashboard still
//! works end to end. Counts how many readings sit past a spoilage threshold.

use serde::{Deserialize, Serialize};

use super::inference::{Classifier, ModelError};
use crate::constants::FEATURE_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicClassifier {
    /// Per-feature spoilage thresholds, in feature order
    pub thresholds: [f32; FEATURE_COUNT],
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self {
            //           temp  humidity  co2     gas
            thresholds: [8.0, 85.0, 1000.0, 1.0],
        }
    }
}

impl HeuristicClassifier {
    pub fn exceeded(&self, features: &[f32; FEATURE_COUNT]) -> usize {
        features.iter()
            .zip(self.thresholds.iter())
            .filter(|(value, limit)| value > limit)
            .count()
    }
}

impl Classifier for HeuristicClassifier {
    fn source(&self) -> &str {
        "heuristic"
    }

    fn method(&self) -> &'static str {
        "fallback"
    }

    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, ModelError> {
        let class = match self.exceeded(features) {
            0 => 0,
            1 | 2 => 1,
            _ => 2,
        };
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_storage_is_fresh() {
        let c = HeuristicClassifier::default();
        assert_eq!(c.classify(&[4.0, 60.0, 500.0, 0.5]), Ok(0));
    }

    #[test]
    fn test_partial_excess_is_semi_spoiled() {
        let c = HeuristicClassifier::default();
        assert_eq!(c.classify(&[12.0, 60.0, 500.0, 0.5]), Ok(1));
        assert_eq!(c.classify(&[12.0, 90.0, 500.0, 0.5]), Ok(1));
    }

    #[test]
    fn test_warm_humid_gassy_is_spoiled() {
        let c = HeuristicClassifier::default();
        assert_eq!(c.classify(&[25.0, 90.0, 1500.0, 0.5]), Ok(2));
        assert_eq!(c.classify(&[25.0, 90.0, 1500.0, 1.8]), Ok(2));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let c = HeuristicClassifier::default();
        assert_eq!(c.exceeded(&[8.0, 85.0, 1000.0, 1.0]), 0);
    }
}
