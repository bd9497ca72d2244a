//! Freshness Labels
//!
//! Core types for freshness classification. No logic beyond the fixed
//! class-index mapping of the trained model.

use serde::{Deserialize, Serialize};

use crate::constants::IN_TRANSIT;

// ============================================================================
// FRESHNESS LABEL
// ============================================================================

/// Classifier output classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FreshnessLabel {
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Semi-Spoiled")]
    SemiSpoiled,
    #[serde(rename = "Spoiled")]
    Spoiled,
}

impl FreshnessLabel {
    pub const ALL: [FreshnessLabel; 3] = [
        FreshnessLabel::Fresh,
        FreshnessLabel::SemiSpoiled,
        FreshnessLabel::Spoiled,
    ];

    /// Fixed mapping {0: Fresh, 1: Semi-Spoiled, 2: Spoiled}
    pub fn from_class_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(FreshnessLabel::Fresh),
            1 => Some(FreshnessLabel::SemiSpoiled),
            2 => Some(FreshnessLabel::Spoiled),
            _ => None,
        }
    }

    pub fn class_index(&self) -> usize {
        match self {
            FreshnessLabel::Fresh => 0,
            FreshnessLabel::SemiSpoiled => 1,
            FreshnessLabel::Spoiled => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessLabel::Fresh => "Fresh",
            FreshnessLabel::SemiSpoiled => "Semi-Spoiled",
            FreshnessLabel::Spoiled => "Spoiled",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FreshnessLabel::Fresh => "#10b981",       // Green
            FreshnessLabel::SemiSpoiled => "#f59e0b", // Yellow
            FreshnessLabel::Spoiled => "#ef4444",     // Red
        }
    }
}

impl std::fmt::Display for FreshnessLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FRESHNESS STATUS (per journey record)
// ============================================================================

/// Status carried by a journey record: only the final stage is assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessStatus {
    InTransit,
    Assessed(FreshnessLabel),
}

impl FreshnessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessStatus::InTransit => IN_TRANSIT,
            FreshnessStatus::Assessed(label) => label.as_str(),
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FreshnessStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mapping() {
        assert_eq!(FreshnessLabel::from_class_index(0), Some(FreshnessLabel::Fresh));
        assert_eq!(FreshnessLabel::from_class_index(1), Some(FreshnessLabel::SemiSpoiled));
        assert_eq!(FreshnessLabel::from_class_index(2), Some(FreshnessLabel::Spoiled));
        assert_eq!(FreshnessLabel::from_class_index(3), None);
        assert_eq!(FreshnessLabel::from_class_index(-1), None);

        for label in FreshnessLabel::ALL {
            assert_eq!(
                FreshnessLabel::from_class_index(label.class_index() as i64),
                Some(label)
            );
        }
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&FreshnessLabel::SemiSpoiled).unwrap(), "\"Semi-Spoiled\"");
        assert_eq!(serde_json::to_string(&FreshnessStatus::InTransit).unwrap(), "\"In-Transit\"");
        assert_eq!(
            serde_json::to_string(&FreshnessStatus::Assessed(FreshnessLabel::Spoiled)).unwrap(),
            "\"Spoiled\""
        );
    }
}
