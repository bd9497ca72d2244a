//! Prediction Tally - running count per freshness label
//!
//! Starts at zero for every label, grows by one per successful prediction,
//! never shrinks. Lives as long as its session.

use serde::Serialize;

use crate::logic::model::FreshnessLabel;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionTally {
    counts: [u64; 3],
}

/// One slice of the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyEntry {
    pub label: FreshnessLabel,
    pub count: u64,
    /// Chart colour of the label
    pub color: &'static str,
    /// Share of all predictions, one decimal (0.0 when there are none)
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallySnapshot {
    pub entries: Vec<TallyEntry>,
    pub total: u64,
}

impl PredictionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: FreshnessLabel) {
        self.counts[label.class_index()] += 1;
    }

    pub fn count(&self, label: FreshnessLabel) -> u64 {
        self.counts[label.class_index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn snapshot(&self) -> TallySnapshot {
        let total = self.total();
        let entries = FreshnessLabel::ALL
            .into_iter()
            .map(|label| {
                let count = self.count(label);
                let share_percent = if total == 0 {
                    0.0
                } else {
                    (count as f64 * 1000.0 / total as f64).round() / 10.0
                };
                TallyEntry { label, count, color: label.color(), share_percent }
            })
            .collect();

        TallySnapshot { entries, total }
    }
}

impl TallySnapshot {
    pub fn count(&self, label: FreshnessLabel) -> u64 {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tally = PredictionTally::new();
        let snap = tally.snapshot();
        assert_eq!(snap.total, 0);
        assert_eq!(snap.entries.len(), 3);
        for entry in &snap.entries {
            assert_eq!(entry.count, 0);
            assert_eq!(entry.share_percent, 0.0);
        }
    }

    #[test]
    fn test_increment_by_exactly_one() {
        let mut tally = PredictionTally::new();
        tally.increment(FreshnessLabel::SemiSpoiled);

        assert_eq!(tally.count(FreshnessLabel::SemiSpoiled), 1);
        assert_eq!(tally.count(FreshnessLabel::Fresh), 0);
        assert_eq!(tally.count(FreshnessLabel::Spoiled), 0);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_snapshot_order_and_shares() {
        let mut tally = PredictionTally::new();
        tally.increment(FreshnessLabel::Fresh);
        tally.increment(FreshnessLabel::Fresh);
        tally.increment(FreshnessLabel::Spoiled);

        let snap = tally.snapshot();
        let labels: Vec<FreshnessLabel> = snap.entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, FreshnessLabel::ALL.to_vec());

        assert_eq!(snap.count(FreshnessLabel::Fresh), 2);
        assert_eq!(snap.entries[0].share_percent, 66.7);
        assert_eq!(snap.entries[1].share_percent, 0.0);
        assert_eq!(snap.entries[2].share_percent, 33.3);
    }

    #[test]
    fn test_snapshot_json() {
        let mut tally = PredictionTally::new();
        tally.increment(FreshnessLabel::SemiSpoiled);
        let json = serde_json::to_value(tally.snapshot()).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["entries"][1]["label"], "Semi-Spoiled");
        assert_eq!(json["entries"][1]["share_percent"], 100.0);
        assert_eq!(json["entries"][1]["color"], "#f59e0b");
        assert_eq!(json["entries"][0]["color"], "#10b981");
    }
}
