use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Fixed points of the simulated supply chain, in journey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Farm,
    Transport,
    Storage,
    Supermarket,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Farm,
        Stage::Transport,
        Stage::Storage,
        Stage::Supermarket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Farm => "Farm",
            Stage::Transport => "Transport",
            Stage::Storage => "Storage",
            Stage::Supermarket => "Supermarket",
        }
    }

    /// How long before "now" the stage is stamped
    pub fn offset(&self) -> Duration {
        match self {
            Stage::Farm => Duration::days(2),
            Stage::Transport => Duration::days(1),
            Stage::Storage => Duration::hours(12),
            Stage::Supermarket => Duration::zero(),
        }
    }

    /// Only the last stage carries the predicted label
    pub fn is_final(&self) -> bool {
        matches!(self, Stage::Supermarket)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
