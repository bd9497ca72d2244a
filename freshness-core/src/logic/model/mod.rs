//! Model Module - freshness classification
//!
//! The trained model is opaque: `inference` wraps it behind the
//! `Classifier` trait and owns the feature contract, `fallback` provides
//! a rule-based stand-in, `label` holds the output classes.

pub mod inference;
pub mod fallback;
pub mod label;

// Re-export common types
pub use inference::{Classifier, ModelAdapter, ModelError, ModelStatus, OnnxClassifier};
pub use fallback::HeuristicClassifier;
pub use label::{FreshnessLabel, FreshnessStatus};
