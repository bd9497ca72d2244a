//! Freshness Ledger - core library
//!
//! Validates sensor readings, classifies freshness with an opaque
//! pre-trained model and records a simulated four-stage supply-chain
//! journey per prediction in an in-memory, append-only ledger.

pub mod constants;
pub mod logic;

pub use logic::journey::{JourneyRecord, Stage};
pub use logic::ledger::{export, Ledger};
pub use logic::model::{
    Classifier, FreshnessLabel, FreshnessStatus, HeuristicClassifier, ModelAdapter, ModelError,
    ModelStatus, OnnxClassifier,
};
pub use logic::sensor::{SensorField, SensorForm, SensorReading, ValidationError};
pub use logic::session::{PredictError, PredictionOutcome, PredictionRequest, Session};
pub use logic::tally::{PredictionTally, TallyEntry, TallySnapshot};
