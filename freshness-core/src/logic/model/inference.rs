//! Inference Engine - Model Adapter + ONNX Runtime backend
//!
//! The adapter owns the feature contract (order of the four sensor values)
//! and the class-index mapping. Backends only turn a feature vector into a
//! class index, so the trained model can be swapped without touching callers.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fallback::HeuristicClassifier;
use super::label::FreshnessLabel;
use crate::constants::FEATURE_COUNT;
use crate::logic::sensor::SensorReading;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned unknown class index {0}")]
    UnknownClass(i64),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Backend that maps one feature vector to a class index.
pub trait Classifier: Send + Sync {
    /// Where the model came from (file path or "heuristic")
    fn source(&self) -> &str;

    /// "onnx" or "fallback"
    fn method(&self) -> &'static str;

    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, ModelError>;
}

impl<C: Classifier + ?Sized> Classifier for std::sync::Arc<C> {
    fn source(&self) -> &str {
        (**self).source()
    }

    fn method(&self) -> &'static str {
        (**self).method()
    }

    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, ModelError> {
        (**self).classify(features)
    }
}

// ============================================================================
// MODEL ADAPTER
// ============================================================================

/// Engine status for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub source: String,
    pub method: String,
    pub loaded_at: DateTime<Utc>,
    pub inference_count: u64,
    pub failure_count: u64,
    pub avg_latency_ms: f32,
}

pub struct ModelAdapter {
    classifier: Box<dyn Classifier>,
    loaded_at: DateTime<Utc>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
    failure_count: AtomicU64,
}

impl ModelAdapter {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self::from_boxed(Box::new(classifier))
    }

    pub fn from_boxed(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            loaded_at: Utc::now(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
        }
    }

    /// Load the ONNX model, or fall back to the heuristic classifier when the
    /// file is missing or unreadable.
    pub fn load_or_fallback(model_path: &Path) -> Self {
        match OnnxClassifier::load(model_path) {
            Ok(classifier) => Self::new(classifier),
            Err(e) => {
                log::warn!("{} - using fallback heuristics", e);
                Self::new(HeuristicClassifier::default())
            }
        }
    }

    /// Predict the freshness label for one validated reading.
    ///
    /// Errors are returned as-is: no retry and no fallback at this point.
    pub fn predict(&self, reading: &SensorReading) -> Result<FreshnessLabel, ModelError> {
        let start_time = std::time::Instant::now();
        let features = reading.to_features();

        let result = self.classifier.classify(&features).and_then(|index| {
            FreshnessLabel::from_class_index(index).ok_or(ModelError::UnknownClass(index))
        });

        match &result {
            Ok(label) => {
                let elapsed = start_time.elapsed().as_micros() as u64;
                self.latency_sum_us.fetch_add(elapsed, Ordering::Relaxed);
                self.inference_count.fetch_add(1, Ordering::Relaxed);
                log::debug!("{:?} -> {} ({}us, {})", features, label, elapsed, self.classifier.method());
            }
            Err(e) => {
                self.failure_count.fetch_add(1, Ordering::Relaxed);
                log::error!("Prediction failed for {:?}: {}", features, e);
            }
        }

        result
    }

    pub fn method(&self) -> &'static str {
        self.classifier.method()
    }

    pub fn status(&self) -> ModelStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        ModelStatus {
            source: self.classifier.source().to_string(),
            method: self.classifier.method().to_string(),
            loaded_at: self.loaded_at,
            inference_count: count,
            failure_count: self.failure_count.load(Ordering::Relaxed),
            avg_latency_ms: avg,
        }
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Classifier exported to ONNX (e.g. a scikit-learn pipeline via skl2onnx).
///
/// Input: one `[1, 4]` f32 tensor. Output: the first graph output, either an
/// i64 class label or f32 class scores.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_name: String,
    source: String,
}

impl OnnxClassifier {
    /// Load ONNX model from file
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path.display().to_string()));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::Load(e.to_string()))?;

        let classifier = Self::from_session(session, model_path.display().to_string())?;
        log::info!("ONNX model loaded successfully (output '{}')", classifier.output_name);
        Ok(classifier)
    }

    fn from_session(session: Session, source: String) -> Result<Self, ModelError> {
        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Load("No output defined".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            source,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn source(&self) -> &str {
        &self.source
    }

    fn method(&self) -> &'static str {
        "onnx"
    }

    fn classify(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, ModelError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| ModelError::Inference(format!("Missing output '{}'", self.output_name)))?;

        if let Ok((_, labels)) = output.try_extract_tensor::<i64>() {
            return labels.first()
                .copied()
                .ok_or_else(|| ModelError::Inference("Empty label tensor".to_string()));
        }

        let (_, scores) = output.try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        decode_scores(scores)
    }
}

/// Interpret an f32 output: one value is the class itself, one value per
/// label is a score vector (argmax).
fn decode_scores(scores: &[f32]) -> Result<i64, ModelError> {
    match scores.len() {
        1 => Ok(scores[0].round() as i64),
        n if n == FreshnessLabel::ALL.len() => scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i as i64)
            .ok_or_else(|| ModelError::Inference("Empty score tensor".to_string())),
        n => Err(ModelError::Inference(format!("Unexpected output size {}", n))),
    }
}
