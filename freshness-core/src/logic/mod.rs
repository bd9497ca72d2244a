//! Logic Module - freshness prediction and journey bookkeeping
//!
//! - `sensor/` - raw form input and validation
//! - `model/` - classifier adapter (ONNX, fallback heuristics)
//! - `journey/` - stage records generated per prediction
//! - `ledger/` - append-only record store and CSV export
//! - `tally` - prediction counts per label
//! - `session` - per-user context tying the above together

pub mod sensor;
pub mod model;
pub mod journey;
pub mod ledger;
pub mod tally;
pub mod session;
