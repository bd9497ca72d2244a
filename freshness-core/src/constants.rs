//! Central Constants
//!
//! Single source of truth for the fixed values of the freshness model
//! contract and the simulated supply-chain journey.

/// Number of features fed to the classifier
pub const FEATURE_COUNT: usize = 4;

/// Placeholder status for every stage before the supermarket
pub const IN_TRANSIT: &str = "In-Transit";

/// Default food name offered by the prediction form
pub const DEFAULT_FOOD_NAME: &str = "Apple";

/// Prefix of generated batch identifiers
pub const BATCH_ID_PREFIX: &str = "BATCH-";

/// Hex digits taken from a random UUID for a generated batch id
pub const BATCH_ID_HEX_LEN: usize = 6;

/// Timestamp format used for records and CSV export
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name offered for the ledger download
pub const EXPORT_FILE_NAME: &str = "blockchain_data.csv";

/// Content type of the ledger download
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

// ============================================
// Perturbation half-widths (uniform, symmetric)
// ============================================

pub const TEMPERATURE_SPREAD: f64 = 2.0;
pub const HUMIDITY_SPREAD: f64 = 5.0;
pub const CO2_SPREAD: f64 = 100.0;
pub const GAS_SPREAD: f64 = 0.2;
