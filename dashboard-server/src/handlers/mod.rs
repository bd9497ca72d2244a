//! HTTP handlers

pub mod health;
pub mod model;
pub mod sessions;
pub mod predictions;
pub mod records;
pub mod batches;
pub mod tally;
