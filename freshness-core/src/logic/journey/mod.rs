//! Journey Module - simulated supply-chain records
//!
//! Every successful prediction becomes a batch of four records
//! (Farm, Transport, Storage, Supermarket) with perturbed sensor values
//! stamped backwards from the prediction time.

pub mod stage;
pub mod record;
pub mod generator;

#[cfg(test)]
mod tests;

pub use generator::{generate_batch_id, generate_journey, JourneyInput};
pub use record::JourneyRecord;
pub use stage::Stage;
