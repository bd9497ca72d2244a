//! Ledger Module - append-only journey store
//!
//! Process-local ordered list of journey records. Records go in four at a
//! time (one journey) and never change or leave afterwards. There is no
//! hashing or linking between entries; "ledger" is a presentation name.

pub mod export;


use crate::logic::journey::JourneyRecord;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<JourneyRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records, keeping their order
    pub fn append(&mut self, records: impl IntoIterator<Item = JourneyRecord>) {
        let before = self.records.len();
        self.records.extend(records);
        log::debug!("Ledger appended {} records (total {})", self.records.len() - before, self.records.len());
    }

    /// Every record in insertion order
    pub fn all(&self) -> &[JourneyRecord] {
        &self.records
    }

    /// Records of one batch in insertion order. Unknown ids yield an empty list.
    pub fn filter_by_batch(&self, batch_id: &str) -> Vec<&JourneyRecord> {
        self.records
            .iter()
            .filter(|r| r.batch_id == batch_id)
            .collect()
    }

    /// Journey timeline of a batch.
    ///
    /// Journeys are appended whole and in stage order, so insertion order
    /// already is journey order. Re-sorting by timestamp would only agree
    /// with it as long as the stage offsets stay monotonic.
    pub fn timeline(&self, batch_id: &str) -> Vec<&JourneyRecord> {
        self.filter_by_batch(batch_id)
    }

    /// Distinct batch ids in order of first appearance
    pub fn batch_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.batch_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
