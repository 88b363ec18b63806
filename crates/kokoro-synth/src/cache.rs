//! The memoized patient population.

use std::num::NonZeroU32;
use std::sync::OnceLock;

use kokoro_core::models::patient::{PatientId, PatientRecord};
use kokoro_core::models::summary::PatientSummary;

use crate::error::SynthError;
use crate::generator::generate;

/// Population size when none is configured.
pub const DEFAULT_POPULATION: u32 = 100;

const DEFAULT_SIZE: NonZeroU32 = match NonZeroU32::new(DEFAULT_POPULATION) {
    Some(size) => size,
    None => panic!("default population must be non-zero"),
};

/// Generates patients `1..=size` on first access and keeps them for the
/// lifetime of the cache.
///
/// Initialization runs at most once, even when several threads race on
/// the first call; later calls return the same slice.
#[derive(Debug)]
pub struct PatientCache {
    size: NonZeroU32,
    records: OnceLock<Vec<PatientRecord>>,
}

impl Default for PatientCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientCache {
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            records: OnceLock::new(),
        }
    }

    pub fn with_size(size: u32) -> Result<Self, SynthError> {
        let size = NonZeroU32::new(size).ok_or(SynthError::EmptyPopulation)?;
        Ok(Self {
            size,
            records: OnceLock::new(),
        })
    }

    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Whether the population has been generated yet.
    pub fn is_initialized(&self) -> bool {
        self.records.get().is_some()
    }

    /// Every record, ordered by patient number.
    pub fn all_patients(&self) -> &[PatientRecord] {
        self.records.get_or_init(|| {
            let records: Vec<PatientRecord> = (1..=self.size.get()).map(generate).collect();
            tracing::info!(count = records.len(), "generated patient population");
            records
        })
    }

    /// Summaries in population order, projected fresh on each call.
    pub fn patient_summaries(&self) -> Vec<PatientSummary> {
        self.all_patients()
            .iter()
            .map(PatientRecord::summary)
            .collect()
    }

    pub fn get(&self, id: PatientId) -> Option<&PatientRecord> {
        let index = usize::try_from(id.number().checked_sub(1)?).ok()?;
        self.all_patients().get(index)
    }

    /// Look up a record by its textual id (`P001`). Malformed ids find
    /// nothing.
    pub fn find(&self, id: &str) -> Option<&PatientRecord> {
        let id: PatientId = id.trim().parse().ok()?;
        self.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&PatientRecord, SynthError> {
        self.find(id)
            .ok_or_else(|| SynthError::UnknownPatient(id.to_string()))
    }

    /// The record for `id`, or the first record when `id` is unknown.
    pub fn select(&self, id: &str) -> &PatientRecord {
        match self.find(id) {
            Some(record) => record,
            None => {
                tracing::warn!(id, "unknown patient id, falling back to first record");
                self.first()
            }
        }
    }

    /// The first record. `size` is a `NonZeroU32`, so the population
    /// always holds patient 1.
    pub fn first(&self) -> &PatientRecord {
        self.all_patients()
            .first()
            .unwrap_or_else(|| unreachable!("population of {} is empty", self.size))
    }
}
