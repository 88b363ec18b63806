//! Which patient the presentation layer is showing.

use kokoro_core::models::patient::{PatientId, PatientRecord};
use kokoro_core::models::summary::PatientSummary;

use crate::cache::PatientCache;

/// The current patient over a [`PatientCache`].
///
/// Selecting never fails: an unknown id leaves the selection pointing at
/// the first record, so a view always has something to render.
#[derive(Debug)]
pub struct Selection<'a> {
    cache: &'a PatientCache,
    selected: PatientId,
}

impl<'a> Selection<'a> {
    /// Starts on the first patient.
    pub fn new(cache: &'a PatientCache) -> Self {
        let selected = cache.first().id;
        Self { cache, selected }
    }

    /// Select `id`, returning the record now current.
    pub fn select(&mut self, id: &str) -> &'a PatientRecord {
        let record = self.cache.select(id);
        self.selected = record.id;
        record
    }

    pub fn selected_id(&self) -> PatientId {
        self.selected
    }

    pub fn current(&self) -> &'a PatientRecord {
        match self.cache.get(self.selected) {
            Some(record) => record,
            None => {
                tracing::warn!(id = %self.selected, "selected patient missing, using first record");
                self.cache.first()
            }
        }
    }

    pub fn summaries(&self) -> Vec<PatientSummary> {
        self.cache.patient_summaries()
    }
}
