//! Treatment events at fixed offsets from the patient's start date.

use jiff::civil::Date;
use kokoro_core::models::event::{TreatmentEvent, TreatmentEventKind};

use crate::add_days;
use crate::rng::SeededRandom;
use crate::tables::{MedicationOption, THERAPY_FREQUENCY, THERAPY_TYPES};

pub const MEDICATION_START_DAYS: i32 = 14;
pub const THERAPY_START_DAYS: i32 = 42;
pub const MEDICATION_INCREASE_DAYS: i32 = 56;

/// The three treatment milestones, sorted by date.
///
/// The therapy detail is drawn independently from the therapy table, so it
/// may name a different modality than the patient's recorded therapy.
pub fn generate_events(
    rng: &mut SeededRandom,
    medication: &MedicationOption,
    start: Date,
) -> Vec<TreatmentEvent> {
    let mut events = vec![
        TreatmentEvent::new(
            TreatmentEventKind::MedicationStart,
            add_days(start, MEDICATION_START_DAYS),
            format!("{} started", medication.name),
        ),
        TreatmentEvent::new(
            TreatmentEventKind::MedicationIncrease,
            add_days(start, MEDICATION_INCREASE_DAYS),
            medication.increase.to_string(),
        ),
        TreatmentEvent::new(
            TreatmentEventKind::TherapyStart,
            add_days(start, THERAPY_START_DAYS),
            format!("{} ({THERAPY_FREQUENCY}) started", rng.pick(&THERAPY_TYPES)),
        ),
    ];
    events.sort_by_key(|e| e.date);
    events
}
