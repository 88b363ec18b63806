//! Patient record assembly.
//!
//! The draw order below is fixed: every field consumes the shared stream in
//! sequence, so moving a draw changes every later field of the record.

use jiff::civil::{Date, date};
use kokoro_core::ids;
use kokoro_core::models::patient::{
    Classification, Gender, Medication, PatientId, PatientRecord, Psychotherapy,
};

use crate::rng::SeededRandom;
use crate::scales::{DERIVATIONS, derive_scale};
use crate::tables::{
    AGE_GROUPS, CLINICIANS, DIAGNOSES, FEMALE_GIVEN_NAMES, MALE_GIVEN_NAMES, MEDICATIONS,
    SURNAMES, THERAPY_FREQUENCY, THERAPY_TYPES,
};
use crate::{add_days, events, personas, scenarios, similar, to_score, trajectory};

/// First possible start date.
pub const START_EPOCH: Date = date(2023, 1, 1);

/// Start dates fall within this many days after [`START_EPOCH`].
pub const START_WINDOW_DAYS: i32 = 545;

pub const FEMALE_PROBABILITY: f64 = 0.55;

pub const IMPROVER_PROBABILITY: f64 = 0.6;

/// Probability of `Stable` among patients who are not improvers.
pub const STABLE_PROBABILITY: f64 = 0.625;

fn draw_classification(rng: &mut SeededRandom) -> Classification {
    if rng.bernoulli(IMPROVER_PROBABILITY) {
        Classification::Improver
    } else if rng.bernoulli(STABLE_PROBABILITY) {
        Classification::Stable
    } else {
        Classification::Worsen
    }
}

/// Worsening patients start milder so they have room to deteriorate.
fn draw_baseline(rng: &mut SeededRandom, classification: Classification) -> u8 {
    let baseline = match classification {
        Classification::Worsen => rng.int_in_range(10, 18),
        Classification::Improver | Classification::Stable => rng.int_in_range(14, 26),
    };
    to_score(baseline)
}

/// Generate patient `patient_number`. The same number always yields the
/// same record.
pub fn generate(patient_number: u32) -> PatientRecord {
    let mut rng = SeededRandom::for_patient(patient_number);

    let gender = if rng.bernoulli(FEMALE_PROBABILITY) {
        Gender::Female
    } else {
        Gender::Male
    };
    let age_group = rng.pick(&AGE_GROUPS);
    let classification = draw_classification(&mut rng);
    let baseline = draw_baseline(&mut rng, classification);
    let medication = rng.pick(&MEDICATIONS);
    let therapy_type = rng.pick(&THERAPY_TYPES);
    let start = add_days(START_EPOCH, rng.int_in_range(0, START_WINDOW_DAYS));

    let phq9 = trajectory::phq9_series(&mut rng, classification, baseline, start);
    let treatment_events = events::generate_events(&mut rng, medication, start);

    let surname = rng.pick(&SURNAMES);
    let given_name = match gender {
        Gender::Female => rng.pick(&FEMALE_GIVEN_NAMES),
        Gender::Male => rng.pick(&MALE_GIVEN_NAMES),
    };
    let diagnosis = rng.pick(&DIAGNOSES);
    let clinician = rng.pick(&CLINICIANS);

    let [qids, hamd, madrs] = DERIVATIONS.map(|d| derive_scale(&mut rng, &phq9, d));
    let personas = personas::generate_personas(&mut rng);
    let latest = phq9.last().map_or(baseline, |p| p.total);
    let outcome_scenarios = scenarios::generate_scenarios(&mut rng, latest);
    let similar_patients = similar::generate_similar(&mut rng, baseline);

    let id = PatientId::new(patient_number);
    tracing::debug!(
        %id,
        ?classification,
        baseline,
        latest,
        "generated synthetic patient"
    );

    PatientRecord {
        id,
        name: ids::display_name(surname, given_name),
        age_group: age_group.to_string(),
        gender,
        diagnosis: diagnosis.to_string(),
        diagnosis_date: start,
        current_medication: Medication {
            name: medication.name.to_string(),
            category: medication.category.to_string(),
            start_date: add_days(start, events::MEDICATION_START_DAYS),
        },
        psychotherapy: Psychotherapy {
            therapy_type: therapy_type.to_string(),
            start_date: add_days(start, events::THERAPY_START_DAYS),
            frequency: THERAPY_FREQUENCY.to_string(),
        },
        primary_clinician: clinician.to_string(),
        classification,
        phq9,
        qids,
        hamd,
        madrs,
        treatment_events,
        personas,
        outcome_scenarios,
        similar_patients,
    }
}
