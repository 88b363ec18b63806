//! Everything the dashboard panels show for one patient, in one document.

use jiff::civil::Date;
use kokoro_core::models::event::TreatmentEvent;
use kokoro_core::models::observation::ItemizedObservation;
use kokoro_core::models::patient::PatientRecord;
use kokoro_core::models::persona::Persona;
use kokoro_core::models::summary::PatientSummary;
use kokoro_insights::{
    Improvement, Period, PhaseComparison, PrognosisPoint, ScoreCard, filter_by_period,
    improvement, phase_comparison, prognosis_series, score_cards, top_persona,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Timeline<'a> {
    pub period: Period,
    pub reference_date: Date,
    pub phq9: Vec<&'a ItemizedObservation>,
    pub treatment_events: Vec<&'a TreatmentEvent>,
}

#[derive(Debug, Serialize)]
pub struct PatientOverview<'a> {
    pub summary: PatientSummary,
    pub score_cards: Vec<ScoreCard>,
    pub improvement: Option<Improvement>,
    pub top_persona: Option<&'a Persona>,
    pub phases: Option<PhaseComparison>,
    pub timeline: Timeline<'a>,
    pub scenario: String,
    pub prognosis: Vec<PrognosisPoint>,
}

pub fn build_overview<'a>(
    record: &'a PatientRecord,
    period: Period,
    reference_date: Date,
    scenario: &str,
) -> eyre::Result<PatientOverview<'a>> {
    let prognosis = prognosis_series(record, scenario)?;
    Ok(PatientOverview {
        summary: record.summary(),
        score_cards: score_cards(record),
        improvement: improvement(record),
        top_persona: top_persona(record),
        phases: phase_comparison(record),
        timeline: Timeline {
            period,
            reference_date,
            phq9: filter_by_period(&record.phq9, period, reference_date),
            treatment_events: filter_by_period(&record.treatment_events, period, reference_date),
        },
        scenario: scenario.to_string(),
        prognosis,
    })
}
