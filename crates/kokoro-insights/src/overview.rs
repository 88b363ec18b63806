//! Headline numbers for the overview panel.

use kokoro_core::models::patient::PatientRecord;
use kokoro_core::models::persona::Persona;
use kokoro_core::models::scale::ScaleKind;
use kokoro_instruments::instrument_for;
use kokoro_instruments::scoring::SeverityBand;
use serde::Serialize;
use ts_rs::TS;

/// Latest reading on one scale, with the change since the reading before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoreCard {
    pub scale: ScaleKind,
    pub name: String,
    pub latest: u8,
    pub previous: Option<u8>,
    /// `latest - previous`; negative means improvement.
    pub change: Option<i16>,
    pub max_score: u8,
    pub severity: Option<SeverityBand>,
}

/// One card per scale, in [`ScaleKind::ALL`] order. Scales without any
/// observations are skipped.
pub fn score_cards(record: &PatientRecord) -> Vec<ScoreCard> {
    ScaleKind::ALL
        .into_iter()
        .filter_map(|scale| {
            let totals: Vec<u8> = record
                .observations(scale)
                .iter()
                .map(|o| o.total())
                .collect();
            let (&latest, rest) = totals.split_last()?;
            let previous = rest.last().copied();
            let instrument = instrument_for(scale);
            Some(ScoreCard {
                scale,
                name: scale.name().to_string(),
                latest,
                previous,
                change: previous.map(|p| i16::from(latest) - i16::from(p)),
                max_score: scale.max_score(),
                severity: instrument.severity(latest).cloned(),
            })
        })
        .collect()
}

/// PHQ-9 change from the first to the last administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Improvement {
    pub baseline: u8,
    pub latest: u8,
    /// `latest - baseline`.
    pub points: i16,
    /// Reduction relative to baseline, rounded to a whole percent. Negative
    /// when the patient got worse; 0 for a zero baseline.
    pub percent: i32,
}

pub fn improvement(record: &PatientRecord) -> Option<Improvement> {
    let baseline = record.baseline_phq9()?;
    let latest = record.latest_phq9()?;
    let percent = if baseline == 0 {
        0
    } else {
        let ratio = (f64::from(baseline) - f64::from(latest)) / f64::from(baseline);
        (ratio * 100.0 + 0.5).floor() as i32
    };
    Some(Improvement {
        baseline,
        latest,
        points: i16::from(latest) - i16::from(baseline),
        percent,
    })
}

/// The most probable persona. Ties go to the earlier entry.
pub fn top_persona(record: &PatientRecord) -> Option<&Persona> {
    record
        .personas
        .iter()
        .reduce(|best, p| if p.probability > best.probability { p } else { best })
}
