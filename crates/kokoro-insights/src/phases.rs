//! Before / during / after treatment comparison.
//!
//! Phase boundaries come from the treatment events: everything up to the
//! first event is *before*, up to the last event *during*, and the rest
//! *after*. A record without events splits its trajectory at one and two
//! thirds instead.

use jiff::civil::Date;
use kokoro_core::models::observation::{ItemizedObservation, Phq9Items};
use kokoro_core::models::patient::PatientRecord;
use serde::Serialize;
use ts_rs::TS;

use crate::round_tenths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Before,
    During,
    After,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Before, Phase::During, Phase::After];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Before => "Before treatment",
            Phase::During => "During treatment",
            Phase::After => "After treatment",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Phase::Before => "#f87171",
            Phase::During => "#fbbf24",
            Phase::After => "#34d399",
        }
    }
}

/// Averages over the PHQ-9 points in one phase. Empty phases report zeros.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub label: String,
    pub count: usize,
    /// Mean total, one decimal.
    pub average: f64,
    /// Mean per item in questionnaire order, one decimal each.
    pub item_averages: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PhaseComparison {
    /// Last date counted as *before*.
    pub before_end: Date,
    /// Last date counted as *during*.
    pub during_end: Date,
    pub phases: Vec<PhaseSummary>,
}

impl PhaseComparison {
    pub fn phase_of(&self, date: Date) -> Phase {
        if date <= self.before_end {
            Phase::Before
        } else if date <= self.during_end {
            Phase::During
        } else {
            Phase::After
        }
    }

    pub fn summary(&self, phase: Phase) -> Option<&PhaseSummary> {
        self.phases.iter().find(|s| s.phase == phase)
    }
}

fn boundaries(record: &PatientRecord) -> Option<(Date, Date)> {
    let first_event = record.treatment_events.iter().map(|e| e.date).min();
    let last_event = record.treatment_events.iter().map(|e| e.date).max();
    if let Some(first) = first_event
        && let Some(last) = last_event
    {
        return Some((first, last));
    }

    let n = record.phq9.len();
    let before_end = record.phq9.get(n / 3)?.date;
    let during_end = record.phq9.get(n * 2 / 3)?.date;
    Some((before_end, during_end))
}

fn summarize(phase: Phase, points: &[&ItemizedObservation]) -> PhaseSummary {
    let count = points.len();
    let mean = |sum: f64| {
        if count == 0 {
            0.0
        } else {
            round_tenths(sum / count as f64)
        }
    };

    let total_sum: f64 = points.iter().map(|p| f64::from(p.total)).sum();
    let item_averages = (0..Phq9Items::COUNT)
        .map(|i| mean(points.iter().map(|p| f64::from(p.items.as_array()[i])).sum()))
        .collect();

    PhaseSummary {
        phase,
        label: phase.label().to_string(),
        count,
        average: mean(total_sum),
        item_averages,
    }
}

/// Split the PHQ-9 trajectory into treatment phases. `None` only for a
/// record without a trajectory.
pub fn phase_comparison(record: &PatientRecord) -> Option<PhaseComparison> {
    let (before_end, during_end) = boundaries(record)?;
    let mut comparison = PhaseComparison {
        before_end,
        during_end,
        phases: Vec::with_capacity(Phase::ALL.len()),
    };

    for phase in Phase::ALL {
        let points: Vec<&ItemizedObservation> = record
            .phq9
            .iter()
            .filter(|p| comparison.phase_of(p.date) == phase)
            .collect();
        let summary = summarize(phase, &points);
        comparison.phases.push(summary);
    }
    Some(comparison)
}
