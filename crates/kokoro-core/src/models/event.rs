use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentEventKind {
    MedicationStart,
    MedicationIncrease,
    TherapyStart,
}

impl TreatmentEventKind {
    pub fn label(self) -> &'static str {
        match self {
            TreatmentEventKind::MedicationStart => "Medication started",
            TreatmentEventKind::MedicationIncrease => "Dose increased",
            TreatmentEventKind::TherapyStart => "Psychotherapy started",
        }
    }

    /// Chart marker color.
    pub fn color(self) -> &'static str {
        match self {
            TreatmentEventKind::MedicationStart => "#3b82f6",
            TreatmentEventKind::MedicationIncrease => "#f59e0b",
            TreatmentEventKind::TherapyStart => "#10b981",
        }
    }
}

/// A dated treatment milestone shown on the score timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentEvent {
    pub date: Date,
    pub kind: TreatmentEventKind,
    pub label: String,
    pub detail: String,
    pub color: String,
}

impl TreatmentEvent {
    pub fn new(kind: TreatmentEventKind, date: Date, detail: String) -> Self {
        Self {
            date,
            kind,
            label: kind.label().to_string(),
            detail,
            color: kind.color().to_string(),
        }
    }
}
