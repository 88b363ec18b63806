use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Week-4 outcome bucket of a similar case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutcomeCategory {
    Remission,
    Response,
    Partial,
    NoResponse,
}

impl OutcomeCategory {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeCategory::Remission => "Remission",
            OutcomeCategory::Response => "Response",
            OutcomeCategory::Partial => "Partial response",
            OutcomeCategory::NoResponse => "No response",
        }
    }
}

/// A synthetic neighbor case shown next to the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarPatient {
    pub anonymous_id: String,
    /// Similarity percentage (0–100).
    pub similarity: u8,
    /// PHQ-9 at intake.
    pub baseline: u8,
    /// PHQ-9 after four weeks.
    pub week4_result: u8,
    pub treatment_pattern: String,
    pub outcome: OutcomeCategory,
}
