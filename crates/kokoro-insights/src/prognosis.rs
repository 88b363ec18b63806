//! Chart series for the prognosis view.

use kokoro_core::models::patient::PatientRecord;
use kokoro_core::models::scenario::{Horizon, OutcomeScenario};
use serde::Serialize;
use ts_rs::TS;

use crate::error::InsightError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PrognosisPoint {
    pub label: String,
    /// Weeks from now; 0 for the current reading.
    pub weeks: u8,
    pub median: u8,
    pub low: u8,
    pub high: u8,
}

/// The scenario with the given id (`current`, `increase_med`, ...).
pub fn find_scenario<'a>(
    record: &'a PatientRecord,
    scenario_id: &str,
) -> Result<&'a OutcomeScenario, InsightError> {
    record
        .outcome_scenarios
        .iter()
        .find(|s| s.kind.id() == scenario_id)
        .ok_or_else(|| InsightError::UnknownScenario(scenario_id.to_string()))
}

/// The current PHQ-9 total followed by the scenario's 4, 8 and 12 week
/// projections.
pub fn prognosis_series(
    record: &PatientRecord,
    scenario_id: &str,
) -> Result<Vec<PrognosisPoint>, InsightError> {
    let scenario = find_scenario(record, scenario_id)?;
    let current = record.latest_phq9().unwrap_or_default();

    let mut series = Vec::with_capacity(Horizon::ALL.len() + 1);
    series.push(PrognosisPoint {
        label: "Now".to_string(),
        weeks: 0,
        median: current,
        low: current,
        high: current,
    });
    series.extend(Horizon::ALL.into_iter().map(|horizon| {
        let projection = scenario.projection(horizon);
        PrognosisPoint {
            label: format!("Week {}", horizon.weeks()),
            weeks: horizon.weeks(),
            median: projection.median,
            low: projection.low,
            high: projection.high,
        }
    }));
    Ok(series)
}
