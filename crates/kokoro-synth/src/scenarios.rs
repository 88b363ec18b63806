//! Outcome projections per treatment strategy.

use kokoro_core::models::scenario::{OutcomeScenario, Projection, ScenarioKind};

use crate::rng::SeededRandom;
use crate::{round_half_up, to_score};

/// Decay of the latest score at 4, 8 and 12 weeks, and the half-width of
/// the projected range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioModel {
    pub kind: ScenarioKind,
    pub multipliers: [f64; 3],
    pub spread: f64,
}

/// Models in generation order. More aggressive strategies decay faster.
pub const MODELS: [ScenarioModel; 4] = [
    ScenarioModel {
        kind: ScenarioKind::Current,
        multipliers: [0.7, 0.5, 0.35],
        spread: 3.0,
    },
    ScenarioModel {
        kind: ScenarioKind::IncreaseMed,
        multipliers: [0.65, 0.45, 0.3],
        spread: 3.0,
    },
    ScenarioModel {
        kind: ScenarioKind::AddCbtI,
        multipliers: [0.6, 0.4, 0.25],
        spread: 3.0,
    },
    ScenarioModel {
        kind: ScenarioKind::SwitchMed,
        multipliers: [0.75, 0.55, 0.4],
        spread: 4.0,
    },
];

/// One projection around `centre`. The median is jittered by ±1 and the
/// high end widened by up to 2; the low end uses the unjittered centre.
fn project(rng: &mut SeededRandom, centre: f64, spread: f64) -> Projection {
    let median = round_half_up(centre + f64::from(rng.int_in_range(-1, 1))).max(0);
    let low = round_half_up(centre - spread).max(0);
    let high = round_half_up(centre + spread + f64::from(rng.int_in_range(0, 2))).max(0);
    Projection {
        median: to_score(median),
        low: to_score(low),
        high: to_score(high),
    }
}

/// The four strategies projected from the patient's latest PHQ-9 total.
pub fn generate_scenarios(rng: &mut SeededRandom, latest: u8) -> Vec<OutcomeScenario> {
    let base = f64::from(latest);
    MODELS
        .iter()
        .map(|model| {
            let [week4, week8, week12] = model
                .multipliers
                .map(|multiplier| project(rng, base * multiplier, model.spread));
            OutcomeScenario {
                kind: model.kind,
                label: model.kind.label().to_string(),
                week4,
                week8,
                week12,
            }
        })
        .collect()
}
