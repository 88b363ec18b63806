//! Secondary scales derived from the PHQ-9 series.

use kokoro_core::models::observation::{ItemizedObservation, SimpleObservation};
use kokoro_core::models::scale::ScaleKind;

use crate::rng::SeededRandom;
use crate::{round_half_up, to_score};

/// PHQ-9 positions carried into each secondary scale (two interior points
/// are skipped).
pub const SECONDARY_INDICES: [usize; 10] = [0, 1, 2, 3, 5, 6, 8, 9, 10, 11];

/// How a secondary scale is derived from PHQ-9 totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDerivation {
    pub scale: ScaleKind,
    /// Multiplier applied to the PHQ-9 total.
    pub ratio: f64,
}

/// Derivations in generation order.
pub const DERIVATIONS: [ScaleDerivation; 3] = [
    ScaleDerivation {
        scale: ScaleKind::Qids,
        ratio: 0.95,
    },
    ScaleDerivation {
        scale: ScaleKind::Hamd,
        ratio: 1.16,
    },
    ScaleDerivation {
        scale: ScaleKind::Madrs,
        ratio: 1.58,
    },
];

/// Scale the selected PHQ-9 totals, jitter by ±1, and clamp to the scale's
/// maximum. Dates are carried over unchanged.
pub fn derive_scale(
    rng: &mut SeededRandom,
    phq9: &[ItemizedObservation],
    derivation: ScaleDerivation,
) -> Vec<SimpleObservation> {
    let max = i32::from(derivation.scale.max_score());
    SECONDARY_INDICES
        .iter()
        .filter_map(|&i| phq9.get(i))
        .map(|point| {
            let scaled = f64::from(point.total) * derivation.ratio;
            let value = round_half_up(scaled + f64::from(rng.int_in_range(-1, 1)));
            SimpleObservation {
                date: point.date,
                total: to_score(value.clamp(0, max)),
            }
        })
        .collect()
}
