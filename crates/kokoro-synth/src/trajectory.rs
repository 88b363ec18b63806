//! The 12-point PHQ-9 trajectory.
//!
//! Each point after the first is derived from the previous one and the
//! patient's classification. Scores are drawn point by point, interleaved
//! with the item breakdown of each point, so the two share one stream.

use jiff::civil::Date;
use kokoro_core::models::observation::ItemizedObservation;
use kokoro_core::models::patient::Classification;
use kokoro_core::models::scale::ScaleKind;

use crate::items::distribute_items;
use crate::rng::SeededRandom;
use crate::{add_days, round_half_up, to_score};

/// Number of PHQ-9 administrations per patient.
pub const POINTS: usize = 12;

/// Days between administrations.
pub const INTERVAL_DAYS: i32 = 14;

/// Share of the baseline an improver sheds by the last point.
pub const IMPROVER_DECAY: f64 = 0.88;

/// Worsening patients improve slightly before this index, then deteriorate.
pub const WORSEN_TURNING_POINT: usize = 4;

/// Score at `index` given the previous score.
pub fn next_score(
    rng: &mut SeededRandom,
    classification: Classification,
    baseline: u8,
    index: usize,
    previous: u8,
) -> u8 {
    let previous = i32::from(previous);
    let next = match classification {
        Classification::Improver => {
            let fraction = index as f64 / (POINTS - 1) as f64;
            let target = (f64::from(baseline) * (1.0 - fraction * IMPROVER_DECAY)).max(1.0);
            round_half_up(target + f64::from(rng.int_in_range(-1, 1)))
        }
        Classification::Stable => previous + rng.int_in_range(-1, 1),
        Classification::Worsen if index < WORSEN_TURNING_POINT => {
            previous - rng.int_in_range(0, 1)
        }
        Classification::Worsen => previous + rng.int_in_range(0, 2),
    };
    to_score(next.clamp(0, i32::from(ScaleKind::Phq9.max_score())))
}

/// The full dated PHQ-9 series, starting at `baseline` on `start`.
pub fn phq9_series(
    rng: &mut SeededRandom,
    classification: Classification,
    baseline: u8,
    start: Date,
) -> Vec<ItemizedObservation> {
    let mut points = Vec::with_capacity(POINTS);
    let mut score = baseline.min(ScaleKind::Phq9.max_score());
    for index in 0..POINTS {
        if index > 0 {
            score = next_score(rng, classification, baseline, index, score);
        }
        points.push(ItemizedObservation {
            date: add_days(start, index as i32 * INTERVAL_DAYS),
            items: distribute_items(rng, score),
            total: score,
        });
    }
    points
}
