//! Similar-case neighbors.

use kokoro_core::ids;
use kokoro_core::models::similar::{OutcomeCategory, SimilarPatient};

use crate::rng::SeededRandom;
use crate::tables::SIMILAR_PATTERNS;
use crate::{round_half_up, to_score};

pub const NEIGHBOR_COUNT: usize = 5;

/// Similarity lost per rank.
pub const RANK_DECREMENT: i32 = 4;

/// Outcome by week-4/baseline ratio, in fifths. Bigger drops land earlier.
pub const OUTCOME_TABLE: [OutcomeCategory; 5] = [
    OutcomeCategory::Remission,
    OutcomeCategory::Response,
    OutcomeCategory::Partial,
    OutcomeCategory::Partial,
    OutcomeCategory::NoResponse,
];

/// Bucket a week-4 result relative to the patient's baseline. Ratios at or
/// above 1 fall into the last bucket.
pub fn outcome_bucket(week4_result: u8, baseline: u8) -> OutcomeCategory {
    let ratio = if baseline == 0 {
        0.0
    } else {
        f64::from(week4_result) / f64::from(baseline)
    };
    let index = ((ratio * OUTCOME_TABLE.len() as f64).floor() as usize).min(OUTCOME_TABLE.len() - 1);
    OUTCOME_TABLE[index]
}

/// Five neighbors, most similar first.
///
/// Each rank draws a similarity in `[70, 97]` less the rank decrement,
/// capped at the previous rank's value so the list never rises.
pub fn generate_similar(rng: &mut SeededRandom, baseline: u8) -> Vec<SimilarPatient> {
    let mut ceiling = i32::MAX;
    (0..NEIGHBOR_COUNT as i32)
        .map(|rank| {
            let similarity = (rng.int_in_range(70, 97) - rank * RANK_DECREMENT).min(ceiling);
            ceiling = similarity;

            let ratio = 0.3 + rng.next_f64() * 0.5;
            let week4_result = to_score(round_half_up(f64::from(baseline) * ratio));
            let anonymous_id = ids::anonymous(rng.int_in_range(1000, 9999).unsigned_abs());
            let neighbor_baseline = i32::from(baseline) + rng.int_in_range(-3, 3);
            let treatment_pattern = rng.pick(&SIMILAR_PATTERNS).to_string();

            SimilarPatient {
                anonymous_id,
                similarity: to_score(similarity),
                baseline: to_score(neighbor_baseline),
                week4_result,
                treatment_pattern,
                outcome: outcome_bucket(week4_result, baseline),
            }
        })
        .collect()
}
