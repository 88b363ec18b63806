//! PHQ-9 item breakdown of a total.

use kokoro_core::models::observation::Phq9Items;

use crate::rng::SeededRandom;
use crate::{round_half_up, to_score};

/// Relative weight of each item, in questionnaire order. Sums to 1.
pub const ITEM_WEIGHTS: [f64; Phq9Items::COUNT] =
    [0.14, 0.14, 0.13, 0.13, 0.10, 0.12, 0.12, 0.08, 0.04];

/// Below this total the suicidal-ideation item is held at 0.
pub const SUICIDAL_IDEATION_GUARD: u8 = 12;

/// Maximum reconciliation passes toward the target total.
pub const CORRECTION_PASSES: usize = 3;

const SUICIDAL_IDEATION: usize = Phq9Items::COUNT - 1;

/// Spread `total` over the nine items.
///
/// Each item starts at `round(total * weight * jitter)` with jitter in
/// `[0.7, 1.3)`, capped at 3. Up to [`CORRECTION_PASSES`] passes then move
/// one random item a step toward the target. The result is best effort:
/// the item sum can still differ from `total` after the last pass.
///
/// While the guard is active a pass that lands on suicidal ideation
/// leaves it alone. The pass still consumes its draw.
pub fn distribute_items(rng: &mut SeededRandom, total: u8) -> Phq9Items {
    let target = f64::from(total);
    let item_max = i32::from(Phq9Items::ITEM_MAX);
    let mut raw = ITEM_WEIGHTS.map(|weight| {
        let jitter = 0.7 + rng.next_f64() * 0.6;
        round_half_up(target * weight * jitter).min(item_max)
    });

    let guarded = total < SUICIDAL_IDEATION_GUARD;
    if guarded {
        raw[SUICIDAL_IDEATION] = 0;
    }

    for _ in 0..CORRECTION_PASSES {
        let diff = i32::from(total) - raw.iter().sum::<i32>();
        if diff == 0 {
            break;
        }
        let index = rng.int_in_range(0, SUICIDAL_IDEATION as i32) as usize;
        if guarded && index == SUICIDAL_IDEATION {
            continue;
        }
        raw[index] = (raw[index] + diff.signum()).clamp(0, item_max);
    }

    Phq9Items::from_array(raw.map(to_score))
}
