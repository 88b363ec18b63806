//! Persona probability split.

use kokoro_core::models::persona::{Persona, PersonaKind};

use crate::rng::SeededRandom;
use crate::to_score;

/// Range of the leading persona's probability.
pub const PRIMARY_RANGE: (i32, i32) = (40, 70);

/// Lowest probability of the second persona.
pub const SECONDARY_MIN: i32 = 10;

/// Lowest probability left over for the third persona.
pub const RESIDUAL_MIN: i32 = 5;

/// Probabilities for the three archetypes, summing to exactly 100.
pub fn generate_personas(rng: &mut SeededRandom) -> Vec<Persona> {
    let first = rng.int_in_range(PRIMARY_RANGE.0, PRIMARY_RANGE.1);
    let second_max = (100 - first - RESIDUAL_MIN).max(SECONDARY_MIN);
    let second = rng.int_in_range(SECONDARY_MIN, second_max);
    let third = 100 - first - second;

    PersonaKind::ALL
        .into_iter()
        .zip([first, second, third])
        .map(|(kind, probability)| Persona::new(kind, to_score(probability)))
        .collect()
}
