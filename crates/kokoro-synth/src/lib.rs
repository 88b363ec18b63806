//! kokoro-synth
//!
//! Deterministic synthetic patient generation. Every record is a pure
//! function of its patient number: one seeded random stream per patient
//! drives demographics, the PHQ-9 trajectory and its item breakdown, the
//! derived secondary scales, treatment events, personas, outcome
//! projections, and similar-case neighbors.
//!
//! [`cache::PatientCache`] builds the population once and hands out
//! records and summaries; [`selection::Selection`] tracks the record the
//! presentation layer is currently showing.

pub mod cache;
pub mod error;
pub mod events;
pub mod generator;
pub mod items;
pub mod personas;
pub mod rng;
pub mod scales;
pub mod scenarios;
pub mod selection;
pub mod similar;
pub mod tables;
pub mod trajectory;

pub use cache::PatientCache;
pub use generator::generate;
pub use rng::SeededRandom;
pub use selection::Selection;

use jiff::ToSpan;
use jiff::civil::Date;

/// Round half up (`floor(x + 0.5)`), the rounding every generated score uses.
pub(crate) fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Narrow an already-clamped score.
pub(crate) fn to_score(value: i32) -> u8 {
    value.clamp(0, i32::from(u8::MAX)) as u8
}

pub(crate) fn add_days(date: Date, days: i32) -> Date {
    date + days.days()
}
