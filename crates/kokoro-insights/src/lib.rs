//! kokoro-insights
//!
//! Read-only views over a generated patient record: the numbers the
//! dashboard panels show. Nothing here draws random values; every function
//! is a projection of data the generator already produced.

pub mod error;
pub mod overview;
pub mod period;
pub mod phases;
pub mod prognosis;
pub mod search;

pub use error::InsightError;
pub use overview::{Improvement, ScoreCard, improvement, score_cards, top_persona};
pub use period::{Dated, Period, filter_by_period};
pub use phases::{Phase, PhaseComparison, PhaseSummary, phase_comparison};
pub use prognosis::{PrognosisPoint, prognosis_series};
pub use search::search_summaries;

/// Round half up to one decimal place.
pub(crate) fn round_tenths(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}
