//! kokoro-instruments
//!
//! Depression rating scale definitions. Pure data: item structure, score
//! ranges, severity bands, and validation rules for each scale the
//! dashboard tracks.

pub mod error;
pub mod instruments;
pub mod scoring;

use kokoro_core::models::scale::ScaleKind;

use error::InstrumentError;
use scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, SeverityBand, ValidationError};

/// Trait implemented by each rating scale.
pub trait Instrument: Send + Sync {
    /// Which of the tracked scales this is.
    fn scale(&self) -> ScaleKind;

    /// Unique identifier (e.g., "phq9", "madrs").
    fn id(&self) -> &str {
        self.scale().id()
    }

    /// Human-readable name (e.g., "PHQ-9", "HAM-D").
    fn name(&self) -> &str {
        self.scale().name()
    }

    /// The items or totals this scale records.
    fn domains(&self) -> &[Domain];

    /// Severity bands covering the whole total range, lowest first.
    fn severity_bands(&self) -> &[SeverityBand];

    /// Valid range of the scale total.
    fn total_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: f64::from(self.scale().max_score()),
            step: Some(1.0),
        }
    }

    /// The severity band a total falls into, or `None` above the maximum.
    fn severity(&self, total: u8) -> Option<&SeverityBand> {
        self.severity_bands().iter().find(|b| b.contains(total))
    }

    /// Validate a set of score entries against this scale's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Check a scale total against [`Instrument::total_range`].
    fn validate_total(&self, total: u8) -> Result<(), ValidationError> {
        let range = self.total_range();
        let value = f64::from(total);
        if range.contains(value) {
            return Ok(());
        }
        Err(ValidationError {
            subscale_id: "total".to_string(),
            value,
            expected_range: range,
            score_type: ScoreType::Raw,
            message: format!(
                "{}: total {} is outside range [{}, {}]",
                self.name(),
                total,
                range.min,
                range.max,
            ),
        })
    }
}

/// Return all registered instruments, in [`ScaleKind::ALL`] order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    ScaleKind::ALL.into_iter().map(instrument_for).collect()
}

/// The instrument definition for a scale.
pub fn instrument_for(scale: ScaleKind) -> Box<dyn Instrument> {
    match scale {
        ScaleKind::Phq9 => Box::new(instruments::phq9::Phq9),
        ScaleKind::Qids => Box::new(instruments::qids::Qids),
        ScaleKind::Hamd => Box::new(instruments::hamd::Hamd),
        ScaleKind::Madrs => Box::new(instruments::madrs::Madrs),
    }
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown id is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
