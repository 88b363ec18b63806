use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score an item or total produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled sum of item ratings.
    Raw,
    /// Likert-style item rating (e.g., 0–3).
    Rating,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// An item or total definition within a scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A group of items, with the range of their composite.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// Inclusive total range mapped to a clinical severity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: u8,
    pub max: u8,
    pub label: String,
    /// Foreground color used by the dashboard badges.
    pub color: String,
}

impl SeverityBand {
    pub fn new(min: u8, max: u8, label: &str, color: &str) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    pub fn contains(&self, total: u8) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

/// Band colors, mildest first.
pub mod palette {
    pub const GREEN: &str = "#16a34a";
    pub const YELLOW: &str = "#ca8a04";
    pub const ORANGE: &str = "#ea580c";
    pub const RED: &str = "#dc2626";
    pub const DARK_RED: &str = "#991b1b";
}

/// A score entry to validate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
