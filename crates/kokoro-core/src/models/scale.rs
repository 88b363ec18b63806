use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The four depression rating scales tracked per patient. PHQ-9 is the
/// anchor scale; the other three are single-total scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleKind {
    Phq9,
    Qids,
    Hamd,
    Madrs,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 4] = [
        ScaleKind::Phq9,
        ScaleKind::Qids,
        ScaleKind::Hamd,
        ScaleKind::Madrs,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ScaleKind::Phq9 => "phq9",
            ScaleKind::Qids => "qids",
            ScaleKind::Hamd => "hamd",
            ScaleKind::Madrs => "madrs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Phq9 => "PHQ-9",
            ScaleKind::Qids => "QIDS",
            ScaleKind::Hamd => "HAM-D",
            ScaleKind::Madrs => "MADRS",
        }
    }

    /// Highest attainable total on this scale.
    pub fn max_score(self) -> u8 {
        match self {
            ScaleKind::Phq9 | ScaleKind::Qids => 27,
            ScaleKind::Hamd => 52,
            ScaleKind::Madrs => 60,
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleKind {
    type Err = CoreError;

    /// Accepts either the id (`hamd`) or the display name (`HAM-D`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleKind::ALL
            .into_iter()
            .find(|k| k.id() == s || k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownScale(s.to_string()))
    }
}
