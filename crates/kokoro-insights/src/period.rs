//! Trailing time windows for the timeline view.

use std::fmt;
use std::str::FromStr;

use jiff::ToSpan;
use jiff::civil::Date;
use kokoro_core::models::event::TreatmentEvent;
use kokoro_core::models::observation::{ItemizedObservation, Observation, SimpleObservation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InsightError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Period {
    ThreeMonths,
    SixMonths,
    #[default]
    All,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::ThreeMonths, Period::SixMonths, Period::All];

    /// Window length in days, `None` for no limit.
    pub fn days(self) -> Option<i32> {
        match self {
            Period::ThreeMonths => Some(90),
            Period::SixMonths => Some(180),
            Period::All => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::ThreeMonths => "Last 3 months",
            Period::SixMonths => "Last 6 months",
            Period::All => "All time",
        }
    }

    /// Earliest date inside the window ending at `reference`.
    pub fn cutoff(self, reference: Date) -> Option<Date> {
        let days = self.days()?;
        Some(reference.checked_sub(days.days()).unwrap_or(Date::MIN))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InsightError::UnknownPeriod(s.to_string()))
    }
}

/// Anything placed on the timeline.
pub trait Dated {
    fn date(&self) -> Date;
}

impl Dated for ItemizedObservation {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for SimpleObservation {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for Observation {
    fn date(&self) -> Date {
        Observation::date(self)
    }
}

impl Dated for TreatmentEvent {
    fn date(&self) -> Date {
        self.date
    }
}

/// Entries dated on or after the start of `period`, counted back from
/// `reference`. Order is preserved.
pub fn filter_by_period<T: Dated>(items: &[T], period: Period, reference: Date) -> Vec<&T> {
    match period.cutoff(reference) {
        Some(cutoff) => items.iter().filter(|i| i.date() >= cutoff).collect(),
        None => items.iter().collect(),
    }
}
