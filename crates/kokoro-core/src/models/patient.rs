use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::event::TreatmentEvent;
use super::observation::{ItemizedObservation, Observation, SimpleObservation};
use super::persona::Persona;
use super::scale::ScaleKind;
use super::scenario::OutcomeScenario;
use super::similar::SimilarPatient;
use super::summary::PatientSummary;
use crate::error::CoreError;
use crate::ids;

/// Patient identifier, `P` plus a zero-padded number (`P001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientId(u32);

impl PatientId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ids::patient(self.0))
    }
}

impl FromStr for PatientId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ids::PATIENT_PREFIX)
            .filter(|d| d.len() >= 3 && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| CoreError::InvalidPatientId(s.to_string()))?;
        digits
            .parse()
            .map(PatientId)
            .map_err(|_| CoreError::InvalidPatientId(s.to_string()))
    }
}

impl TryFrom<String> for PatientId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

/// Trajectory shape, fixed before any score is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    Improver,
    Stable,
    Worsen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub name: String,
    /// Drug class, e.g. `SSRI`.
    pub category: String,
    pub start_date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Psychotherapy {
    #[serde(rename = "type")]
    pub therapy_type: String,
    pub start_date: Date,
    pub frequency: String,
}

/// One complete synthetic longitudinal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    #[ts(type = "string")]
    pub id: PatientId,
    pub name: String,
    pub age_group: String,
    pub gender: Gender,
    pub diagnosis: String,
    pub diagnosis_date: Date,
    pub current_medication: Medication,
    pub psychotherapy: Psychotherapy,
    pub primary_clinician: String,
    pub classification: Classification,
    pub phq9: Vec<ItemizedObservation>,
    pub qids: Vec<SimpleObservation>,
    pub hamd: Vec<SimpleObservation>,
    pub madrs: Vec<SimpleObservation>,
    pub treatment_events: Vec<TreatmentEvent>,
    pub personas: Vec<Persona>,
    pub outcome_scenarios: Vec<OutcomeScenario>,
    pub similar_patients: Vec<SimilarPatient>,
}

impl PatientRecord {
    /// Uniform `{date, total}` view over any of the four scales.
    pub fn observations(&self, scale: ScaleKind) -> Vec<Observation> {
        match scale {
            ScaleKind::Phq9 => self.phq9.iter().cloned().map(Observation::from).collect(),
            ScaleKind::Qids => self.qids.iter().copied().map(Observation::from).collect(),
            ScaleKind::Hamd => self.hamd.iter().copied().map(Observation::from).collect(),
            ScaleKind::Madrs => self.madrs.iter().copied().map(Observation::from).collect(),
        }
    }

    pub fn latest_score(&self, scale: ScaleKind) -> Option<u8> {
        match scale {
            ScaleKind::Phq9 => self.phq9.last().map(|o| o.total),
            ScaleKind::Qids => self.qids.last().map(|o| o.total),
            ScaleKind::Hamd => self.hamd.last().map(|o| o.total),
            ScaleKind::Madrs => self.madrs.last().map(|o| o.total),
        }
    }

    /// First PHQ-9 total.
    pub fn baseline_phq9(&self) -> Option<u8> {
        self.phq9.first().map(|o| o.total)
    }

    pub fn latest_phq9(&self) -> Option<u8> {
        self.latest_score(ScaleKind::Phq9)
    }

    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            id: self.id,
            name: self.name.clone(),
            latest_phq9: self.latest_phq9().unwrap_or_default(),
            age_group: self.age_group.clone(),
            gender: self.gender,
            classification: self.classification,
        }
    }
}
