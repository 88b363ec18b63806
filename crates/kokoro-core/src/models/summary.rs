use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::{Classification, Gender, PatientId};

/// The slice of a record needed by list and search views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSummary {
    #[ts(type = "string")]
    pub id: PatientId,
    pub name: String,
    pub latest_phq9: u8,
    pub age_group: String,
    pub gender: Gender,
    pub classification: Classification,
}
