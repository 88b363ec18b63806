use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Treatment strategies the prognosis view compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScenarioKind {
    Current,
    IncreaseMed,
    AddCbtI,
    SwitchMed,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Current,
        ScenarioKind::IncreaseMed,
        ScenarioKind::AddCbtI,
        ScenarioKind::SwitchMed,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ScenarioKind::Current => "current",
            ScenarioKind::IncreaseMed => "increase_med",
            ScenarioKind::AddCbtI => "add_cbt_i",
            ScenarioKind::SwitchMed => "switch_med",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Current => "Continue current treatment",
            ScenarioKind::IncreaseMed => "Increase dose",
            ScenarioKind::AddCbtI => "Add CBT-I",
            ScenarioKind::SwitchMed => "Switch to another agent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Horizon {
    Week4,
    Week8,
    Week12,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Week4, Horizon::Week8, Horizon::Week12];

    pub fn weeks(self) -> u8 {
        match self {
            Horizon::Week4 => 4,
            Horizon::Week8 => 8,
            Horizon::Week12 => 12,
        }
    }
}

/// Projected PHQ-9 range at one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Projection {
    pub median: u8,
    pub low: u8,
    pub high: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeScenario {
    pub kind: ScenarioKind,
    pub label: String,
    pub week4: Projection,
    pub week8: Projection,
    pub week12: Projection,
}

impl OutcomeScenario {
    pub fn projection(&self, horizon: Horizon) -> Projection {
        match horizon {
            Horizon::Week4 => self.week4,
            Horizon::Week8 => self.week8,
            Horizon::Week12 => self.week12,
        }
    }
}
