use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three qualitative sub-patterns a patient is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PersonaKind {
    InsomniaDominant,
    AnxietyComorbid,
    SocialDysfunction,
}

impl PersonaKind {
    pub const ALL: [PersonaKind; 3] = [
        PersonaKind::InsomniaDominant,
        PersonaKind::AnxietyComorbid,
        PersonaKind::SocialDysfunction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PersonaKind::InsomniaDominant => "Insomnia-dominant",
            PersonaKind::AnxietyComorbid => "Anxiety-comorbid",
            PersonaKind::SocialDysfunction => "Social dysfunction",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PersonaKind::InsomniaDominant => {
                "Sleep disturbance is the leading symptom, with fatigue and poor concentration"
            }
            PersonaKind::AnxietyComorbid => {
                "Co-occurring anxiety symptoms with avoidance behaviour"
            }
            PersonaKind::SocialDysfunction => {
                "Loss of functioning at work and in relationships is in the foreground"
            }
        }
    }

    pub fn characteristics(self) -> &'static [&'static str] {
        match self {
            PersonaKind::InsomniaDominant => &[
                "Marked initial and middle insomnia",
                "Daytime fatigue and reduced concentration",
                "Responds well to sleep-focused CBT components",
            ],
            PersonaKind::AnxietyComorbid => &[
                "Comorbid generalised or social anxiety",
                "Social withdrawal driven by avoidance",
                "Good response to SSRIs",
            ],
            PersonaKind::SocialDysfunction => &[
                "Difficulty returning to work and maintaining relationships",
                "Strong self-blame and low self-worth",
                "Interpersonal therapy (IPT) tends to help",
            ],
        }
    }

    pub fn recommended_approach(self) -> &'static str {
        match self {
            PersonaKind::InsomniaDominant => "Consider adding CBT for insomnia (CBT-I)",
            PersonaKind::AnxietyComorbid => "Consider strengthening anxiety-focused CBT elements",
            PersonaKind::SocialDysfunction => {
                "Interpersonal therapy (IPT) or graded activity scheduling"
            }
        }
    }
}

/// A persona archetype with the probability (0–100) assigned to this patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Persona {
    pub kind: PersonaKind,
    pub name: String,
    pub probability: u8,
    pub description: String,
    pub characteristics: Vec<String>,
    pub recommended_approach: String,
}

impl Persona {
    pub fn new(kind: PersonaKind, probability: u8) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            probability,
            description: kind.description().to_string(),
            characteristics: kind
                .characteristics()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            recommended_approach: kind.recommended_approach().to_string(),
        }
    }
}
