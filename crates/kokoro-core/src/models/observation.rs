use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The nine PHQ-9 item sub-scores, each 0–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Items {
    pub anhedonia: u8,
    pub depressed_mood: u8,
    pub sleep: u8,
    pub fatigue: u8,
    pub appetite: u8,
    pub self_worth: u8,
    pub concentration: u8,
    pub psychomotor: u8,
    pub suicidal_ideation: u8,
}

impl Phq9Items {
    pub const COUNT: usize = 9;

    pub const ITEM_MAX: u8 = 3;

    /// Item keys in questionnaire order.
    pub const KEYS: [&'static str; Self::COUNT] = [
        "anhedonia",
        "depressed_mood",
        "sleep",
        "fatigue",
        "appetite",
        "self_worth",
        "concentration",
        "psychomotor",
        "suicidal_ideation",
    ];

    pub fn from_array(values: [u8; Self::COUNT]) -> Self {
        let [
            anhedonia,
            depressed_mood,
            sleep,
            fatigue,
            appetite,
            self_worth,
            concentration,
            psychomotor,
            suicidal_ideation,
        ] = values;
        Self {
            anhedonia,
            depressed_mood,
            sleep,
            fatigue,
            appetite,
            self_worth,
            concentration,
            psychomotor,
            suicidal_ideation,
        }
    }

    pub fn as_array(&self) -> [u8; Self::COUNT] {
        [
            self.anhedonia,
            self.depressed_mood,
            self.sleep,
            self.fatigue,
            self.appetite,
            self.self_worth,
            self.concentration,
            self.psychomotor,
            self.suicidal_ideation,
        ]
    }

    pub fn sum(&self) -> u32 {
        self.as_array().iter().map(|&v| u32::from(v)).sum()
    }
}

/// A dated PHQ-9 administration with its item breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemizedObservation {
    pub date: Date,
    pub items: Phq9Items,
    pub total: u8,
}

/// A dated total-only score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimpleObservation {
    pub date: Date,
    pub total: u8,
}

/// Any scale observation. Both variants project to `{date, total}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Observation {
    Itemized(ItemizedObservation),
    Simple(SimpleObservation),
}

impl Observation {
    pub fn date(&self) -> Date {
        match self {
            Observation::Itemized(o) => o.date,
            Observation::Simple(o) => o.date,
        }
    }

    pub fn total(&self) -> u8 {
        match self {
            Observation::Itemized(o) => o.total,
            Observation::Simple(o) => o.total,
        }
    }

    pub fn items(&self) -> Option<&Phq9Items> {
        match self {
            Observation::Itemized(o) => Some(&o.items),
            Observation::Simple(_) => None,
        }
    }

    /// Drop the item breakdown, keeping only the shared projection.
    pub fn to_simple(&self) -> SimpleObservation {
        SimpleObservation {
            date: self.date(),
            total: self.total(),
        }
    }
}

impl From<ItemizedObservation> for Observation {
    fn from(o: ItemizedObservation) -> Self {
        Observation::Itemized(o)
    }
}

impl From<SimpleObservation> for Observation {
    fn from(o: SimpleObservation) -> Self {
        Observation::Simple(o)
    }
}
