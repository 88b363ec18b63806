//! Fixed lookup tables the generator draws from.
//!
//! Table order is part of the generated output: a record picks entries by
//! position, so reordering or resizing a table changes every patient.

pub const SURNAMES: [&str; 20] = [
    "Tanaka", "Suzuki", "Sato", "Ito", "Yamada", "Nakamura", "Kobayashi", "Kato", "Yoshida",
    "Yamaguchi", "Matsumoto", "Inoue", "Kimura", "Hayashi", "Saito", "Shimizu", "Yamazaki", "Mori",
    "Abe", "Ikeda",
];

pub const FEMALE_GIVEN_NAMES: [&str; 20] = [
    "Hanako", "Yoko", "Keiko", "Misaki", "Ai", "Chie", "Naomi", "Yumi", "Sachiko", "Hiroko",
    "Sakura", "Rika", "Natsumi", "Yuko", "Manami", "Akiko", "Rie", "Tomoko", "Satomi", "Saki",
];

pub const MALE_GIVEN_NAMES: [&str; 20] = [
    "Taro", "Ichiro", "Ken", "Makoto", "Hiroshi", "Yosuke", "Daisuke", "Manabu", "Takashi",
    "Hiromu", "Yuichi", "Kazuya", "Shinji", "Yoshinori", "Masaki", "Hideaki", "Ryuji", "Mitsuo",
    "Katsuto", "Takuya",
];

pub const CLINICIANS: [&str; 5] = [
    "Dr. Yamada",
    "Dr. Suzuki",
    "Dr. Tanaka",
    "Dr. Sasaki",
    "Dr. Takahashi",
];

pub const AGE_GROUPS: [&str; 5] = ["20s", "30s", "40s", "50s", "60s"];

/// An antidepressant the generator can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationOption {
    pub name: &'static str,
    pub category: &'static str,
    /// Event detail for the dose increase.
    pub increase: &'static str,
}

pub const MEDICATIONS: [MedicationOption; 4] = [
    MedicationOption {
        name: "Escitalopram",
        category: "SSRI",
        increase: "Escitalopram increased to 10 mg",
    },
    MedicationOption {
        name: "Sertraline",
        category: "SSRI",
        increase: "Sertraline increased to 100 mg",
    },
    MedicationOption {
        name: "Duloxetine",
        category: "SNRI",
        increase: "Duloxetine increased to 60 mg",
    },
    MedicationOption {
        name: "Venlafaxine",
        category: "SNRI",
        increase: "Venlafaxine increased to 150 mg",
    },
];

pub const THERAPY_TYPES: [&str; 4] = [
    "Cognitive behavioural therapy (CBT)",
    "Interpersonal therapy (IPT)",
    "Supportive psychotherapy",
    "Mindfulness-based cognitive therapy (MBCT)",
];

pub const THERAPY_FREQUENCY: &str = "weekly";

pub const DIAGNOSES: [&str; 4] = [
    "Major depressive disorder, moderate",
    "Major depressive disorder, severe",
    "Major depressive disorder, mild",
    "Persistent depressive disorder",
];

pub const SIMILAR_PATTERNS: [&str; 5] = [
    "SSRI + CBT",
    "SSRI only",
    "SNRI + CBT",
    "CBT only",
    "SNRI + supportive therapy",
];
