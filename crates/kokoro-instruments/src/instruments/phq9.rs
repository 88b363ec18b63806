use kokoro_core::models::observation::Phq9Items;
use kokoro_core::models::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::{
    Domain, ScoreEntry, ScoreRange, ScoreType, SeverityBand, Subscale, palette,
};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

/// Item labels, in questionnaire order (matches [`Phq9Items::KEYS`]).
pub const ITEM_LABELS: [&str; Phq9Items::COUNT] = [
    "Little interest or pleasure",
    "Depressed mood",
    "Sleep disturbance",
    "Fatigue",
    "Appetite change",
    "Low self-worth",
    "Poor concentration",
    "Psychomotor change",
    "Suicidal ideation",
];

/// Score entries for the nine items, ready for [`Instrument::validate_scores`].
pub fn item_entries(items: &Phq9Items) -> Vec<ScoreEntry> {
    Phq9Items::KEYS
        .iter()
        .zip(items.as_array())
        .map(|(key, value)| ScoreEntry {
            subscale_id: key.to_string(),
            value: f64::from(value),
        })
        .collect()
}

impl Instrument for Phq9 {
    fn scale(&self) -> ScaleKind {
        ScaleKind::Phq9
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let item_range = ScoreRange {
                min: 0.0,
                max: f64::from(Phq9Items::ITEM_MAX),
                step: Some(1.0),
            };

            let subscales: Vec<Subscale> = Phq9Items::KEYS
                .iter()
                .zip(ITEM_LABELS)
                .map(|(id, name)| Subscale {
                    id: id.to_string(),
                    name: name.to_string(),
                    score_type: ScoreType::Rating,
                    range: item_range,
                    description: None,
                })
                .collect();

            vec![Domain {
                id: "phq9_items".to_string(),
                name: "PHQ-9 Items".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 27.0,
                    step: Some(1.0),
                }),
                description: Some(
                    "0-4: minimal, 5-9: mild, 10-14: moderate, 15-19: moderately severe, 20+: severe"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::new(0, 4, "Minimal", palette::GREEN),
                SeverityBand::new(5, 9, "Mild", palette::YELLOW),
                SeverityBand::new(10, 14, "Moderate", palette::ORANGE),
                SeverityBand::new(15, 19, "Moderately severe", palette::RED),
                SeverityBand::new(20, 27, "Severe", palette::DARK_RED),
            ]
        });
        &BANDS
    }
}
