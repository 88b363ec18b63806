pub mod hamd;
pub mod madrs;
pub mod phq9;
pub mod qids;

use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};

/// A domain holding only the scale total, for scales recorded without an
/// item breakdown.
pub(crate) fn total_only_domain(id: &str, name: &str, max: u8, description: &str) -> Domain {
    let range = ScoreRange {
        min: 0.0,
        max: f64::from(max),
        step: Some(1.0),
    };
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales: vec![Subscale {
            id: "total".to_string(),
            name: "Total".to_string(),
            score_type: ScoreType::Raw,
            range,
            description: None,
        }],
        composite_score_type: Some(ScoreType::Raw),
        composite_range: Some(range),
        description: Some(description.to_string()),
    }
}
