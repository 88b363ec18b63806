use kokoro_core::models::scale::ScaleKind;

use super::total_only_domain;
use crate::Instrument;
use crate::scoring::{Domain, SeverityBand, palette};

/// HAM-D: Hamilton Depression Rating Scale, clinician-rated. Total 0–52.
pub struct Hamd;

impl Instrument for Hamd {
    fn scale(&self) -> ScaleKind {
        ScaleKind::Hamd
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![total_only_domain(
                "hamd_total",
                "HAM-D Total",
                52,
                "0-7: normal, 8-13: mild, 14-18: moderate, 19-22: severe, 23+: very severe",
            )]
        });
        &DOMAINS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::new(0, 7, "Normal", palette::GREEN),
                SeverityBand::new(8, 13, "Mild", palette::YELLOW),
                SeverityBand::new(14, 18, "Moderate", palette::ORANGE),
                SeverityBand::new(19, 22, "Severe", palette::RED),
                SeverityBand::new(23, 52, "Very severe", palette::DARK_RED),
            ]
        });
        &BANDS
    }
}
