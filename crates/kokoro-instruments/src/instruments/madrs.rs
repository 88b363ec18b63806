use kokoro_core::models::scale::ScaleKind;

use super::total_only_domain;
use crate::Instrument;
use crate::scoring::{Domain, SeverityBand, palette};

/// MADRS: Montgomery–Åsberg Depression Rating Scale. Total 0–60.
pub struct Madrs;

impl Instrument for Madrs {
    fn scale(&self) -> ScaleKind {
        ScaleKind::Madrs
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![total_only_domain(
                "madrs_total",
                "MADRS Total",
                60,
                "0-6: normal, 7-19: mild, 20-34: moderate, 35+: severe",
            )]
        });
        &DOMAINS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::new(0, 6, "Normal", palette::GREEN),
                SeverityBand::new(7, 19, "Mild", palette::YELLOW),
                SeverityBand::new(20, 34, "Moderate", palette::ORANGE),
                SeverityBand::new(35, 60, "Severe", palette::RED),
            ]
        });
        &BANDS
    }
}
