use kokoro_core::models::scale::ScaleKind;

use super::total_only_domain;
use crate::Instrument;
use crate::scoring::{Domain, SeverityBand, palette};

/// QIDS: Quick Inventory of Depressive Symptomatology. Total 0–27.
pub struct Qids;

impl Instrument for Qids {
    fn scale(&self) -> ScaleKind {
        ScaleKind::Qids
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![total_only_domain(
                "qids_total",
                "QIDS Total",
                27,
                "0-5: none, 6-10: mild, 11-15: moderate, 16-20: severe, 21+: very severe",
            )]
        });
        &DOMAINS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::new(0, 5, "None", palette::GREEN),
                SeverityBand::new(6, 10, "Mild", palette::YELLOW),
                SeverityBand::new(11, 15, "Moderate", palette::ORANGE),
                SeverityBand::new(16, 20, "Severe", palette::RED),
                SeverityBand::new(21, 27, "Very severe", palette::DARK_RED),
            ]
        });
        &BANDS
    }
}
