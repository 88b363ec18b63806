use kokoro_core::models::observation::Phq9Items;
use kokoro_core::models::scale::ScaleKind;
use kokoro_instruments::error::InstrumentError;
use kokoro_instruments::instruments::phq9::{self, Phq9};
use kokoro_instruments::scoring::ScoreEntry;
use kokoro_instruments::{Instrument, all_instruments, get_instrument, instrument_for, require_instrument};

#[test]
fn every_scale_has_an_instrument() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["phq9", "qids", "hamd", "madrs"]);
    for scale in ScaleKind::ALL {
        assert_eq!(instrument_for(scale).scale(), scale);
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(get_instrument("madrs").unwrap().name(), "MADRS");
    assert!(get_instrument("bdi").is_none());
    assert!(matches!(
        require_instrument("bdi"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "bdi"
    ));
}

#[test]
fn severity_bands_cover_full_range_without_gaps() {
    for instrument in all_instruments() {
        let bands = instrument.severity_bands();
        assert_eq!(bands.first().unwrap().min, 0, "{}", instrument.name());
        assert_eq!(
            bands.last().unwrap().max,
            instrument.scale().max_score(),
            "{}",
            instrument.name()
        );
        for pair in bands.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min, "{}", instrument.name());
        }
        for total in 0..=instrument.scale().max_score() {
            assert!(instrument.severity(total).is_some());
        }
        assert!(instrument.severity(instrument.scale().max_score() + 1).is_none());
    }
}

#[test]
fn phq9_severity_thresholds() {
    let label = |t| Phq9.severity(t).unwrap().label.clone();
    assert_eq!(label(4), "Minimal");
    assert_eq!(label(5), "Mild");
    assert_eq!(label(14), "Moderate");
    assert_eq!(label(19), "Moderately severe");
    assert_eq!(label(20), "Severe");
}

#[test]
fn madrs_has_four_bands() {
    let madrs = instrument_for(ScaleKind::Madrs);
    assert_eq!(madrs.severity_bands().len(), 4);
    assert_eq!(madrs.severity(35).unwrap().label, "Severe");
}

#[test]
fn phq9_item_validation() {
    let items = Phq9Items::from_array([3, 3, 2, 3, 1, 2, 2, 1, 1]);
    assert!(Phq9.validate_scores(&phq9::item_entries(&items)).is_empty());

    let errors = Phq9.validate_scores(&[ScoreEntry {
        subscale_id: "sleep".to_string(),
        value: 4.0,
    }]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].subscale_id, "sleep");
    assert!(errors[0].message.contains("Sleep disturbance"));
}

#[test]
fn fractional_item_scores_are_rejected() {
    let errors = Phq9.validate_scores(&[ScoreEntry {
        subscale_id: "fatigue".to_string(),
        value: 1.5,
    }]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn total_validation_uses_scale_maximum() {
    let hamd = instrument_for(ScaleKind::Hamd);
    assert!(hamd.validate_total(52).is_ok());
    let err = hamd.validate_total(53).unwrap_err();
    assert!(err.to_string().contains("HAM-D"));
    assert!(Phq9.validate_total(28).is_err());
}
