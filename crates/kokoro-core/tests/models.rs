use jiff::civil::date;
use kokoro_core::models::observation::{
    ItemizedObservation, Observation, Phq9Items, SimpleObservation,
};
use kokoro_core::models::persona::{Persona, PersonaKind};
use kokoro_core::models::scale::ScaleKind;
use kokoro_core::models::scenario::{Horizon, OutcomeScenario, Projection, ScenarioKind};

#[test]
fn items_array_conversion_preserves_order() {
    let values = [3, 2, 1, 0, 1, 2, 3, 1, 0];
    let items = Phq9Items::from_array(values);
    assert_eq!(items.anhedonia, 3);
    assert_eq!(items.suicidal_ideation, 0);
    assert_eq!(items.as_array(), values);
    assert_eq!(items.sum(), 13);
}

#[test]
fn observation_variants_share_date_and_total() {
    let itemized: Observation = ItemizedObservation {
        date: date(2024, 1, 13),
        items: Phq9Items::from_array([2, 1, 1, 1, 1, 1, 1, 2, 0]),
        total: 10,
    }
    .into();
    let simple: Observation = SimpleObservation {
        date: date(2024, 1, 13),
        total: 13,
    }
    .into();

    assert_eq!(itemized.date(), simple.date());
    assert_eq!(itemized.total(), 10);
    assert_eq!(simple.total(), 13);
    assert!(itemized.items().is_some());
    assert!(simple.items().is_none());
    assert_eq!(itemized.to_simple().total, 10);
}

#[test]
fn observation_serializes_with_kind_tag_and_iso_date() {
    let obs: Observation = SimpleObservation {
        date: date(2023, 11, 4),
        total: 16,
    }
    .into();
    let json = serde_json::to_value(&obs).unwrap();
    assert_eq!(json["kind"], "simple");
    assert_eq!(json["date"], "2023-11-04");
    assert_eq!(json["total"], 16);
}

#[test]
fn scale_kind_parses_ids_and_names() {
    assert_eq!("hamd".parse::<ScaleKind>().unwrap(), ScaleKind::Hamd);
    assert_eq!("HAM-D".parse::<ScaleKind>().unwrap(), ScaleKind::Hamd);
    assert_eq!("phq-9".parse::<ScaleKind>().unwrap(), ScaleKind::Phq9);
    assert!("bdi".parse::<ScaleKind>().is_err());
    assert_eq!(ScaleKind::Madrs.max_score(), 60);
    assert_eq!(ScaleKind::Qids.max_score(), 27);
}

#[test]
fn scenario_ids_match_serde_names() {
    for kind in ScenarioKind::ALL {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, kind.id());
    }
}

#[test]
fn scenario_projection_by_horizon() {
    let p = |m| Projection {
        median: m,
        low: 0,
        high: m + 3,
    };
    let scenario = OutcomeScenario {
        kind: ScenarioKind::AddCbtI,
        label: ScenarioKind::AddCbtI.label().to_string(),
        week4: p(6),
        week8: p(4),
        week12: p(2),
    };
    let medians: Vec<u8> = Horizon::ALL
        .into_iter()
        .map(|h| scenario.projection(h).median)
        .collect();
    assert_eq!(medians, vec![6, 4, 2]);
}

#[test]
fn persona_carries_archetype_text() {
    let persona = Persona::new(PersonaKind::AnxietyComorbid, 27);
    assert_eq!(persona.probability, 27);
    assert_eq!(persona.name, PersonaKind::AnxietyComorbid.name());
    assert_eq!(persona.characteristics.len(), 3);
}
