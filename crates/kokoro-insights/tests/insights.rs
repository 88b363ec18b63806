use jiff::civil::date;
use kokoro_core::models::patient::{Classification, Gender, PatientId};
use kokoro_core::models::scale::ScaleKind;
use kokoro_core::models::summary::PatientSummary;
use kokoro_insights::{
    InsightError, Period, Phase, filter_by_period, improvement, phase_comparison,
    prognosis_series, score_cards, search_summaries, top_persona,
};
use kokoro_synth::generate;

#[test]
fn score_cards_for_patient_one() {
    let cards = score_cards(&generate(1));
    let observed: Vec<(ScaleKind, u8, Option<u8>, Option<i16>, &str)> = cards
        .iter()
        .map(|c| {
            (
                c.scale,
                c.latest,
                c.previous,
                c.change,
                c.severity.as_ref().map(|b| b.label.as_str()).unwrap_or(""),
            )
        })
        .collect();
    assert_eq!(
        observed,
        [
            (ScaleKind::Phq9, 2, Some(4), Some(-2), "Minimal"),
            (ScaleKind::Qids, 1, Some(4), Some(-3), "None"),
            (ScaleKind::Hamd, 3, Some(6), Some(-3), "Normal"),
            (ScaleKind::Madrs, 2, Some(5), Some(-3), "Normal"),
        ]
    );
    assert_eq!(cards[2].max_score, 52);
}

#[test]
fn improvement_percent_rounds_half_up() {
    let result = improvement(&generate(1)).unwrap();
    assert_eq!(result.baseline, 18);
    assert_eq!(result.latest, 2);
    assert_eq!(result.points, -16);
    assert_eq!(result.percent, 89);
}

#[test]
fn worsening_shows_negative_improvement() {
    let mut record = generate(1);
    record.phq9.last_mut().unwrap().total = 27;
    let result = improvement(&record).unwrap();
    assert_eq!(result.points, 9);
    assert_eq!(result.percent, -50);

    record.phq9[0].total = 0;
    assert_eq!(improvement(&record).unwrap().percent, 0);
}

#[test]
fn top_persona_prefers_first_on_ties() {
    let mut record = generate(1);
    assert_eq!(top_persona(&record).unwrap().probability, 65);

    record.personas[0].probability = 40;
    record.personas[1].probability = 40;
    record.personas[2].probability = 20;
    let top = top_persona(&record).unwrap();
    assert_eq!(top.kind, record.personas[0].kind);
}

#[test]
fn phases_split_on_treatment_events() {
    let comparison = phase_comparison(&generate(1)).unwrap();
    assert_eq!(comparison.before_end, date(2023, 11, 18));
    assert_eq!(comparison.during_end, date(2023, 12, 30));

    let before = comparison.summary(Phase::Before).unwrap();
    assert_eq!(before.count, 2);
    assert_eq!(before.average, 18.0);
    assert_eq!(
        before.item_averages,
        [3.0, 2.5, 2.5, 2.5, 1.5, 2.0, 2.0, 1.0, 1.0]
    );

    let during = comparison.summary(Phase::During).unwrap();
    assert_eq!(during.count, 3);
    assert_eq!(during.average, 13.3);

    let after = comparison.summary(Phase::After).unwrap();
    assert_eq!(after.count, 7);
    assert_eq!(after.average, 6.4);

    assert_eq!(comparison.phase_of(date(2023, 12, 30)), Phase::During);
    assert_eq!(comparison.phase_of(date(2023, 12, 31)), Phase::After);
}

#[test]
fn phases_fall_back_to_thirds_without_events() {
    let mut record = generate(1);
    record.treatment_events.clear();
    let comparison = phase_comparison(&record).unwrap();

    assert_eq!(comparison.before_end, record.phq9[4].date);
    assert_eq!(comparison.during_end, record.phq9[8].date);
    let counts: Vec<usize> = comparison.phases.iter().map(|p| p.count).collect();
    assert_eq!(counts, [5, 4, 3]);
    assert_eq!(comparison.phases[0].average, 15.2);
    assert_eq!(comparison.phases[1].average, 8.3);
    assert_eq!(comparison.phases[2].average, 4.0);
}

#[test]
fn empty_phases_report_zero() {
    let mut record = generate(1);
    record.treatment_events.clear();
    record.phq9.truncate(1);
    let comparison = phase_comparison(&record).unwrap();

    let after = comparison.summary(Phase::After).unwrap();
    assert_eq!(after.count, 0);
    assert_eq!(after.average, 0.0);
    assert!(after.item_averages.iter().all(|v| *v == 0.0));

    record.phq9.clear();
    assert!(phase_comparison(&record).is_none());
}

#[test]
fn period_windows_count_back_from_reference() {
    let record = generate(1);
    let reference = date(2024, 4, 6);

    assert_eq!(Period::ThreeMonths.cutoff(reference), Some(date(2024, 1, 7)));
    assert_eq!(filter_by_period(&record.phq9, Period::ThreeMonths, reference).len(), 7);
    assert_eq!(filter_by_period(&record.phq9, Period::SixMonths, reference).len(), 12);
    assert_eq!(filter_by_period(&record.phq9, Period::All, reference).len(), 12);

    assert!(filter_by_period(&record.treatment_events, Period::ThreeMonths, reference).is_empty());
    assert_eq!(filter_by_period(&record.treatment_events, Period::All, reference).len(), 3);

    let kept = filter_by_period(&record.qids, Period::ThreeMonths, reference);
    assert_eq!(kept.first().unwrap().date, date(2024, 1, 13));
}

#[test]
fn period_parses_from_key() {
    assert_eq!("3m".parse::<Period>().unwrap(), Period::ThreeMonths);
    assert_eq!(" ALL ".parse::<Period>().unwrap(), Period::All);
    assert!(matches!(
        "1y".parse::<Period>(),
        Err(InsightError::UnknownPeriod(_))
    ));
    assert_eq!(Period::default(), Period::All);
}

#[test]
fn prognosis_starts_from_current_score() {
    let series = prognosis_series(&generate(1), "current").unwrap();
    let observed: Vec<(u8, u8, u8, u8)> = series
        .iter()
        .map(|p| (p.weeks, p.median, p.low, p.high))
        .collect();
    assert_eq!(observed, [(0, 2, 2, 2), (4, 1, 0, 4), (8, 1, 0, 6), (12, 0, 0, 6)]);
    assert_eq!(series[0].label, "Now");
    assert_eq!(series[3].label, "Week 12");
}

#[test]
fn prognosis_rejects_unknown_scenario() {
    assert!(matches!(
        prognosis_series(&generate(1), "surgery"),
        Err(InsightError::UnknownScenario(id)) if id == "surgery"
    ));
}

fn summary(number: u32, name: &str, age_group: &str, gender: Gender) -> PatientSummary {
    PatientSummary {
        id: PatientId::new(number),
        name: name.to_string(),
        latest_phq9: 10,
        age_group: age_group.to_string(),
        gender,
        classification: Classification::Stable,
    }
}

#[test]
fn search_matches_id_name_age_and_gender() {
    let summaries = [
        summary(1, "Yoshida Yoshinori (anonymized)", "40s", Gender::Male),
        summary(2, "Sato Hanako (anonymized)", "30s", Gender::Female),
        summary(12, "Mori Ken (anonymized)", "60s", Gender::Male),
    ];
    let ids = |query: &str| -> Vec<u32> {
        search_summaries(&summaries, query)
            .iter()
            .map(|s| s.id.number())
            .collect()
    };

    assert_eq!(ids(""), [1, 2, 12]);
    assert_eq!(ids("   "), [1, 2, 12]);
    assert_eq!(ids("p01"), [12]);
    assert_eq!(ids("HANAKO"), [2]);
    assert_eq!(ids("40s"), [1]);
    assert_eq!(ids("female"), [2]);
    // Substring match: "male" is part of "female".
    assert_eq!(ids("male"), [1, 2, 12]);
    assert!(ids("anonymized").is_empty());
}

#[test]
fn views_serialize_for_the_dashboard() {
    let record = generate(1);
    let cards = serde_json::to_value(score_cards(&record)).unwrap();
    assert_eq!(cards[0]["scale"], "phq9");
    assert_eq!(cards[0]["severity"]["label"], "Minimal");

    let phases = serde_json::to_value(phase_comparison(&record).unwrap()).unwrap();
    assert_eq!(phases["before_end"], "2023-11-18");
    assert_eq!(phases["phases"][2]["phase"], "after");
}
