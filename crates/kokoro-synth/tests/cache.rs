use kokoro_core::models::patient::PatientId;
use kokoro_synth::error::SynthError;
use kokoro_synth::{PatientCache, Selection};

#[test]
fn population_is_generated_once() {
    let cache = PatientCache::new();
    assert!(!cache.is_initialized());

    let first = cache.all_patients();
    assert!(cache.is_initialized());
    let second = cache.all_patients();

    assert_eq!(first.len(), 100);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn summaries_follow_population_order() {
    let cache = PatientCache::new();
    let summaries = cache.patient_summaries();
    let records = cache.all_patients();

    assert_eq!(summaries.len(), records.len());
    for (summary, record) in summaries.iter().zip(records) {
        assert_eq!(summary.id, record.id);
        assert_eq!(summary.name, record.name);
        assert_eq!(Some(summary.latest_phq9), record.phq9.last().map(|p| p.total));
        assert_eq!(summary.classification, record.classification);
    }
}

#[test]
fn lookup_by_id() {
    let cache = PatientCache::with_size(10).unwrap();
    assert_eq!(cache.get(PatientId::new(3)).unwrap().id.to_string(), "P003");
    assert_eq!(cache.find("P010").unwrap().id.number(), 10);
    assert!(cache.find("P011").is_none());
    assert!(cache.find("P000").is_none());
    assert!(cache.find("nonsense").is_none());
    assert!(matches!(
        cache.require("P042"),
        Err(SynthError::UnknownPatient(id)) if id == "P042"
    ));
}

#[test]
fn unknown_ids_select_the_first_record() {
    let cache = PatientCache::with_size(5).unwrap();
    assert_eq!(cache.select("P004").id.number(), 4);
    assert_eq!(cache.select("P999").id.number(), 1);
    assert_eq!(cache.select("").id.number(), 1);
}

#[test]
fn single_patient_population_falls_back_to_itself() {
    let cache = PatientCache::with_size(1).unwrap();
    assert_eq!(cache.size(), 1);
    assert_eq!(cache.first().id.number(), 1);
    assert!(std::ptr::eq(cache.select("P002"), cache.first()));
    assert_eq!(cache.all_patients().len(), 1);
}

#[test]
fn default_population_size() {
    assert_eq!(PatientCache::new().size(), 100);
}

#[test]
fn empty_population_is_rejected() {
    assert!(matches!(
        PatientCache::with_size(0),
        Err(SynthError::EmptyPopulation)
    ));
}

#[test]
fn cache_is_shareable_across_threads() {
    let cache = PatientCache::with_size(20).unwrap();
    let lengths: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| cache.all_patients().len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(lengths, [20; 4]);
}

#[test]
fn selection_tracks_current_record() {
    let cache = PatientCache::with_size(8).unwrap();
    let mut selection = Selection::new(&cache);
    assert_eq!(selection.current().id.number(), 1);

    let record = selection.select("P007");
    assert_eq!(record.id.number(), 7);
    assert_eq!(selection.selected_id(), PatientId::new(7));
    assert_eq!(selection.current().id.number(), 7);

    selection.select("P123");
    assert_eq!(selection.current().id.number(), 1);
    assert_eq!(selection.summaries().len(), 8);
}
