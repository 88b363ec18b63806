use kokoro_core::ids;
use kokoro_core::models::patient::PatientId;

#[test]
fn patient_ids_are_zero_padded() {
    assert_eq!(ids::patient(1), "P001");
    assert_eq!(ids::patient(42), "P042");
    assert_eq!(ids::patient(100), "P100");
    assert_eq!(PatientId::new(7).to_string(), "P007");
}

#[test]
fn patient_id_parses_its_own_display_form() {
    let id: PatientId = "P042".parse().unwrap();
    assert_eq!(id.number(), 42);
    assert_eq!(id, PatientId::new(42));
}

#[test]
fn patient_id_rejects_malformed_input() {
    for bad in ["", "P", "P1", "P01", "042", "X042", "P04a", "p042"] {
        assert!(bad.parse::<PatientId>().is_err(), "{bad} should not parse");
    }
}

#[test]
fn patient_id_serializes_as_string() {
    let json = serde_json::to_string(&PatientId::new(3)).unwrap();
    assert_eq!(json, "\"P003\"");

    let back: PatientId = serde_json::from_str("\"P099\"").unwrap();
    assert_eq!(back.number(), 99);
    assert!(serde_json::from_str::<PatientId>("\"nope\"").is_err());
}

#[test]
fn display_name_round_trips_through_strip() {
    let name = ids::display_name("Tanaka", "Hanako");
    assert_eq!(name, "Tanaka Hanako (anonymized)");
    assert_eq!(ids::strip_anonymized(&name), "Tanaka Hanako");
    assert_eq!(ids::strip_anonymized("Plain Name"), "Plain Name");
}

#[test]
fn anonymous_ids_use_pt_prefix() {
    assert_eq!(ids::anonymous(2806), "PT-2806");
}
