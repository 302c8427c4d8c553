use serde_json::json;
use urodyn_core::error::CoreError;
use urodyn_core::models::diagnosis::{Confidence, Diagnosis};
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::provocation::ProvocationResult;
use urodyn_core::models::vocabulary::{History, Symptom};

#[test]
fn sex_serializes_as_single_letter() {
    assert_eq!(serde_json::to_value(Sex::Male).unwrap(), "M");
    assert_eq!(serde_json::to_value(Sex::Female).unwrap(), "F");
    assert_eq!(Sex::Male.opposite(), Sex::Female);
}

#[test]
fn enums_use_snake_case() {
    assert_eq!(
        serde_json::to_value(Diagnosis::BenignProstaticObstruction).unwrap(),
        "benign_prostatic_obstruction"
    );
    assert_eq!(serde_json::to_value(Confidence::Moderate).unwrap(), "moderate");
    assert_eq!(
        serde_json::to_value(ProvocationResult::StrongPositive).unwrap(),
        "strong_positive"
    );
}

#[test]
fn record_round_trips_through_json() {
    let mut m = PatientMeasurement::default();
    m.patient_name = "Test".to_string();
    m.symptoms = vec![Symptom::Urgency];
    m.history = vec![History::Bph];

    let text = serde_json::to_string(&m).unwrap();
    assert_eq!(PatientMeasurement::from_json(&text).unwrap(), m);
}

#[test]
fn tag_lists_default_to_empty() {
    let mut value = serde_json::to_value(PatientMeasurement::default()).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("symptoms");
    obj.remove("history");
    obj.remove("treatments");

    let m: PatientMeasurement = serde_json::from_value(value).unwrap();
    assert!(m.symptoms.is_empty());
    assert!(m.history.is_empty());
    assert!(m.treatments.is_empty());
}

#[test]
fn malformed_record_is_a_serialization_error() {
    let err = PatientMeasurement::from_json("{\"age\": 40}").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn merge_replaces_whole_sections() {
    let base = PatientMeasurement::default();
    let merged = base
        .merged_with(&json!({
            "sex": "F",
            "symptoms": ["urgency"],
            "flow": {
                "peak_flow": 22.0,
                "mean_flow": 15.0,
                "voided_volume": 350.0,
                "voiding_time": 24.0,
                "latency_time": 2.0,
                "curve_shape": "normal"
            }
        }))
        .unwrap();

    assert_eq!(merged.sex, Sex::Female);
    assert_eq!(merged.symptoms, vec![Symptom::Urgency]);
    assert_eq!(merged.flow.peak_flow, 22.0);
    // Omitted inside the replaced section, so not carried over from the base.
    assert_eq!(merged.flow.time_to_peak_flow, None);
    // Untouched sections stay as they were.
    assert_eq!(merged.cystometry, base.cystometry);
    assert_eq!(merged.age, base.age);
}

#[test]
fn merge_rejects_non_object_fragment() {
    let err = PatientMeasurement::default()
        .merged_with(&json!(["flow"]))
        .unwrap_err();
    assert!(matches!(err, CoreError::NotAnObject));
}

#[test]
fn merge_rejects_incomplete_section() {
    let err = PatientMeasurement::default()
        .merged_with(&json!({ "flow": { "peak_flow": 10.0 } }))
        .unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn tag_helpers() {
    let mut m = PatientMeasurement::default();
    m.symptoms = vec![Symptom::WeakStream];
    m.history = vec![History::Stroke];

    assert!(m.has_symptom(Symptom::WeakStream));
    assert!(!m.has_symptom(Symptom::Urgency));
    assert!(m.has_history(History::Stroke));
    assert!(m.any_symptom(Symptom::is_obstructive));
    assert!(m.any_history(History::is_neurological));
    assert!(!m.any_history(History::is_prolapse_related));
}
