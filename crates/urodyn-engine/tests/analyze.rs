use urodyn_core::models::diagnosis::{AbramsGriffithsZone, Diagnosis, SchaferZone};
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::vocabulary::{History, Symptom};
use urodyn_engine::{CriticalAlert, Engine, EngineError, Thresholds, analyze};

#[test]
fn benign_prostatic_obstruction_end_to_end() {
    let mut m = PatientMeasurement {
        patient_name: "Scenario A".to_string(),
        age: 72,
        history: vec![History::Bph],
        symptoms: vec![Symptom::WeakStream],
        ..PatientMeasurement::default()
    };
    m.flow.peak_flow = 8.0;
    m.flow.mean_flow = 5.0;
    m.pressure_flow.detrusor_pressure_at_peak_flow = 65.0;

    let result = analyze(&m);
    assert!(result.is_trustworthy(), "{:?}", result.validation.errors);
    assert_eq!(result.diagnosis, Diagnosis::BenignProstaticObstruction);
    assert_eq!(result.diagnosis_label, "benign prostatic obstruction");
    assert_eq!(result.indices.obstruction_index, 49.0);
    assert_eq!(result.nomograms.schafer, SchaferZone::StrongObstruction);
    assert_eq!(result.nomograms.abrams_griffiths, AbramsGriffithsZone::Obstructed);
    assert!(result.recommendations.iter().any(|r| r.label.contains("TURP")));
    assert!(result.critical_alerts.is_empty());
}

#[test]
fn measurement_snapshot_carries_derived_indices() {
    let m = PatientMeasurement::default();
    let result = analyze(&m);

    assert_eq!(m.pressure_flow.obstruction_index, None);
    assert_eq!(result.measurement.pressure_flow.obstruction_index, Some(-5.0));
    assert_eq!(result.measurement.pressure_flow.contractility_index, Some(100.0));
    assert_eq!(result.measurement.patient_name, m.patient_name);
}

#[test]
fn incoherent_record_is_still_analysed() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 50.0;
    m.cystometry.detrusor_pressure = 30.0;
    m.cystometry.abdominal_pressure = 15.0;

    let result = analyze(&m);
    assert!(!result.is_trustworthy());
    assert!(result.validation.errors[0].starts_with("Calculation error"));
    assert_eq!(result.diagnosis, Diagnosis::Normal);
    assert_eq!(result.surveillance.len(), 1);
}

#[test]
fn high_residual_alert_regardless_of_diagnosis_and_validation() {
    let mut m = PatientMeasurement {
        sex: Sex::Female,
        post_void_residual: 250.0,
        symptoms: vec![Symptom::MixedLeakage],
        ..PatientMeasurement::default()
    };
    m.flow.voided_volume = 200.0;

    let result = analyze(&m);
    assert!(!result.is_trustworthy());
    assert!(result.diagnosis.is_mixed());
    assert_eq!(
        result.critical_alerts[0],
        CriticalAlert::HighResidual.message()
    );
}

#[test]
fn analysis_is_idempotent() {
    let mut m = PatientMeasurement {
        sex: Sex::Female,
        symptoms: vec![Symptom::StressIncontinence, Symptom::Urgency],
        ..PatientMeasurement::default()
    };
    m.urethral_profile.urethral_length = 40.0;
    m.cystometry.involuntary_contractions = true;
    m.urethral_profile.closure_pressure = 15.0;

    let first = analyze(&m);
    let second = analyze(&m);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.diagnosis, Diagnosis::MixedDetrusorSphincteric);
}

#[test]
fn zero_flow_serializes_missing_ratios_as_null() {
    let mut m = PatientMeasurement::default();
    m.flow.peak_flow = 0.0;
    m.flow.mean_flow = 0.0;

    let result = analyze(&m);
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["indices"]["urethral_resistance"].is_null());
    assert!(json["indices"]["flow_ratio"].is_null());
    assert_eq!(json["indices"]["obstruction_index"], 25.0);
}

#[test]
fn engine_rejects_invalid_thresholds() {
    let negative = Thresholds {
        vesical_pressure_epsilon: -1.0,
        ..Thresholds::default()
    };
    assert!(matches!(
        Engine::new(negative),
        Err(EngineError::InvalidThreshold {
            name: "vesical_pressure_epsilon",
            ..
        })
    ));

    let nan = Thresholds {
        confidence_pressure_tolerance: f64::NAN,
        ..Thresholds::default()
    };
    assert!(Engine::new(nan).is_err());
    assert!(Engine::new(Thresholds::default()).is_ok());
}

#[test]
fn engine_uses_its_thresholds() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 47.0;

    assert!(!analyze(&m).is_trustworthy());

    let engine = Engine::new(Thresholds {
        vesical_pressure_epsilon: 2.0,
        confidence_pressure_tolerance: 5.0,
    })
    .unwrap();
    let result = engine.analyze(&m);
    assert!(result.is_trustworthy());
    assert_eq!(engine.thresholds().vesical_pressure_epsilon, 2.0);
}

#[test]
fn thresholds_deserialize_with_defaults() {
    let thresholds: Thresholds =
        serde_json::from_str(r#"{"vesical_pressure_epsilon": 0.5}"#).unwrap();
    assert_eq!(thresholds.vesical_pressure_epsilon, 0.5);
    assert_eq!(thresholds.confidence_pressure_tolerance, 5.0);
}
