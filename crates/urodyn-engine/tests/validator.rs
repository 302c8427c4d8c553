use urodyn_core::models::emg::DetrusorSphincterSynergy;
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::vocabulary::{History, Symptom, Treatment};
use urodyn_engine::validator::{DYSSYNERGIA_WITHOUT_NEURO_HISTORY, validate_with};
use urodyn_engine::{Engine, Thresholds, filter_transient_warnings, validate};

fn female() -> PatientMeasurement {
    let mut m = PatientMeasurement {
        sex: Sex::Female,
        ..PatientMeasurement::default()
    };
    m.urethral_profile.urethral_length = 40.0;
    m
}

#[test]
fn default_record_is_coherent() {
    let report = validate(&PatientMeasurement::default());
    assert!(report.coherent);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn coherent_female_record_has_no_errors() {
    let report = validate(&female());
    assert!(report.coherent, "{:?}", report.errors);
}

#[test]
fn vesical_pressure_mismatch_is_an_error() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 50.0;
    m.cystometry.detrusor_pressure = 30.0;
    m.cystometry.abdominal_pressure = 15.0;

    let report = validate(&m);
    assert!(!report.coherent);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Pves (50)"));
    assert!(report.errors[0].contains("Pdet (30)"));
    assert!(report.errors[0].contains("Pabd (15)"));
}

#[test]
fn vesical_pressure_epsilon_is_honoured() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 46.0;

    assert!(!validate(&m).coherent);

    let loose = Thresholds {
        vesical_pressure_epsilon: 1.0,
        ..Thresholds::default()
    };
    assert!(validate_with(&m, &loose).coherent);
    assert!(Engine::new(loose).unwrap().validate(&m).coherent);
}

#[test]
fn arithmetic_invariants_each_report_an_error() {
    let mut m = PatientMeasurement::default();
    m.flow.mean_flow = 20.0;
    m.flow.peak_flow = 15.0;
    m.urethral_profile.closure_pressure = 70.0;
    m.urethral_profile.max_urethral_pressure = 60.0;
    m.urethral_profile.functional_length = 210.0;
    m.post_void_residual = 350.0;
    m.flow.time_to_peak_flow = Some(40.0);
    m.cystometry.first_desire = 500.0;
    m.cystometry.normal_desire = 450.0;

    let report = validate(&m);
    assert!(!report.coherent);
    assert_eq!(report.errors.len(), 7, "{:?}", report.errors);
    assert!(report.errors.iter().any(|e| e.contains("mean flow")));
    assert!(report.errors.iter().any(|e| e.contains("closure pressure")));
    assert!(report.errors.iter().any(|e| e.contains("functional length")));
    assert!(report.errors.iter().any(|e| e.contains("post-void residual")));
    assert!(report.errors.iter().any(|e| e.contains("time to peak flow")));
    assert!(report.errors.iter().any(|e| e.contains("first desire")));
    assert!(report.errors.iter().any(|e| e.contains("normal desire")));
}

#[test]
fn missing_time_to_peak_is_not_checked() {
    let mut m = PatientMeasurement::default();
    m.flow.time_to_peak_flow = None;
    assert!(validate(&m).coherent);
}

#[test]
fn cross_sex_history_is_an_error() {
    let mut m = PatientMeasurement::default();
    m.history = vec![History::Hysterectomy, History::Stroke, History::Menopause];

    let report = validate(&m);
    assert!(!report.coherent);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Hysterectomy, Menopause"));
    assert!(!report.errors[0].contains("Stroke"));
}

#[test]
fn cross_sex_symptoms_and_treatments_are_warnings() {
    let mut m = female();
    m.symptoms = vec![Symptom::Prostatism, Symptom::Urgency];
    m.treatments = vec![Treatment::FiveAlphaReductaseInhibitors, Treatment::Pessary];

    let report = validate(&m);
    assert!(report.coherent);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("Prostatism"));
    assert!(report.warnings[1].contains("5-alpha-reductase inhibitors"));
    assert!(!report.warnings[1].contains("Pessary"));
}

#[test]
fn urethral_length_is_bounded_by_sex() {
    let mut male = PatientMeasurement::default();
    male.urethral_profile.urethral_length = 140.0;
    male.urethral_profile.functional_length = 20.0;
    assert!(!validate(&male).coherent);

    let mut woman = female();
    woman.urethral_profile.urethral_length = 70.0;
    assert!(!validate(&woman).coherent);
}

#[test]
fn urethral_pressure_out_of_sex_range_is_a_warning() {
    let mut m = female();
    m.urethral_profile.max_urethral_pressure = 130.0;

    let report = validate(&m);
    assert!(report.coherent);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("130"));
}

#[test]
fn plausibility_limits_raise_warnings_only() {
    let mut m = PatientMeasurement::default();
    m.flow.peak_flow = 4.0;
    m.flow.mean_flow = 3.0;
    m.cystometry.compliance = 8.0;
    m.post_void_residual = 150.0;
    m.pressure_flow.detrusor_pressure_at_peak_flow = 110.0;
    m.flow.voiding_time = 130.0;

    let report = validate(&m);
    assert!(report.coherent, "{:?}", report.errors);
    assert_eq!(report.warnings.len(), 5, "{:?}", report.warnings);
}

#[test]
fn dyssynergia_alone_adds_no_warning() {
    let mut m = PatientMeasurement::default();
    m.emg.synergy = DetrusorSphincterSynergy::Dyssynergia;

    let report = validate(&m);
    assert!(report.coherent);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    m.history = vec![History::SpinalCordInjury];
    assert!(validate(&m).warnings.is_empty());
}

#[test]
fn transient_warnings_are_filtered() {
    let warnings = vec![
        "High post-void residual (150ml): suggests incomplete emptying".to_string(),
        DYSSYNERGIA_WITHOUT_NEURO_HISTORY.to_string(),
    ];

    let kept = filter_transient_warnings(warnings);
    assert_eq!(kept.len(), 1);
    assert!(kept[0].starts_with("High post-void residual"));
}
