use urodyn_core::models::diagnosis::{Confidence, Diagnosis};
use urodyn_core::models::emg::DetrusorSphincterSynergy;
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::provocation::ProvocationResult;
use urodyn_core::models::vocabulary::{History, Symptom};
use urodyn_engine::resolver::resolve_with;
use urodyn_engine::{Thresholds, classify, compute_indices, resolve};

fn diagnose(m: &PatientMeasurement) -> Diagnosis {
    resolve(m, &compute_indices(m), &classify(m)).diagnosis
}

fn female() -> PatientMeasurement {
    let mut m = PatientMeasurement {
        sex: Sex::Female,
        ..PatientMeasurement::default()
    };
    m.urethral_profile.urethral_length = 40.0;
    m
}

fn set_flow(m: &mut PatientMeasurement, qmax: f64, pdet: f64) {
    m.flow.peak_flow = qmax;
    m.flow.mean_flow = qmax / 2.0;
    m.pressure_flow.detrusor_pressure_at_peak_flow = pdet;
}

#[test]
fn default_record_is_normal_with_high_confidence() {
    let m = PatientMeasurement::default();
    let resolution = resolve(&m, &compute_indices(&m), &classify(&m));
    assert_eq!(resolution.diagnosis, Diagnosis::Normal);
    assert_eq!(resolution.confidence, Confidence::High);
}

#[test]
fn bph_with_high_obstruction_index_is_benign_prostatic_obstruction() {
    let mut m = PatientMeasurement {
        age: 72,
        history: vec![History::Bph],
        ..PatientMeasurement::default()
    };
    set_flow(&mut m, 8.0, 65.0);

    let dx = diagnose(&m);
    assert_eq!(dx, Diagnosis::BenignProstaticObstruction);
    assert_eq!(dx.label(), "benign prostatic obstruction");
}

#[test]
fn high_obstruction_index_without_bph_is_subvesical() {
    let mut m = PatientMeasurement::default();
    set_flow(&mut m, 8.0, 65.0);
    assert_eq!(diagnose(&m), Diagnosis::SubvesicalObstruction);
}

#[test]
fn dyssynergia_takes_precedence_within_obstruction() {
    let mut m = PatientMeasurement {
        history: vec![History::Bph, History::SpinalCordInjury],
        ..PatientMeasurement::default()
    };
    m.emg.synergy = DetrusorSphincterSynergy::Dyssynergia;
    set_flow(&mut m, 5.0, 60.0);
    assert_eq!(diagnose(&m), Diagnosis::DetrusorSphincterDyssynergia);
}

#[test]
fn stress_urgency_contractions_and_low_closure_is_mixed() {
    let mut m = female();
    m.symptoms = vec![Symptom::StressIncontinence, Symptom::Urgency];
    m.cystometry.involuntary_contractions = true;
    m.urethral_profile.closure_pressure = 15.0;

    let dx = diagnose(&m);
    assert_eq!(dx, Diagnosis::MixedDetrusorSphincteric);
    assert_eq!(
        dx.label(),
        "mixed incontinence (detrusor overactivity + sphincteric insufficiency)"
    );
}

#[test]
fn mixed_variants() {
    let mut m = female();
    m.symptoms = vec![Symptom::MixedLeakage];
    assert_eq!(diagnose(&m), Diagnosis::MixedUnspecified);

    m.cystometry.involuntary_contractions = true;
    assert_eq!(diagnose(&m), Diagnosis::MixedUrgencyPredominant);

    m.cystometry.involuntary_contractions = false;
    m.urethral_profile.closure_pressure = 15.0;
    assert_eq!(diagnose(&m), Diagnosis::MixedEffortPredominant);
}

#[test]
fn mixed_incontinence_outranks_obstruction() {
    let mut m = PatientMeasurement {
        symptoms: vec![Symptom::Urgency],
        ..PatientMeasurement::default()
    };
    m.provocation.cough_test = ProvocationResult::WeakPositive;
    set_flow(&mut m, 10.0, 65.0);

    assert_eq!(compute_indices(&m).obstruction_index, 45.0);
    assert!(diagnose(&m).is_mixed());
}

#[test]
fn female_prolapse_with_three_criteria_is_prolapse_obstruction() {
    let mut m = female();
    m.history = vec![History::GenitalProlapse];
    m.symptoms = vec![Symptom::WeakStream];
    set_flow(&mut m, 12.0, 35.0);

    assert_eq!(diagnose(&m), Diagnosis::ProlapseRelatedObstruction);
}

#[test]
fn female_prolapse_with_two_criteria_falls_through() {
    let mut m = female();
    m.history = vec![History::Cystocele];
    m.symptoms = vec![Symptom::WeakStream];
    set_flow(&mut m, 12.0, 20.0);

    // Only the Qmax criterion holds.
    assert_ne!(diagnose(&m), Diagnosis::ProlapseRelatedObstruction);
}

#[test]
fn moderate_obstruction_index_with_obstructive_symptoms() {
    let mut m = PatientMeasurement {
        history: vec![History::Bph],
        symptoms: vec![Symptom::WeakStream],
        ..PatientMeasurement::default()
    };
    set_flow(&mut m, 10.0, 45.0);
    assert_eq!(diagnose(&m), Diagnosis::EarlyProstaticObstruction);

    m.history.clear();
    assert_eq!(diagnose(&m), Diagnosis::EquivocalSubvesicalObstruction);

    m.symptoms.clear();
    assert_ne!(diagnose(&m), Diagnosis::EquivocalSubvesicalObstruction);
}

#[test]
fn contractions_are_neurogenic_only_with_central_neurological_history() {
    let mut m = PatientMeasurement::default();
    m.cystometry.involuntary_contractions = true;
    assert_eq!(diagnose(&m), Diagnosis::IdiopathicDetrusorOveractivity);

    m.history = vec![History::ParkinsonsDisease];
    assert_eq!(diagnose(&m), Diagnosis::NeurogenicDetrusorOveractivity);
}

#[test]
fn stress_signal_with_low_closure_is_stress_incontinence() {
    let mut m = female();
    m.symptoms = vec![Symptom::StressIncontinence];
    m.urethral_profile.closure_pressure = 15.0;
    assert_eq!(diagnose(&m), Diagnosis::SphinctericStressIncontinence);
}

#[test]
fn weak_contraction_with_low_flow_is_underactivity() {
    let mut m = PatientMeasurement::default();
    set_flow(&mut m, 8.0, 20.0);
    assert_eq!(diagnose(&m), Diagnosis::DetrusorUnderactivity);
}

#[test]
fn small_painful_bladder() {
    let mut m = female();
    m.symptoms = vec![Symptom::BladderPain];
    m.cystometry.bladder_capacity = 150.0;
    assert_eq!(diagnose(&m), Diagnosis::PainfulBladderSyndrome);
}

#[test]
fn high_residual_alone_is_incomplete_emptying() {
    let m = PatientMeasurement {
        post_void_residual: 150.0,
        ..PatientMeasurement::default()
    };
    assert_eq!(diagnose(&m), Diagnosis::IncompleteEmptying);
}

#[test]
fn confidence_counts_quality_criteria() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 50.0;
    let resolution = resolve(&m, &compute_indices(&m), &classify(&m));
    assert_eq!(resolution.confidence, Confidence::Moderate);

    m.flow.voided_volume = 150.0;
    let resolution = resolve(&m, &compute_indices(&m), &classify(&m));
    assert_eq!(resolution.confidence, Confidence::Low);
}

#[test]
fn confidence_tolerance_is_tunable() {
    let mut m = PatientMeasurement::default();
    m.cystometry.vesical_pressure = 50.0;
    let loose = Thresholds {
        confidence_pressure_tolerance: 10.0,
        ..Thresholds::default()
    };
    let resolution = resolve_with(&m, &compute_indices(&m), &classify(&m), &loose);
    assert_eq!(resolution.confidence, Confidence::High);
}
