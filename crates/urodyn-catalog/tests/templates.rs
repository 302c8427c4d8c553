use urodyn_catalog::error::CatalogError;
use urodyn_catalog::templates::{
    DETRUSOR_SPHINCTER_DYSSYNERGIA, DETRUSOR_UNDERACTIVITY, HYPERACTIVE_BLADDER,
    PROSTATIC_OBSTRUCTION, STRESS_INCONTINENCE, all_templates, apply_template, get_template,
    refine_for_template, switched_away_from_dyssynergia, template_sex_mismatch,
    validate_for_template,
};
use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::result::ValidationReport;
use urodyn_engine::validator::DYSSYNERGIA_WITHOUT_NEURO_HISTORY;
use urodyn_engine::{analyze, validate};

#[test]
fn all_templates_are_registered() {
    let ids: Vec<_> = all_templates().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            HYPERACTIVE_BLADDER,
            PROSTATIC_OBSTRUCTION,
            STRESS_INCONTINENCE,
            DETRUSOR_SPHINCTER_DYSSYNERGIA,
            DETRUSOR_UNDERACTIVITY,
        ]
    );
    assert!(get_template("unknown").is_none());
}

#[test]
fn every_template_applies_to_the_blank_form() {
    let base = PatientMeasurement::default();
    for template in all_templates() {
        let m = apply_template(&base, &template.id).unwrap();
        assert!(validate(&m).coherent, "{}", template.id);
    }
}

#[test]
fn templates_lead_to_their_diagnosis() {
    let base = PatientMeasurement::default();
    let cases = [
        (HYPERACTIVE_BLADDER, Diagnosis::IdiopathicDetrusorOveractivity),
        (PROSTATIC_OBSTRUCTION, Diagnosis::BenignProstaticObstruction),
        (STRESS_INCONTINENCE, Diagnosis::SphinctericStressIncontinence),
        (DETRUSOR_SPHINCTER_DYSSYNERGIA, Diagnosis::DetrusorSphincterDyssynergia),
        (DETRUSOR_UNDERACTIVITY, Diagnosis::DetrusorUnderactivity),
    ];
    for (id, expected) in cases {
        let m = apply_template(&base, id).unwrap();
        assert_eq!(analyze(&m).diagnosis, expected, "{id}");
    }
}

#[test]
fn merge_replaces_only_the_sections_a_template_names() {
    let base = PatientMeasurement {
        patient_name: "Mr X".to_string(),
        age: 81,
        ..PatientMeasurement::default()
    };
    let m = apply_template(&base, HYPERACTIVE_BLADDER).unwrap();

    assert_eq!(m.patient_name, "Mr X");
    assert_eq!(m.age, 81);
    assert_eq!(m.urethral_profile, base.urethral_profile);
    assert_eq!(m.flow.peak_flow, 18.0);
    assert!(m.cystometry.involuntary_contractions);
    assert_eq!(m.post_void_residual, 15.0);
}

#[test]
fn unknown_template_is_an_error() {
    let err = apply_template(&PatientMeasurement::default(), "nope").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownTemplate(id) if id == "nope"));
}

#[test]
fn prostatic_template_is_male_only() {
    assert!(template_sex_mismatch(PROSTATIC_OBSTRUCTION, Sex::Male).is_none());
    let message = template_sex_mismatch(PROSTATIC_OBSTRUCTION, Sex::Female).unwrap();
    assert!(message.contains("prostatic_obstruction"));
    assert!(message.contains("male patients"));

    assert!(template_sex_mismatch(STRESS_INCONTINENCE, Sex::Male).is_none());
    assert!(template_sex_mismatch("unknown", Sex::Female).is_none());
}

#[test]
fn sex_mismatch_is_reported_as_a_validation_error() {
    let mut m = apply_template(&PatientMeasurement::default(), PROSTATIC_OBSTRUCTION).unwrap();
    assert!(validate_for_template(&m, Some(PROSTATIC_OBSTRUCTION), None).coherent);

    m.sex = Sex::Female;
    m.history.clear();
    m.urethral_profile.urethral_length = 40.0;
    m.urethral_profile.functional_length = 30.0;
    assert!(validate(&m).coherent);

    let report = validate_for_template(&m, Some(PROSTATIC_OBSTRUCTION), None);
    assert!(!report.coherent);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn switching_away_from_dyssynergia() {
    assert!(switched_away_from_dyssynergia(
        Some(DETRUSOR_SPHINCTER_DYSSYNERGIA),
        Some(HYPERACTIVE_BLADDER)
    ));
    assert!(switched_away_from_dyssynergia(Some(DETRUSOR_SPHINCTER_DYSSYNERGIA), None));
    assert!(!switched_away_from_dyssynergia(
        Some(DETRUSOR_SPHINCTER_DYSSYNERGIA),
        Some(DETRUSOR_SPHINCTER_DYSSYNERGIA)
    ));
    assert!(!switched_away_from_dyssynergia(None, Some(HYPERACTIVE_BLADDER)));
}

#[test]
fn leftover_dyssynergia_warning_is_dropped_after_switching() {
    let report = || {
        ValidationReport::new(
            vec![],
            vec![
                DYSSYNERGIA_WITHOUT_NEURO_HISTORY.to_string(),
                "Very low compliance (8ml/cmH2O): suggests bladder fibrosis".to_string(),
            ],
        )
    };

    let switched = refine_for_template(
        report(),
        Sex::Male,
        Some(HYPERACTIVE_BLADDER),
        Some(DETRUSOR_SPHINCTER_DYSSYNERGIA),
    );
    assert_eq!(
        switched.warnings,
        vec!["Very low compliance (8ml/cmH2O): suggests bladder fibrosis".to_string()]
    );

    let kept = refine_for_template(report(), Sex::Male, Some(HYPERACTIVE_BLADDER), None);
    assert_eq!(kept.warnings.len(), 2);
}

#[test]
fn dyssynergia_template_validates_without_extra_warning() {
    let mut m = apply_template(&PatientMeasurement::default(), DETRUSOR_SPHINCTER_DYSSYNERGIA).unwrap();
    m.history.clear();

    let report = validate_for_template(&m, Some(DETRUSOR_SPHINCTER_DYSSYNERGIA), None);
    assert!(!report.warnings.iter().any(|w| w == DYSSYNERGIA_WITHOUT_NEURO_HISTORY));
}

#[test]
fn refine_keeps_existing_errors() {
    let report = ValidationReport::new(vec!["existing".to_string()], vec![]);
    let refined = refine_for_template(report, Sex::Female, Some(PROSTATIC_OBSTRUCTION), None);

    assert!(!refined.coherent);
    assert_eq!(refined.errors[0], "existing");
    assert_eq!(
        refined.errors[1],
        "Template \"prostatic_obstruction\" is specific to male patients"
    );

    let untouched = refine_for_template(ValidationReport::default(), Sex::Male, None, None);
    assert!(untouched.coherent);
}
