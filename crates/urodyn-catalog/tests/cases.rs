use std::collections::HashSet;

use urodyn_catalog::cases::{all_cases, get_case};
use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_engine::{analyze, validate};

#[test]
fn case_ids_are_unique_and_ordered() {
    let ids: Vec<u32> = all_cases().iter().map(|c| c.id).collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_case_is_coherent() {
    for case in all_cases() {
        let report = validate(&case.measurement);
        assert!(report.coherent, "case {}: {:?}", case.id, report.errors);
    }
}

#[test]
fn every_case_reaches_its_expected_diagnosis() {
    for case in all_cases() {
        let result = analyze(&case.measurement);
        assert_eq!(
            result.diagnosis, case.expected_diagnosis,
            "case {} ({})",
            case.id, case.title
        );
    }
}

#[test]
fn lookup_by_id() {
    let case = get_case(2).expect("case 2 exists");
    assert_eq!(case.expected_diagnosis, Diagnosis::BenignProstaticObstruction);
    assert_eq!(case.measurement.age, 72);
    assert!(get_case(999).is_none());
}

#[test]
fn dyssynergia_case_raises_the_pressure_alert() {
    let case = get_case(4).expect("case 4 exists");
    let result = analyze(&case.measurement);
    assert_eq!(result.critical_alerts.len(), 1);
    assert!(result.critical_alerts[0].starts_with("Very high detrusor pressure"));
}

#[test]
fn paediatric_cases_are_included() {
    let ages: Vec<u32> = [14, 16]
        .iter()
        .map(|id| get_case(*id).expect("paediatric case exists").measurement.age)
        .collect();
    assert_eq!(ages, vec![6, 10]);
}

#[test]
fn intrinsic_sphincter_deficiency_raises_the_sphincter_alert() {
    let case = get_case(20).expect("case 20 exists");
    let result = analyze(&case.measurement);
    assert_eq!(result.diagnosis, Diagnosis::SphinctericStressIncontinence);
    assert_eq!(result.critical_alerts.len(), 1);
    assert!(result.critical_alerts[0].starts_with("Severe sphincteric insufficiency"));
}

#[test]
fn incoherent_source_cases_are_left_out() {
    for id in [8, 9, 11, 13, 15, 19, 21] {
        assert!(get_case(id).is_none(), "case {id}");
    }
}
