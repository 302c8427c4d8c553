//! Consistency checks run on every edit of a measurement record.
//!
//! Errors block clinical interpretation; warnings never do. Nothing here
//! corrects a value.

use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::result::ValidationReport;

use crate::thresholds::Thresholds;

/// Warning the exam form shows while a dyssynergia template is loaded without
/// neurological history. [`validate`] never emits it; see
/// [`filter_transient_warnings`].
pub const DYSSYNERGIA_WITHOUT_NEURO_HISTORY: &str =
    "Dyssynergia without evident neurological history";

const MALE_MIN_URETHRAL_LENGTH: f64 = 150.0;
const FEMALE_MAX_URETHRAL_LENGTH: f64 = 60.0;

/// Validate with the default thresholds (exact vesical-pressure equality).
pub fn validate(m: &PatientMeasurement) -> ValidationReport {
    validate_with(m, &Thresholds::default())
}

pub fn validate_with(m: &PatientMeasurement, thresholds: &Thresholds) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_sex_coherence(m, &mut errors, &mut warnings);
    check_sex_bounds(m, &mut errors, &mut warnings);
    check_invariants(m, thresholds, &mut errors);
    check_plausibility(m, &mut warnings);

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validated measurement record"
    );

    ValidationReport::new(errors, warnings)
}

/// Drop warnings that only made sense for a template the user has since
/// switched away from.
pub fn filter_transient_warnings(warnings: Vec<String>) -> Vec<String> {
    warnings
        .into_iter()
        .filter(|w| !w.contains(DYSSYNERGIA_WITHOUT_NEURO_HISTORY))
        .collect()
}

/// Labels of the tags that belong to the other sex.
fn cross_sex<T: Copy>(
    tags: &[T],
    sex: Sex,
    tag_sex: impl Fn(T) -> Option<Sex>,
    label: impl Fn(T) -> &'static str,
) -> Vec<&'static str> {
    let other = sex.opposite();
    tags.iter()
        .copied()
        .filter(|t| tag_sex(*t) == Some(other))
        .map(label)
        .collect()
}

fn check_sex_coherence(m: &PatientMeasurement, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let history = cross_sex(&m.history, m.sex, |h| h.sex(), |h| h.label());
    if !history.is_empty() {
        errors.push(match m.sex {
            Sex::Male => format!(
                "Inconsistency: female history ({}) in a male patient",
                history.join(", ")
            ),
            Sex::Female => format!(
                "Inconsistency: male history ({}) in a female patient",
                history.join(", ")
            ),
        });
    }

    let symptoms = cross_sex(&m.symptoms, m.sex, |s| s.sex(), |s| s.label());
    if !symptoms.is_empty() {
        warnings.push(format!(
            "Symptoms unlikely in {}: {}",
            patient_noun(m.sex),
            symptoms.join(", ")
        ));
    }

    let treatments = cross_sex(&m.treatments, m.sex, |t| t.sex(), |t| t.label());
    if !treatments.is_empty() {
        warnings.push(format!(
            "Treatments unlikely in {}: {}",
            patient_noun(m.sex),
            treatments.join(", ")
        ));
    }
}

fn patient_noun(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "a man",
        Sex::Female => "a woman",
    }
}

fn check_sex_bounds(m: &PatientMeasurement, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let profile = &m.urethral_profile;

    match m.sex {
        Sex::Male if profile.urethral_length < MALE_MIN_URETHRAL_LENGTH => errors.push(format!(
            "Urethral length too short for a man: {}mm (minimum {}mm)",
            profile.urethral_length, MALE_MIN_URETHRAL_LENGTH
        )),
        Sex::Female if profile.urethral_length > FEMALE_MAX_URETHRAL_LENGTH => errors.push(format!(
            "Urethral length too long for a woman: {}mm (maximum {}mm)",
            profile.urethral_length, FEMALE_MAX_URETHRAL_LENGTH
        )),
        _ => {}
    }

    let (min, max) = match m.sex {
        Sex::Male => (40.0, 150.0),
        Sex::Female => (30.0, 120.0),
    };
    let pressure = profile.max_urethral_pressure;
    if pressure < min || pressure > max {
        warnings.push(format!(
            "Urethral pressure out of range for {}: {} cmH2O (normal: {}-{})",
            patient_noun(m.sex),
            pressure,
            min,
            max
        ));
    }
}

fn check_invariants(m: &PatientMeasurement, thresholds: &Thresholds, errors: &mut Vec<String>) {
    let cm = &m.cystometry;
    let flow = &m.flow;
    let profile = &m.urethral_profile;

    let deviation = (cm.vesical_pressure - (cm.detrusor_pressure + cm.abdominal_pressure)).abs();
    // A NaN deviation fails.
    if !(deviation <= thresholds.vesical_pressure_epsilon) {
        errors.push(format!(
            "Calculation error: Pves ({}) ≠ Pdet ({}) + Pabd ({})",
            cm.vesical_pressure, cm.detrusor_pressure, cm.abdominal_pressure
        ));
    }

    if flow.mean_flow > flow.peak_flow {
        errors.push(format!(
            "Impossible: mean flow ({}ml/s) cannot exceed peak flow ({}ml/s)",
            flow.mean_flow, flow.peak_flow
        ));
    }

    if profile.closure_pressure > profile.max_urethral_pressure {
        errors.push(format!(
            "Impossible: closure pressure ({}) cannot exceed max urethral pressure ({})",
            profile.closure_pressure, profile.max_urethral_pressure
        ));
    }

    if profile.functional_length > profile.urethral_length {
        errors.push(format!(
            "Impossible: functional length ({}mm) cannot exceed total urethral length ({}mm)",
            profile.functional_length, profile.urethral_length
        ));
    }

    if m.post_void_residual > flow.voided_volume {
        errors.push(format!(
            "Impossible: post-void residual ({}ml) cannot exceed voided volume ({}ml)",
            m.post_void_residual, flow.voided_volume
        ));
    }

    if let Some(time_to_peak) = flow.time_to_peak_flow
        && time_to_peak > flow.voiding_time
    {
        errors.push(format!(
            "Impossible: time to peak flow ({}s) cannot exceed total voiding time ({}s)",
            time_to_peak, flow.voiding_time
        ));
    }

    if cm.first_desire > cm.normal_desire {
        errors.push(format!(
            "Impossible: first desire ({}ml) cannot exceed normal desire ({}ml)",
            cm.first_desire, cm.normal_desire
        ));
    }

    if cm.normal_desire > cm.bladder_capacity {
        errors.push(format!(
            "Impossible: normal desire ({}ml) cannot exceed bladder capacity ({}ml)",
            cm.normal_desire, cm.bladder_capacity
        ));
    }
}

fn check_plausibility(m: &PatientMeasurement, warnings: &mut Vec<String>) {
    let qmax = m.flow.peak_flow;
    if qmax < 5.0 {
        warnings.push(format!(
            "Very low Qmax ({qmax}ml/s): check for obstruction or hypocontractility"
        ));
    }
    if qmax > 35.0 {
        warnings.push(format!("Very high Qmax ({qmax}ml/s): check the measurement"));
    }

    let compliance = m.cystometry.compliance;
    if compliance < 10.0 {
        warnings.push(format!(
            "Very low compliance ({compliance}ml/cmH2O): suggests bladder fibrosis"
        ));
    }

    let capacity = m.cystometry.bladder_capacity;
    if capacity < 200.0 {
        warnings.push(format!(
            "Very small bladder capacity ({capacity}ml): check for inflammatory disease"
        ));
    }
    if capacity > 800.0 {
        warnings.push(format!(
            "Very large bladder capacity ({capacity}ml): suggests neurogenic bladder or chronic obstruction"
        ));
    }

    let residual = m.post_void_residual;
    if residual > 100.0 {
        warnings.push(format!(
            "High post-void residual ({residual}ml): suggests incomplete emptying"
        ));
    }

    let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;
    if pdet > 100.0 {
        warnings.push(format!(
            "Very high detrusor pressure at Qmax ({pdet}cmH2O): check for severe obstruction"
        ));
    }

    let voiding_time = m.flow.voiding_time;
    if voiding_time > 120.0 {
        warnings.push(format!(
            "Very prolonged voiding time ({voiding_time}s): suggests obstruction or hypocontractility"
        ));
    }
}
