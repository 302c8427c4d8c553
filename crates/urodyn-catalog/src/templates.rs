//! Exam templates: partial records that pre-fill the form for a suspected
//! condition.
//!
//! Applying a template replaces whole top-level sections of the record
//! (`flow`, `cystometry`, ...). Sections the template does not mention are
//! left as they were.

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::json;
use ts_rs::TS;
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::result::ValidationReport;
use urodyn_engine::{filter_transient_warnings, validate};

use crate::error::CatalogError;

pub const HYPERACTIVE_BLADDER: &str = "hyperactive_bladder";
pub const PROSTATIC_OBSTRUCTION: &str = "prostatic_obstruction";
pub const STRESS_INCONTINENCE: &str = "stress_incontinence";
pub const DETRUSOR_SPHINCTER_DYSSYNERGIA: &str = "detrusor_sphincter_dyssynergia";
pub const DETRUSOR_UNDERACTIVITY: &str = "detrusor_underactivity";

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Set when the template only makes sense for one sex.
    pub sex_restriction: Option<Sex>,
    /// Partial record, keyed like [`PatientMeasurement`]'s top-level fields.
    pub defaults: serde_json::Value,
}

static TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    vec![
        Template {
            id: HYPERACTIVE_BLADDER.to_string(),
            name: "Overactive bladder".to_string(),
            description: "Suspected overactive bladder with urgency".to_string(),
            sex_restriction: None,
            defaults: json!({
                "symptoms": ["urgency", "frequency", "nocturia"],
                "flow": {
                    "peak_flow": 18.0,
                    "mean_flow": 12.0,
                    "voided_volume": 280.0,
                    "voiding_time": 25.0,
                    "latency_time": 3.0,
                    "time_to_peak_flow": 8.0,
                    "curve_shape": "normal"
                },
                "cystometry": {
                    "bladder_capacity": 220.0,
                    "detrusor_pressure": 45.0,
                    "abdominal_pressure": 12.0,
                    "vesical_pressure": 57.0,
                    "compliance": 15.0,
                    "involuntary_contractions": true,
                    "sensation": "increased",
                    "first_desire": 80.0,
                    "normal_desire": 150.0,
                    "maximum_capacity": 220.0,
                    "fill_rate": 50.0,
                    "leak_pressure": 0.0
                },
                "post_void_residual": 15.0
            }),
        },
        Template {
            id: PROSTATIC_OBSTRUCTION.to_string(),
            name: "Prostatic obstruction".to_string(),
            description: "Prostatic obstruction with dysuria".to_string(),
            sex_restriction: Some(Sex::Male),
            defaults: json!({
                "sex": "M",
                "symptoms": ["dysuria", "weak_stream", "incomplete_emptying", "nocturia"],
                "history": ["bph"],
                "treatments": ["alpha_blockers"],
                "flow": {
                    "peak_flow": 8.0,
                    "mean_flow": 5.0,
                    "voided_volume": 320.0,
                    "voiding_time": 65.0,
                    "latency_time": 8.0,
                    "time_to_peak_flow": 25.0,
                    "curve_shape": "plateau"
                },
                "cystometry": {
                    "bladder_capacity": 480.0,
                    "detrusor_pressure": 25.0,
                    "abdominal_pressure": 18.0,
                    "vesical_pressure": 43.0,
                    "compliance": 25.0,
                    "involuntary_contractions": false,
                    "sensation": "normal",
                    "first_desire": 180.0,
                    "normal_desire": 320.0,
                    "maximum_capacity": 480.0,
                    "fill_rate": 50.0,
                    "leak_pressure": 0.0
                },
                "urethral_profile": {
                    "max_urethral_pressure": 95.0,
                    "urethral_length": 220.0,
                    "closure_pressure": 70.0,
                    "functional_length": 32.0,
                    "pressure_transmission": 90.0,
                    "dynamic_profile": "normal"
                },
                "pressure_flow": {
                    "detrusor_pressure_at_peak_flow": 65.0
                },
                "post_void_residual": 85.0
            }),
        },
        Template {
            id: STRESS_INCONTINENCE.to_string(),
            name: "Stress incontinence".to_string(),
            description: "Stress incontinence with effort leakage (men or women)".to_string(),
            sex_restriction: None,
            defaults: json!({
                "sex": "F",
                "symptoms": ["stress_incontinence", "cough_leakage"],
                "history": ["difficult_deliveries", "episiotomy"],
                "flow": {
                    "peak_flow": 22.0,
                    "mean_flow": 15.0,
                    "voided_volume": 350.0,
                    "voiding_time": 24.0,
                    "latency_time": 2.0,
                    "time_to_peak_flow": 7.0,
                    "curve_shape": "normal"
                },
                "cystometry": {
                    "bladder_capacity": 420.0,
                    "detrusor_pressure": 28.0,
                    "abdominal_pressure": 15.0,
                    "vesical_pressure": 43.0,
                    "compliance": 22.0,
                    "involuntary_contractions": false,
                    "sensation": "normal",
                    "first_desire": 150.0,
                    "normal_desire": 280.0,
                    "maximum_capacity": 420.0,
                    "fill_rate": 50.0,
                    "leak_pressure": 0.0
                },
                "urethral_profile": {
                    "max_urethral_pressure": 45.0,
                    "urethral_length": 32.0,
                    "closure_pressure": 18.0,
                    "functional_length": 22.0,
                    "pressure_transmission": 65.0,
                    "dynamic_profile": "decreased"
                },
                "provocation": {
                    "cough_test": "strong_positive",
                    "valsalva_test": "weak_positive",
                    "stress_test_pressure": 45.0,
                    "abdominal_leak_point_pressure": 45.0
                },
                "post_void_residual": 10.0
            }),
        },
        Template {
            id: DETRUSOR_SPHINCTER_DYSSYNERGIA.to_string(),
            name: "Detrusor-sphincter dyssynergia".to_string(),
            description: "Dyssynergia with a neurological lesion".to_string(),
            sex_restriction: None,
            defaults: json!({
                "sex": "M",
                "symptoms": ["dysuria", "incomplete_emptying", "recurrent_urinary_infections"],
                "history": ["spinal_cord_injury", "paraplegia"],
                "treatments": ["intermittent_self_catheterisation"],
                "flow": {
                    "peak_flow": 6.0,
                    "mean_flow": 3.0,
                    "voided_volume": 220.0,
                    "voiding_time": 55.0,
                    "latency_time": 15.0,
                    "time_to_peak_flow": 30.0,
                    "curve_shape": "intermittent"
                },
                "cystometry": {
                    "bladder_capacity": 280.0,
                    "detrusor_pressure": 55.0,
                    "abdominal_pressure": 20.0,
                    "vesical_pressure": 75.0,
                    "compliance": 12.0,
                    "involuntary_contractions": true,
                    "sensation": "decreased",
                    "first_desire": 200.0,
                    "normal_desire": 250.0,
                    "maximum_capacity": 280.0,
                    "fill_rate": 50.0,
                    "leak_pressure": 0.0
                },
                "urethral_profile": {
                    "max_urethral_pressure": 110.0,
                    "urethral_length": 200.0,
                    "closure_pressure": 85.0,
                    "functional_length": 35.0,
                    "pressure_transmission": 95.0,
                    "dynamic_profile": "increased"
                },
                "emg": {
                    "baseline_activity": "increased",
                    "voluntary_recruitment": "absent",
                    "sphincter_reflex": "absent",
                    "synergy": "dyssynergia",
                    "fatigability": "normal"
                },
                "pressure_flow": {
                    "detrusor_pressure_at_peak_flow": 85.0
                },
                "post_void_residual": 80.0
            }),
        },
        Template {
            id: DETRUSOR_UNDERACTIVITY.to_string(),
            name: "Detrusor underactivity".to_string(),
            description: "Underactive detrusor with incomplete emptying".to_string(),
            sex_restriction: None,
            defaults: json!({
                "symptoms": ["incomplete_emptying", "weak_stream", "straining"],
                "history": ["type2_diabetes", "diabetic_neuropathy"],
                "treatments": ["antidiabetics"],
                "flow": {
                    "peak_flow": 9.0,
                    "mean_flow": 6.0,
                    "voided_volume": 280.0,
                    "voiding_time": 48.0,
                    "latency_time": 12.0,
                    "time_to_peak_flow": 20.0,
                    "curve_shape": "plateau"
                },
                "cystometry": {
                    "bladder_capacity": 650.0,
                    "detrusor_pressure": 15.0,
                    "abdominal_pressure": 22.0,
                    "vesical_pressure": 37.0,
                    "compliance": 35.0,
                    "involuntary_contractions": false,
                    "sensation": "decreased",
                    "first_desire": 300.0,
                    "normal_desire": 500.0,
                    "maximum_capacity": 650.0,
                    "fill_rate": 50.0,
                    "leak_pressure": 0.0
                },
                "pressure_flow": {
                    "detrusor_pressure_at_peak_flow": 18.0
                },
                "post_void_residual": 45.0
            }),
        },
    ]
});

/// Return all registered templates.
pub fn all_templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by ID.
pub fn get_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Overlay template `id` onto `base`.
pub fn apply_template(base: &PatientMeasurement, id: &str) -> Result<PatientMeasurement, CatalogError> {
    let template = get_template(id).ok_or_else(|| CatalogError::UnknownTemplate(id.to_string()))?;

    let merged = base
        .merged_with(&template.defaults)
        .map_err(|source| CatalogError::InvalidTemplate {
            id: id.to_string(),
            source,
        })?;

    tracing::debug!(template = id, "applied exam template");
    Ok(merged)
}

/// Error message when template `id` is restricted to the other sex.
pub fn template_sex_mismatch(id: &str, sex: Sex) -> Option<String> {
    let restriction = get_template(id)?.sex_restriction?;
    if restriction == sex {
        return None;
    }
    Some(match restriction {
        Sex::Male => format!("Template \"{id}\" is specific to male patients"),
        Sex::Female => format!("Template \"{id}\" is specific to female patients"),
    })
}

/// Whether the form just left the dyssynergia template for another one.
pub fn switched_away_from_dyssynergia(previous: Option<&str>, current: Option<&str>) -> bool {
    previous == Some(DETRUSOR_SPHINCTER_DYSSYNERGIA) && current != previous
}

/// Validate a record being edited under a template, with the default
/// thresholds.
pub fn validate_for_template(
    m: &PatientMeasurement,
    current: Option<&str>,
    previous: Option<&str>,
) -> ValidationReport {
    refine_for_template(validate(m), m.sex, current, previous)
}

/// Apply the template rules to an existing report.
///
/// Adds the template/sex mismatch as an error and drops warnings left over
/// from a dyssynergia template the form has switched away from.
pub fn refine_for_template(
    report: ValidationReport,
    sex: Sex,
    current: Option<&str>,
    previous: Option<&str>,
) -> ValidationReport {
    let mut errors = report.errors;
    let mut warnings = report.warnings;

    if let Some(id) = current
        && let Some(mismatch) = template_sex_mismatch(id, sex)
    {
        errors.push(mismatch);
    }

    if switched_away_from_dyssynergia(previous, current) {
        warnings = filter_transient_warnings(warnings);
    }

    ValidationReport::new(errors, warnings)
}
