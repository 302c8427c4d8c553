//! Reference (normal) values used by the clinic for adult urodynamics.
//!
//! Display-only: these ranges flag values in a summary. The validator and the
//! resolver use their own fixed thresholds.

use serde::Serialize;

use crate::models::patient::{PatientMeasurement, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: &'static str,
}

impl ReferenceRange {
    const fn between(min: f64, max: f64, unit: &'static str) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            unit,
        }
    }

    const fn at_least(min: f64, unit: &'static str) -> Self {
        Self {
            min: Some(min),
            max: None,
            unit,
        }
    }

    const fn at_most(max: f64, unit: &'static str) -> Self {
        Self {
            min: None,
            max: Some(max),
            unit,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

pub const PEAK_FLOW: ReferenceRange = ReferenceRange::between(15.0, 25.0, "ml/s");
pub const MEAN_FLOW: ReferenceRange = ReferenceRange::between(8.0, 15.0, "ml/s");
pub const VOIDED_VOLUME: ReferenceRange = ReferenceRange::between(150.0, 500.0, "ml");
pub const VOIDING_TIME: ReferenceRange = ReferenceRange::at_most(60.0, "s");
pub const LATENCY_TIME: ReferenceRange = ReferenceRange::at_most(10.0, "s");

pub const BLADDER_CAPACITY: ReferenceRange = ReferenceRange::between(300.0, 600.0, "ml");
pub const COMPLIANCE: ReferenceRange = ReferenceRange::at_least(20.0, "ml/cmH2O");
pub const FIRST_DESIRE: ReferenceRange = ReferenceRange::between(100.0, 200.0, "ml");
pub const NORMAL_DESIRE: ReferenceRange = ReferenceRange::between(200.0, 400.0, "ml");

pub const DETRUSOR_PRESSURE_AT_PEAK_FLOW: ReferenceRange = ReferenceRange::at_most(40.0, "cmH2O");
pub const CONTRACTILITY_INDEX: ReferenceRange = ReferenceRange::at_least(100.0, "");
pub const POST_VOID_RESIDUAL: ReferenceRange = ReferenceRange::at_most(50.0, "ml");

/// Sex-specific urethral profile ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UrethralReference {
    pub max_urethral_pressure: ReferenceRange,
    pub closure_pressure: ReferenceRange,
    pub urethral_length: ReferenceRange,
    pub functional_length: ReferenceRange,
}

pub fn urethral(sex: Sex) -> UrethralReference {
    match sex {
        Sex::Male => UrethralReference {
            max_urethral_pressure: ReferenceRange::between(60.0, 120.0, "cmH2O"),
            closure_pressure: ReferenceRange::between(40.0, 80.0, "cmH2O"),
            urethral_length: ReferenceRange::between(180.0, 240.0, "mm"),
            functional_length: ReferenceRange::between(15.0, 35.0, "mm"),
        },
        Sex::Female => UrethralReference {
            max_urethral_pressure: ReferenceRange::between(40.0, 100.0, "cmH2O"),
            closure_pressure: ReferenceRange::between(20.0, 60.0, "cmH2O"),
            urethral_length: ReferenceRange::between(30.0, 50.0, "mm"),
            functional_length: ReferenceRange::between(25.0, 45.0, "mm"),
        },
    }
}

/// A measured value that falls outside its reference range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutOfRange {
    pub name: &'static str,
    pub value: f64,
    pub range: ReferenceRange,
}

/// List every entered value of `m` that lies outside the reference ranges.
pub fn out_of_range(m: &PatientMeasurement) -> Vec<OutOfRange> {
    let urethral = urethral(m.sex);
    let checks = [
        ("Peak flow", m.flow.peak_flow, PEAK_FLOW),
        ("Mean flow", m.flow.mean_flow, MEAN_FLOW),
        ("Voided volume", m.flow.voided_volume, VOIDED_VOLUME),
        ("Voiding time", m.flow.voiding_time, VOIDING_TIME),
        ("Latency time", m.flow.latency_time, LATENCY_TIME),
        ("Bladder capacity", m.cystometry.bladder_capacity, BLADDER_CAPACITY),
        ("Compliance", m.cystometry.compliance, COMPLIANCE),
        ("First desire", m.cystometry.first_desire, FIRST_DESIRE),
        ("Normal desire", m.cystometry.normal_desire, NORMAL_DESIRE),
        (
            "Max urethral pressure",
            m.urethral_profile.max_urethral_pressure,
            urethral.max_urethral_pressure,
        ),
        ("Closure pressure", m.urethral_profile.closure_pressure, urethral.closure_pressure),
        ("Urethral length", m.urethral_profile.urethral_length, urethral.urethral_length),
        ("Functional length", m.urethral_profile.functional_length, urethral.functional_length),
        (
            "Pdet.Qmax",
            m.pressure_flow.detrusor_pressure_at_peak_flow,
            DETRUSOR_PRESSURE_AT_PEAK_FLOW,
        ),
        ("Post-void residual", m.post_void_residual, POST_VOID_RESIDUAL),
    ];

    checks
        .into_iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(name, value, range)| OutOfRange { name, value, range })
        .collect()
}
