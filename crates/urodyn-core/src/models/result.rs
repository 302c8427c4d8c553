use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diagnosis::{AbramsGriffithsZone, Confidence, Diagnosis, SchaferZone};
use super::patient::PatientMeasurement;

/// Display names of the derived indices, in report order.
pub mod index_name {
    pub const OBSTRUCTION: &str = "Obstruction index (Abrams-Griffiths)";
    pub const CONTRACTILITY: &str = "Detrusor contractility index";
    pub const RESISTANCE: &str = "Urethral resistance";
    pub const CONDUCTANCE: &str = "Urethral conductance";
    pub const FLOW_RATIO: &str = "Qmean/Qmax ratio";
}

/// Indices derived from the pressure-flow study.
///
/// The ratio indices are `None` when their denominator is zero (or not a
/// finite number); they are never NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalIndices {
    pub obstruction_index: f64,
    pub contractility_index: f64,
    pub urethral_resistance: Option<f64>,
    pub urethral_conductance: Option<f64>,
    pub flow_ratio: Option<f64>,
}

impl ClinicalIndices {
    /// All five indices with their display names, in report order.
    pub fn named(&self) -> [(&'static str, Option<f64>); 5] {
        [
            (index_name::OBSTRUCTION, Some(self.obstruction_index)),
            (index_name::CONTRACTILITY, Some(self.contractility_index)),
            (index_name::RESISTANCE, self.urethral_resistance),
            (index_name::CONDUCTANCE, self.urethral_conductance),
            (index_name::FLOW_RATIO, self.flow_ratio),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NomogramClassification {
    pub schafer: SchaferZone,
    pub abrams_griffiths: AbramsGriffithsZone,
}

/// Outcome of the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resolution {
    pub diagnosis: Diagnosis,
    pub confidence: Confidence,
}

/// One line of guidance with the explanation shown on hover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidanceItem {
    pub label: String,
    pub tooltip: String,
}

impl GuidanceItem {
    pub fn new(label: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
        }
    }
}

/// Result of checking a record for internal consistency.
///
/// Errors mean the record must not be interpreted clinically; warnings are
/// informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub coherent: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            coherent: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Everything produced by one analysis of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticResult {
    pub diagnosis: Diagnosis,
    pub diagnosis_label: String,
    pub confidence: Confidence,
    pub recommendations: Vec<GuidanceItem>,
    pub complementary_exams: Vec<GuidanceItem>,
    pub treatments: Vec<GuidanceItem>,
    pub surveillance: Vec<GuidanceItem>,
    pub pitfalls: Vec<GuidanceItem>,
    pub critical_alerts: Vec<String>,
    pub indices: ClinicalIndices,
    pub nomograms: NomogramClassification,
    pub validation: ValidationReport,
    /// The analysed record, with the derived pressure-flow indices filled in.
    pub measurement: PatientMeasurement,
}

impl DiagnosticResult {
    /// Whether the caller may treat this result as clinically meaningful.
    pub fn is_trustworthy(&self) -> bool {
        self.validation.coherent
    }
}
