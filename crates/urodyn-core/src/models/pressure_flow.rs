use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::result::ClinicalIndices;

/// Pressure-flow (voiding cystometry) study.
///
/// Only `detrusor_pressure_at_peak_flow` is entered by the clinician. The
/// remaining fields are derived by the index calculator and are ignored on
/// input; they are filled in on the copy of the record carried by an
/// analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PressureFlowStudy {
    /// Pdet.Qmax, cmH2O.
    pub detrusor_pressure_at_peak_flow: f64,
    #[serde(default)]
    pub obstruction_index: Option<f64>,
    #[serde(default)]
    pub contractility_index: Option<f64>,
    #[serde(default)]
    pub urethral_resistance: Option<f64>,
    #[serde(default)]
    pub urethral_conductance: Option<f64>,
}

impl PressureFlowStudy {
    pub fn with_indices(&self, indices: &ClinicalIndices) -> Self {
        Self {
            detrusor_pressure_at_peak_flow: self.detrusor_pressure_at_peak_flow,
            obstruction_index: Some(indices.obstruction_index),
            contractility_index: Some(indices.contractility_index),
            urethral_resistance: indices.urethral_resistance,
            urethral_conductance: indices.urethral_conductance,
        }
    }
}

impl Default for PressureFlowStudy {
    fn default() -> Self {
        Self {
            detrusor_pressure_at_peak_flow: 25.0,
            obstruction_index: None,
            contractility_index: None,
            urethral_resistance: None,
            urethral_conductance: None,
        }
    }
}
