//! Indices derived from the pressure-flow study.

use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::ClinicalIndices;

pub fn compute_indices(m: &PatientMeasurement) -> ClinicalIndices {
    let qmax = m.flow.peak_flow;
    let qmean = m.flow.mean_flow;
    let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;

    let indices = ClinicalIndices {
        obstruction_index: pdet - 2.0 * qmax,
        contractility_index: pdet + 5.0 * qmax,
        urethral_resistance: ratio(pdet, qmax),
        urethral_conductance: ratio(qmax, pdet),
        flow_ratio: ratio(qmean, qmax),
    };

    tracing::debug!(
        obstruction = indices.obstruction_index,
        contractility = indices.contractility_index,
        "computed clinical indices"
    );

    indices
}

/// `numerator / denominator`, or `None` when the quotient is not a finite number.
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}
