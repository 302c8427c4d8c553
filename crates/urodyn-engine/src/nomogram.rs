//! Schafer and Abrams-Griffiths nomogram zones.
//!
//! Only comparisons are involved, so every input (including Qmax = 0) maps to
//! exactly one zone of each nomogram.

use urodyn_core::models::diagnosis::{AbramsGriffithsZone, SchaferZone};
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::NomogramClassification;

pub fn classify(m: &PatientMeasurement) -> NomogramClassification {
    let qmax = m.flow.peak_flow;
    let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;

    NomogramClassification {
        schafer: schafer_zone(qmax, pdet),
        abrams_griffiths: abrams_griffiths_zone(pdet - 2.0 * qmax),
    }
}

pub fn schafer_zone(qmax: f64, pdet: f64) -> SchaferZone {
    if qmax < 10.0 && pdet > 50.0 {
        SchaferZone::StrongObstruction
    } else if qmax < 15.0 && pdet > 30.0 {
        SchaferZone::ModerateObstruction
    } else if qmax < 20.0 && pdet > 20.0 {
        SchaferZone::Equivocal
    } else {
        SchaferZone::Normal
    }
}

pub fn abrams_griffiths_zone(obstruction_index: f64) -> AbramsGriffithsZone {
    if obstruction_index > 40.0 {
        AbramsGriffithsZone::Obstructed
    } else if obstruction_index > 20.0 {
        AbramsGriffithsZone::Equivocal
    } else {
        AbramsGriffithsZone::NotObstructed
    }
}
