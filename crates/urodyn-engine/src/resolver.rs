//! Priority-ordered decision tree mapping a record to one primary diagnosis.
//!
//! Branches are evaluated top to bottom and the first match wins, so a
//! mixed-incontinence presentation is reported as such even when the
//! obstruction index is also raised.

use urodyn_core::models::diagnosis::{Confidence, Diagnosis, SchaferZone};
use urodyn_core::models::emg::DetrusorSphincterSynergy;
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::result::{ClinicalIndices, NomogramClassification, Resolution};
use urodyn_core::models::vocabulary::{History, Symptom};

use crate::thresholds::Thresholds;

/// Closure pressure (cmH2O) below which the sphincter is considered insufficient.
pub const SPHINCTER_INSUFFICIENCY_CLOSURE: f64 = 20.0;

/// Prolapse-obstruction criteria that must hold out of five.
const PROLAPSE_CRITERIA_REQUIRED: usize = 3;

pub fn resolve(
    m: &PatientMeasurement,
    indices: &ClinicalIndices,
    nomograms: &NomogramClassification,
) -> Resolution {
    resolve_with(m, indices, nomograms, &Thresholds::default())
}

pub fn resolve_with(
    m: &PatientMeasurement,
    indices: &ClinicalIndices,
    nomograms: &NomogramClassification,
    thresholds: &Thresholds,
) -> Resolution {
    let diagnosis = diagnose(m, indices, nomograms);
    let confidence = confidence(m, thresholds);

    tracing::debug!(
        diagnosis = diagnosis.label(),
        confidence = confidence.label(),
        "resolved diagnosis"
    );

    Resolution {
        diagnosis,
        confidence,
    }
}

/// Rate how far the study itself can be trusted, independent of the diagnosis.
pub fn confidence(m: &PatientMeasurement, thresholds: &Thresholds) -> Confidence {
    let cm = &m.cystometry;
    let pressure_gap = (cm.vesical_pressure - (cm.detrusor_pressure + cm.abdominal_pressure)).abs();

    let criteria = [
        m.flow.voided_volume > 200.0,
        cm.bladder_capacity > 150.0,
        pressure_gap < thresholds.confidence_pressure_tolerance,
    ];

    Confidence::from_criteria_met(criteria.into_iter().filter(|met| *met).count())
}

fn diagnose(
    m: &PatientMeasurement,
    indices: &ClinicalIndices,
    nomograms: &NomogramClassification,
) -> Diagnosis {
    let qmax = m.flow.peak_flow;
    let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;
    let obstruction = indices.obstruction_index;
    let closure = m.urethral_profile.closure_pressure;
    let contractions = m.cystometry.involuntary_contractions;

    let stress_signal =
        m.has_symptom(Symptom::StressIncontinence) || m.provocation.cough_test.is_positive();
    let sphincter_insufficient = closure < SPHINCTER_INSUFFICIENCY_CLOSURE;
    let obstructive_symptoms = m.any_symptom(Symptom::is_obstructive);
    let prolapse_history = m.any_history(History::is_prolapse_related);
    let male_bph = m.sex == Sex::Male && m.has_history(History::Bph);

    if (stress_signal && m.has_symptom(Symptom::Urgency)) || m.has_symptom(Symptom::MixedLeakage) {
        return match (contractions, sphincter_insufficient) {
            (true, true) => Diagnosis::MixedDetrusorSphincteric,
            (true, false) => Diagnosis::MixedUrgencyPredominant,
            (false, true) => Diagnosis::MixedEffortPredominant,
            (false, false) => Diagnosis::MixedUnspecified,
        };
    }

    if obstruction > 40.0 {
        return if m.emg.synergy == DetrusorSphincterSynergy::Dyssynergia {
            Diagnosis::DetrusorSphincterDyssynergia
        } else if male_bph {
            Diagnosis::BenignProstaticObstruction
        } else {
            Diagnosis::SubvesicalObstruction
        };
    }

    if m.sex == Sex::Female && prolapse_history && obstructive_symptoms {
        let criteria = [
            (10.0..15.0).contains(&qmax),
            pdet > 25.0 && pdet <= 50.0,
            matches!(
                nomograms.schafer,
                SchaferZone::ModerateObstruction | SchaferZone::Equivocal
            ),
            m.post_void_residual > 30.0,
            m.has_symptom(Symptom::PelvicHeaviness),
        ];
        if criteria.into_iter().filter(|met| *met).count() >= PROLAPSE_CRITERIA_REQUIRED {
            return Diagnosis::ProlapseRelatedObstruction;
        }
    }

    if obstruction > 15.0 && obstruction <= 40.0 && obstructive_symptoms {
        return if male_bph {
            Diagnosis::EarlyProstaticObstruction
        } else if m.sex == Sex::Female && prolapse_history {
            Diagnosis::ProlapseRelatedObstruction
        } else {
            Diagnosis::EquivocalSubvesicalObstruction
        };
    }

    if contractions {
        return if m.any_history(History::is_neurogenic_overactivity_cause) {
            Diagnosis::NeurogenicDetrusorOveractivity
        } else {
            Diagnosis::IdiopathicDetrusorOveractivity
        };
    }

    if stress_signal && sphincter_insufficient {
        return Diagnosis::SphinctericStressIncontinence;
    }

    if indices.contractility_index < 100.0 && qmax < 12.0 {
        return Diagnosis::DetrusorUnderactivity;
    }

    if m.cystometry.bladder_capacity < 200.0 && m.has_symptom(Symptom::BladderPain) {
        return Diagnosis::PainfulBladderSyndrome;
    }

    if m.post_void_residual > 100.0 {
        return Diagnosis::IncompleteEmptying;
    }

    Diagnosis::Normal
}
