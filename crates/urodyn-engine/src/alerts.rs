//! Safety alerts raised straight from the measurements.
//!
//! Alerts do not depend on the diagnosis or on the validation outcome; a record
//! with errors still gets them.

use serde::{Deserialize, Serialize};
use urodyn_core::models::patient::{PatientMeasurement, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalAlert {
    /// Post-void residual above 200 ml.
    HighResidual,
    /// Pdet.Qmax above 80 cmH2O.
    HighDetrusorPressure,
    /// Compliance below 10 ml/cmH2O.
    VeryLowCompliance,
    /// Closure pressure below 10 cmH2O in a woman.
    SevereSphincterInsufficiency,
}

impl CriticalAlert {
    pub fn message(self) -> &'static str {
        match self {
            CriticalAlert::HighResidual => {
                "Very high post-void residual: risk of chronic retention and upper urinary tract damage"
            }
            CriticalAlert::HighDetrusorPressure => {
                "Very high detrusor pressure: risk of upper urinary tract repercussions"
            }
            CriticalAlert::VeryLowCompliance => {
                "Severely reduced bladder compliance: risk of renal function deterioration"
            }
            CriticalAlert::SevereSphincterInsufficiency => {
                "Severe sphincteric insufficiency: risk of major incontinence"
            }
        }
    }
}

pub fn detect_critical_alerts(m: &PatientMeasurement) -> Vec<CriticalAlert> {
    let mut alerts = Vec::new();

    if m.post_void_residual > 200.0 {
        alerts.push(CriticalAlert::HighResidual);
    }
    if m.pressure_flow.detrusor_pressure_at_peak_flow > 80.0 {
        alerts.push(CriticalAlert::HighDetrusorPressure);
    }
    if m.cystometry.compliance < 10.0 {
        alerts.push(CriticalAlert::VeryLowCompliance);
    }
    if m.sex == Sex::Female && m.urethral_profile.closure_pressure < 10.0 {
        alerts.push(CriticalAlert::SevereSphincterInsufficiency);
    }

    alerts
}
