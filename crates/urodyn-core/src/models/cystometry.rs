use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Filling cystometry. Volumes in ml, pressures in cmH2O, compliance in
/// ml/cmH2O, fill rate in ml/min.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FillingCystometry {
    pub bladder_capacity: f64,
    pub detrusor_pressure: f64,
    pub abdominal_pressure: f64,
    /// Must equal `detrusor_pressure + abdominal_pressure`.
    pub vesical_pressure: f64,
    pub compliance: f64,
    pub involuntary_contractions: bool,
    pub sensation: Sensation,
    pub first_desire: f64,
    pub normal_desire: f64,
    pub maximum_capacity: f64,
    pub fill_rate: f64,
    pub leak_pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sensation {
    Normal,
    Increased,
    Decreased,
    Absent,
    Hyperesthesia,
    Variable,
}

/// Filling repeated at three infusion rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FillRateCystometry {
    pub slow: FillRateRun,
    pub fast: FillRateRun,
    pub physiologic: FillRateRun,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FillRateRun {
    pub compliance: f64,
    pub contractions: bool,
    pub sensation: Sensation,
}

impl Default for FillingCystometry {
    fn default() -> Self {
        Self {
            bladder_capacity: 400.0,
            detrusor_pressure: 30.0,
            abdominal_pressure: 15.0,
            vesical_pressure: 45.0,
            compliance: 20.0,
            involuntary_contractions: false,
            sensation: Sensation::Normal,
            first_desire: 150.0,
            normal_desire: 250.0,
            maximum_capacity: 400.0,
            fill_rate: 50.0,
            leak_pressure: 0.0,
        }
    }
}

impl Default for FillRateCystometry {
    fn default() -> Self {
        let run = |compliance| FillRateRun {
            compliance,
            contractions: false,
            sensation: Sensation::Normal,
        };
        Self {
            slow: run(22.0),
            fast: run(18.0),
            physiologic: run(20.0),
        }
    }
}
