use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Urethral pressure profile. Pressures in cmH2O, lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UrethralPressureProfile {
    pub max_urethral_pressure: f64,
    pub urethral_length: f64,
    pub closure_pressure: f64,
    pub functional_length: f64,
    /// Pressure transmission ratio, %.
    pub pressure_transmission: f64,
    pub dynamic_profile: DynamicProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DynamicProfile {
    Normal,
    Increased,
    Decreased,
    Deficient,
    Stenosis,
    Fibrosis,
    Variable,
}

impl Default for UrethralPressureProfile {
    fn default() -> Self {
        Self {
            max_urethral_pressure: 60.0,
            urethral_length: 200.0,
            closure_pressure: 45.0,
            functional_length: 25.0,
            pressure_transmission: 80.0,
            dynamic_profile: DynamicProfile::Normal,
        }
    }
}
