use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProvocationTests {
    pub cough_test: ProvocationResult,
    pub valsalva_test: ProvocationResult,
    /// cmH2O.
    pub stress_test_pressure: f64,
    /// Abdominal leak point pressure, cmH2O.
    pub abdominal_leak_point_pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProvocationResult {
    Negative,
    WeakPositive,
    StrongPositive,
}

impl ProvocationResult {
    pub fn is_positive(self) -> bool {
        self != ProvocationResult::Negative
    }
}

impl Default for ProvocationTests {
    fn default() -> Self {
        Self {
            cough_test: ProvocationResult::Negative,
            valsalva_test: ProvocationResult::Negative,
            stress_test_pressure: 0.0,
            abdominal_leak_point_pressure: 0.0,
        }
    }
}
