use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Tunable tolerances for the two vesical-pressure consistency checks.
///
/// The validator's gate and the resolver's confidence signal test the same
/// relationship (Pves = Pdet + Pabd) with different tolerances. They are kept
/// as two separate knobs and must not be merged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Allowed |Pves − (Pdet + Pabd)| before the validator reports an error.
    /// `0.0` means exact equality.
    pub vesical_pressure_epsilon: f64,
    /// |Pves − (Pdet + Pabd)| must be strictly below this for the pressure
    /// criterion of the confidence rating to count.
    pub confidence_pressure_tolerance: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            vesical_pressure_epsilon: 0.0,
            confidence_pressure_tolerance: 5.0,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), EngineError> {
        check("vesical_pressure_epsilon", self.vesical_pressure_epsilon)?;
        check("confidence_pressure_tolerance", self.confidence_pressure_tolerance)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidThreshold { name, value })
    }
}
