use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free uroflowmetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlowStudy {
    /// Qmax, ml/s.
    pub peak_flow: f64,
    /// Qmean, ml/s.
    pub mean_flow: f64,
    /// ml.
    pub voided_volume: f64,
    /// s.
    pub voiding_time: f64,
    /// s.
    pub latency_time: f64,
    /// s. Absent when the flow curve was not time-stamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_peak_flow: Option<f64>,
    pub curve_shape: FlowCurveShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FlowCurveShape {
    Normal,
    Plateau,
    Intermittent,
    Bell,
}

impl FlowCurveShape {
    pub fn label(self) -> &'static str {
        match self {
            FlowCurveShape::Normal => "normal",
            FlowCurveShape::Plateau => "plateau",
            FlowCurveShape::Intermittent => "intermittent",
            FlowCurveShape::Bell => "bell-shaped",
        }
    }
}

impl Default for FlowStudy {
    fn default() -> Self {
        Self {
            peak_flow: 15.0,
            mean_flow: 10.0,
            voided_volume: 300.0,
            voiding_time: 30.0,
            latency_time: 5.0,
            time_to_peak_flow: Some(10.0),
            curve_shape: FlowCurveShape::Normal,
        }
    }
}
