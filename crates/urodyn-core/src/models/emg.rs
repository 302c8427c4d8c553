use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Perineal sphincter electromyography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmgProfile {
    pub baseline_activity: BaselineActivity,
    pub voluntary_recruitment: VoluntaryRecruitment,
    pub sphincter_reflex: SphincterReflex,
    pub synergy: DetrusorSphincterSynergy,
    pub fatigability: Fatigability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BaselineActivity {
    Normal,
    Increased,
    Decreased,
    Absent,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoluntaryRecruitment {
    Normal,
    Decreased,
    Absent,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SphincterReflex {
    Present,
    Absent,
    Decreased,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DetrusorSphincterSynergy {
    Normal,
    Dyssynergia,
    PseudoDyssynergia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Fatigability {
    Normal,
    Increased,
}

impl Default for EmgProfile {
    fn default() -> Self {
        Self {
            baseline_activity: BaselineActivity::Normal,
            voluntary_recruitment: VoluntaryRecruitment::Normal,
            sphincter_reflex: SphincterReflex::Present,
            synergy: DetrusorSphincterSynergy::Normal,
            fatigability: Fatigability::Normal,
        }
    }
}
