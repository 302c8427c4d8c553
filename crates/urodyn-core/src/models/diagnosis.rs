use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Primary urodynamic diagnosis.
///
/// The variant is the dispatch key for guidance; the human-readable text
/// comes from [`Diagnosis::label`] and never drives any logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Diagnosis {
    /// Mixed incontinence with both detrusor overactivity and low closure pressure.
    MixedDetrusorSphincteric,
    MixedUrgencyPredominant,
    MixedEffortPredominant,
    MixedUnspecified,
    DetrusorSphincterDyssynergia,
    BenignProstaticObstruction,
    SubvesicalObstruction,
    ProlapseRelatedObstruction,
    EarlyProstaticObstruction,
    EquivocalSubvesicalObstruction,
    NeurogenicDetrusorOveractivity,
    IdiopathicDetrusorOveractivity,
    SphinctericStressIncontinence,
    DetrusorUnderactivity,
    PainfulBladderSyndrome,
    IncompleteEmptying,
    Normal,
}

impl Diagnosis {
    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::MixedDetrusorSphincteric => {
                "mixed incontinence (detrusor overactivity + sphincteric insufficiency)"
            }
            Diagnosis::MixedUrgencyPredominant => "mixed incontinence, urgency-predominant",
            Diagnosis::MixedEffortPredominant => "mixed incontinence, effort-predominant",
            Diagnosis::MixedUnspecified => "mixed incontinence",
            Diagnosis::DetrusorSphincterDyssynergia => {
                "detrusor-sphincter dyssynergia with functional obstruction"
            }
            Diagnosis::BenignProstaticObstruction => "benign prostatic obstruction",
            Diagnosis::SubvesicalObstruction => "subvesical obstruction",
            Diagnosis::ProlapseRelatedObstruction => {
                "moderate subvesical obstruction secondary to genital prolapse"
            }
            Diagnosis::EarlyProstaticObstruction => "early prostatic obstruction",
            Diagnosis::EquivocalSubvesicalObstruction => "equivocal subvesical obstruction",
            Diagnosis::NeurogenicDetrusorOveractivity => "neurogenic detrusor overactivity",
            Diagnosis::IdiopathicDetrusorOveractivity => "idiopathic detrusor overactivity",
            Diagnosis::SphinctericStressIncontinence => {
                "effort incontinence due to sphincteric insufficiency"
            }
            Diagnosis::DetrusorUnderactivity => "detrusor hypocontractility",
            Diagnosis::PainfulBladderSyndrome => "painful bladder syndrome / interstitial cystitis",
            Diagnosis::IncompleteEmptying => "incomplete bladder emptying",
            Diagnosis::Normal => "normal vesico-sphincteric function",
        }
    }

    pub fn is_mixed(self) -> bool {
        matches!(
            self,
            Diagnosis::MixedDetrusorSphincteric
                | Diagnosis::MixedUrgencyPredominant
                | Diagnosis::MixedEffortPredominant
                | Diagnosis::MixedUnspecified
        )
    }

    pub fn is_prostatic_obstruction(self) -> bool {
        matches!(
            self,
            Diagnosis::BenignProstaticObstruction | Diagnosis::EarlyProstaticObstruction
        )
    }

    pub fn is_prolapse_related(self) -> bool {
        self == Diagnosis::ProlapseRelatedObstruction
    }

    /// Anatomical outlet obstruction. Dyssynergia (a functional obstruction)
    /// is not part of this group.
    pub fn is_outlet_obstruction(self) -> bool {
        matches!(
            self,
            Diagnosis::BenignProstaticObstruction
                | Diagnosis::SubvesicalObstruction
                | Diagnosis::ProlapseRelatedObstruction
                | Diagnosis::EarlyProstaticObstruction
                | Diagnosis::EquivocalSubvesicalObstruction
        )
    }

    pub fn is_detrusor_overactivity(self) -> bool {
        matches!(
            self,
            Diagnosis::NeurogenicDetrusorOveractivity | Diagnosis::IdiopathicDetrusorOveractivity
        )
    }

    pub fn is_stress_incontinence(self) -> bool {
        self == Diagnosis::SphinctericStressIncontinence
    }

    pub fn is_dyssynergia(self) -> bool {
        self == Diagnosis::DetrusorSphincterDyssynergia
    }

    pub fn is_underactivity(self) -> bool {
        self == Diagnosis::DetrusorUnderactivity
    }

    pub fn is_painful_bladder(self) -> bool {
        self == Diagnosis::PainfulBladderSyndrome
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl Confidence {
    /// Map the number of satisfied quality criteria (out of three) to a rating.
    pub fn from_criteria_met(count: usize) -> Self {
        match count {
            3.. => Confidence::High,
            2 => Confidence::Moderate,
            _ => Confidence::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Moderate => "Moderate",
            Confidence::Low => "Low",
        }
    }
}

/// Schafer nomogram zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SchaferZone {
    StrongObstruction,
    ModerateObstruction,
    Equivocal,
    Normal,
}

impl SchaferZone {
    pub fn label(self) -> &'static str {
        match self {
            SchaferZone::StrongObstruction => "Strong obstruction",
            SchaferZone::ModerateObstruction => "Moderate obstruction",
            SchaferZone::Equivocal => "Equivocal",
            SchaferZone::Normal => "Normal",
        }
    }
}

/// Abrams-Griffiths nomogram zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbramsGriffithsZone {
    Obstructed,
    Equivocal,
    NotObstructed,
}

impl AbramsGriffithsZone {
    pub fn label(self) -> &'static str {
        match self {
            AbramsGriffithsZone::Obstructed => "Obstructed",
            AbramsGriffithsZone::Equivocal => "Equivocal",
            AbramsGriffithsZone::NotObstructed => "Not obstructed",
        }
    }
}
