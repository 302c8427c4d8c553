use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;
use urodyn_core::models::vocabulary::History;

use crate::{GuidanceGenerator, GuidanceSection};

/// Follow-up schedule. Always starts with the voiding diary.
pub struct Surveillance;

impl GuidanceGenerator for Surveillance {
    fn section(&self) -> GuidanceSection {
        GuidanceSection::Surveillance
    }

    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
        let mut items = vec![GuidanceItem::new(
            "3-day voiding diary, repeated after 3 months of treatment",
            "Detailed 72-hour record of voiding times, voided volumes, urgency episodes and leaks. Measures treatment efficacy and symptom progression. Repeat 3 months after starting treatment to document improvement or adjust management.",
        )];

        if m.post_void_residual > 50.0 {
            items.push(GuidanceItem::new(
                "Ultrasound measurement of the post-void residual",
                "Suprapubic ultrasound monitoring of the PVR detects worsening emptying. Monthly if PVR > 100 ml, quarterly if PVR is 50-100 ml. A repeated PVR > 150 ml calls for treatment review.",
            ));
        }

        if dx.is_prolapse_related() {
            items.push(GuidanceItem::new(
                "Free uroflowmetry at 6 months",
                "A control free uroflowmetry documents flow improvement after conservative prolapse treatment. Target: Qmax > 15 ml/s with an improved flow curve shape.",
            ));
        }

        if m.has_history(History::SpinalCordInjury) || m.has_history(History::SpinaBifida) {
            items.push(GuidanceItem::new(
                "Renal function (creatinine, ultrasound) every six months",
                "In neurogenic bladder, renal monitoring is crucial as 10-15% develop chronic kidney disease. Serum creatinine, renal ultrasound and sometimes DMSA scintigraphy. Target: bladder pressures < 40 cmH2O.",
            ));
        }

        if dx.is_outlet_obstruction() {
            items.push(GuidanceItem::new(
                "Annual free uroflowmetry",
                "Yearly follow-up of voiding quality. Free uroflowmetry detects recurrent obstruction or progressive functional decline. A Qmax < 10 ml/s suggests worsening and calls for reassessment. A simple, non-invasive office exam.",
            ));
        }

        items
    }
}
