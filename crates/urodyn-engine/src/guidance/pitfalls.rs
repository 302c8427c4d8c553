use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::flow::FlowCurveShape;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;

use crate::resolver::SPHINCTER_INSUFFICIENCY_CLOSURE;
use crate::{GuidanceGenerator, GuidanceSection};

/// Interpretation traps worth keeping in mind for this record.
pub struct Pitfalls;

impl GuidanceGenerator for Pitfalls {
    fn section(&self) -> GuidanceSection {
        GuidanceSection::Pitfalls
    }

    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
        let mut items = vec![GuidanceItem::new(
            "Do not interpret a low Qmax with a small voided volume",
            "A Qmax < 15 ml/s is only meaningful when the voided volume exceeds 150 ml. With a small volume, Qmax can be artificially low without any pathological meaning. Always read Qmax together with the voided volume.",
        )];

        if dx.is_prolapse_related() {
            items.push(GuidanceItem::new(
                "Do not overlook a moderate prolapse that may mask an obstruction",
                "A moderate genital prolapse can cause a subtle functional obstruction that is often clinically underestimated. Obstructive symptoms with a prolapse history and borderline urodynamic indices should raise this cause.",
            ));
            items.push(GuidanceItem::new(
                "Always correlate clinical and urodynamic findings",
                "In prolapse-related obstruction, urodynamic indices may fall in the equivocal zone. Interpretation must combine symptoms, clinical examination and gynaecological history.",
            ));
        }

        if m.flow.curve_shape == FlowCurveShape::Intermittent {
            items.push(GuidanceItem::new(
                "Distinguish true dyssynergia from abdominal straining",
                "An intermittent flow curve may come from detrusor-sphincter dyssynergia (pathological) or voluntary abdominal straining (artefact). Perineal EMG and abdominal pressure analysis tell them apart.",
            ));
        }

        if m.cystometry.involuntary_contractions {
            items.push(GuidanceItem::new(
                "Rule out rapid-filling artefacts",
                "Detrusor contractions can be induced by filling too fast (> 50 ml/min) or by catheter irritation. Confirm overactivity with slow filling and repeat the study if needed.",
            ));
        }

        if dx.is_underactivity() {
            items.push(GuidanceItem::new(
                "Do not mistake underactivity for obstruction when symptoms overlap",
                "Obstruction and an underactive bladder can present with identical symptoms; only the pressure-flow study tells them apart.",
            ));
            items.push(GuidanceItem::new(
                "Rule out a drug cause (anticholinergics, opioids)",
                "Some treatments depress the detrusor and can mimic true underactivity.",
            ));
        }

        if dx.is_stress_incontinence() || dx.is_mixed() {
            if dx.is_mixed() || m.urethral_profile.closure_pressure < SPHINCTER_INSUFFICIENCY_CLOSURE {
                items.push(GuidanceItem::new(
                    "Do not overlook an associated sphincteric component when closure pressure is low",
                    "A closure pressure < 20 cmH2O points to sphincter weakness that can explain effort leakage, even when detrusor overactivity predominates.",
                ));
            }
            if dx.is_mixed() {
                items.push(GuidanceItem::new(
                    "Distinguish true effort leakage from poorly controlled urgency",
                    "Some patients report effort leakage that is actually urgency triggered by movement or effort. Careful history taking and provocation tests make the distinction.",
                ));
            }
        }

        items
    }
}
