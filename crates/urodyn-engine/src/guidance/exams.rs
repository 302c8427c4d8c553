use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;
use urodyn_core::models::vocabulary::{History, Symptom};

use crate::{GuidanceGenerator, GuidanceSection};

pub struct ComplementaryExams;

impl GuidanceGenerator for ComplementaryExams {
    fn section(&self) -> GuidanceSection {
        GuidanceSection::ComplementaryExams
    }

    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
        let mut items = Vec::new();

        if dx.is_prostatic_obstruction() {
            items.push(GuidanceItem::new(
                "Transrectal prostate ultrasound",
                "Transrectal ultrasound measures prostate volume, assesses morphology (median lobe) and guides treatment strategy. A volume > 40 ml suggests significant BPH. The reference exam for surgical planning.",
            ));
            items.push(GuidanceItem::new(
                "PSA and digital rectal examination",
                "PSA (prostate-specific antigen) and digital rectal examination screen for associated prostate cancer. PSA > 4 ng/ml or an abnormal examination requires prostate biopsies before any BPH treatment.",
            ));
        }

        if dx.is_prolapse_related() {
            items.push(GuidanceItem::new(
                "Dynamic pelvic MRI",
                "Dynamic pelvic MRI precisely assesses genital prolapse and its impact on bladder emptying. The reference exam for quantifying multi-compartment prolapse and planning surgery if needed.",
            ));
            items.push(GuidanceItem::new(
                "Bladder ultrasound to quantify PVR",
                "Ultrasound measurement of the post-void residual tracks the impact of the obstruction on emptying and the effect of conservative treatment. Recommended every 3-6 months.",
            ));
        }

        if m.post_void_residual > 100.0 {
            items.push(GuidanceItem::new(
                "Renal and bladder ultrasound",
                "Renal ultrasound looks for pelvicalyceal dilatation (upper tract repercussion). Bladder ultrasound assesses wall thickness and diverticula and confirms the post-void residual. Repeated every six months.",
            ));
        }

        // Triggered by history only; a neurogenic diagnosis alone does not add it.
        if m.has_history(History::MultipleSclerosis) || m.has_history(History::SpinalCordInjury) {
            items.push(GuidanceItem::new(
                "Spinal MRI",
                "Spinal MRI looks for spinal cord lesions (compression, demyelination, syringomyelia) that can explain the voiding dysfunction. Required before any invasive treatment in a neurological context.",
            ));
        }

        if dx.is_stress_incontinence() || dx.is_mixed() {
            items.push(GuidanceItem::new(
                "Dynamic pelvic MRI",
                "Dynamic pelvic MRI assesses associated prolapse, urethral mobility and the integrity of the support structures. Used to plan anti-incontinence surgery and detect asymptomatic prolapse. The reference exam before surgery.",
            ));
        }

        if m.has_symptom(Symptom::Hematuria) || dx.is_painful_bladder() {
            items.push(GuidanceItem::new(
                "Diagnostic cystoscopy",
                "Cystoscopy examines the bladder mucosa directly and diagnoses inflammatory (interstitial cystitis), tumoral or lithiasic lesions. Required for haematuria or chronic bladder pain.",
            ));
        }

        items
    }
}
