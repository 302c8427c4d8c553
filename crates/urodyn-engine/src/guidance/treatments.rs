use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;
use urodyn_core::models::vocabulary::History;

use crate::{GuidanceGenerator, GuidanceSection};

/// Drug and procedural treatment options.
pub struct Treatments;

impl GuidanceGenerator for Treatments {
    fn section(&self) -> GuidanceSection {
        GuidanceSection::Treatments
    }

    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
        let mut items = Vec::new();
        let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;

        if dx.is_detrusor_overactivity() || dx.is_mixed() {
            items.push(GuidanceItem::new(
                "Solifenacin 5-10 mg/day",
                "Solifenacin is an M3-selective anticholinergic with a long half-life (45-68 h) allowing once-daily dosing. More effective than oxybutynin with fewer side effects. Reduces urgency episodes by 50-70%.",
            ));
            items.push(GuidanceItem::new(
                "Mirabegron 50 mg/day if anticholinergics are contraindicated",
                "Mirabegron is a beta-3 adrenergic agonist that relaxes the detrusor without anticholinergic effect. Indicated in elderly patients (cognitive risk), glaucoma or anticholinergic intolerance. Comparable efficacy with better tolerability.",
            ));
        }

        if dx.is_underactivity() {
            items.push(GuidanceItem::new(
                "No validated pharmacological treatment",
                "No drug has shown significant efficacy in restoring detrusor contractility.",
            ));
            items.push(GuidanceItem::new(
                "Trial of parasympathomimetics (unproven benefit, rarely used)",
                "Detrusor stimulants (e.g. bethanechol) are sometimes tried as a last resort but are poorly effective and poorly tolerated.",
            ));
        }

        if dx.is_prostatic_obstruction() {
            items.push(GuidanceItem::new(
                "Tamsulosin 0.4 mg/day",
                "Tamsulosin is an alpha-1A selective alpha-blocker taken once daily. Rapid improvement of symptoms (1-2 weeks) and urinary flow. Side effects: orthostatic hypotension (5%), ejaculatory disorders (10%).",
            ));
            if m.urethral_profile.max_urethral_pressure > 80.0 {
                items.push(GuidanceItem::new(
                    "Add finasteride 5 mg/day if prostate > 40 ml",
                    "Finasteride (5-alpha-reductase inhibitor) reduces prostate volume by 20-30% over 6-12 months. Indicated for volumes > 40 ml to prevent progression and reduce the risk of acute retention. Effects on libido (2-5%) and erectile function (3-8%).",
                ));
            }
        }

        if dx.is_prolapse_related() {
            if m.age > 70 || m.has_history(History::SurgicalContraindication) {
                items.push(GuidanceItem::new(
                    "Pessary if surgery is contraindicated",
                    "A pessary is an intravaginal device that supports the prolapsed organs. Indicated for elderly patients, those at high surgical risk or those declining surgery. 60-80% effective on obstructive symptoms and well tolerated.",
                ));
            }
            if pdet > 40.0 || m.post_void_residual > 80.0 {
                items.push(GuidanceItem::new(
                    "Surgical prolapse repair if conservative treatment fails",
                    "Prolapse repair (sacrocolpopexy, colposuspension) is indicated when rehabilitation fails and obstructive symptoms are disabling. Symptoms improve in 85-90% of cases with restoration of normal emptying.",
                ));
            }
        }

        if dx.is_stress_incontinence() || dx.is_mixed() {
            items.push(GuidanceItem::new(
                "Duloxetine 40 mg twice daily",
                "Duloxetine (serotonin-noradrenaline reuptake inhibitor) raises urethral sphincter tone through a central action. Halves incontinence episodes in 60% of patients. Side effects: nausea (25%), fatigue (15%). Second-line treatment.",
            ));
        }

        items
    }
}
