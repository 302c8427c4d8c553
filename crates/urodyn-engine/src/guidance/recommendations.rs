use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;

use crate::resolver::SPHINCTER_INSUFFICIENCY_CLOSURE;
use crate::{GuidanceGenerator, GuidanceSection};

/// Management recommendations, first-line options first.
pub struct Recommendations;

impl GuidanceGenerator for Recommendations {
    fn section(&self) -> GuidanceSection {
        GuidanceSection::Recommendations
    }

    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
        let mut items = Vec::new();
        let pdet = m.pressure_flow.detrusor_pressure_at_peak_flow;

        if dx.is_prostatic_obstruction() {
            items.push(GuidanceItem::new(
                "First-line medical treatment with alpha-blockers",
                "Alpha-blockers (tamsulosin, alfuzosin) relax the smooth muscle fibres of the prostate and bladder neck, improving urinary flow. Rapid onset (a few days) with symptomatic improvement in 60-70% of cases.",
            ));
            if pdet > 60.0 {
                items.push(GuidanceItem::new(
                    "Consider surgical treatment (TURP) if medical treatment fails",
                    "Transurethral resection of the prostate (TURP) is indicated for severe obstruction (Pdet.Qmax > 60 cmH2O) or failure of medical treatment. Qmax improves by 100-200% with significant symptom reduction in 85-90% of cases.",
                ));
            }
        }

        if dx.is_prolapse_related() {
            items.push(GuidanceItem::new(
                "First-line specialised pelvic floor rehabilitation",
                "Individualised programme delivered by a specialised physiotherapist. Aims to strengthen the pelvic floor muscles, improve sphincter control and optimise voiding coordination. Indicated from the first signs of dysfunction, before any surgical treatment.",
            ));
            items.push(GuidanceItem::new(
                "Complete pelvic assessment with POP-Q staging",
                "The POP-Q (Pelvic Organ Prolapse Quantification) system precisely grades genital prolapse and supports treatment planning. A standardised clinical examination required before any treatment.",
            ));
            if m.post_void_residual > 50.0 || pdet > 40.0 {
                items.push(GuidanceItem::new(
                    "Surgical prolapse treatment if rehabilitation fails or symptoms are disabling",
                    "Prolapse treatment (pessary or surgery) is indicated for obstructive symptoms persisting despite rehabilitation, or when the prolapse compromises bladder emptying (PVR > 50 ml, Pdet > 40 cmH2O).",
                ));
            }
        }

        if dx.is_detrusor_overactivity() || dx.is_mixed() {
            items.push(GuidanceItem::new(
                "Bladder training and behavioural techniques",
                "Bladder training combines patient education, distraction techniques, timed voiding and pelvic floor strengthening. Effective on urgency symptoms in 60-80% of patients with improved quality of life.",
            ));
            items.push(GuidanceItem::new(
                "Anticholinergics if behavioural measures fail",
                "Anticholinergics (oxybutynin, solifenacin, fesoterodine) block detrusor muscarinic receptors and reduce involuntary contractions. Effective on urgency in 70% of cases, with side effects (dry mouth, constipation) in 30% of patients.",
            ));
        }

        if dx.is_underactivity() {
            items.push(GuidanceItem::new(
                "Teach double-voiding manoeuvres",
                "The patient attempts a second void a few minutes after the first to improve bladder emptying.",
            ));
            items.push(GuidanceItem::new(
                "Clean intermittent self-catheterisation if PVR > 100 ml persists",
                "Indicated for chronic post-void residual to prevent infection and upper tract dilatation.",
            ));
            items.push(GuidanceItem::new(
                "Regular monitoring of renal function and the upper urinary tract",
                "Essential with chronic incomplete emptying to prevent silent renal complications.",
            ));
        }

        if dx.is_stress_incontinence() || dx.is_mixed() {
            if dx.is_mixed() {
                items.push(GuidanceItem::new(
                    "First-line specialised pelvic floor rehabilitation, targeted if effort leakage persists",
                    "Pelvic floor rehabilitation by a specialised physiotherapist includes Kegel exercises, biofeedback and electrostimulation. 60-70% effective on mild to moderate stress incontinence. In mixed incontinence, targeted pelvic floor strengthening complements behavioural techniques.",
                ));
                items.push(GuidanceItem::new(
                    "Prolapse assessment if incontinence persists despite treatment",
                    "An underestimated prolapse can undermine conservative or drug treatment, particularly in women with a gynaecological history.",
                ));
            } else {
                items.push(GuidanceItem::new(
                    "First-line specialised pelvic floor rehabilitation",
                    "Pelvic floor rehabilitation by a specialised physiotherapist includes Kegel exercises, biofeedback and electrostimulation. 60-70% effective on mild to moderate stress incontinence. Recommended duration: 3-6 months with twice-weekly sessions.",
                ));
            }
            if m.urethral_profile.closure_pressure < SPHINCTER_INSUFFICIENCY_CLOSURE {
                items.push(GuidanceItem::new(
                    "Anti-incontinence surgery (mid-urethral sling)",
                    "Mid-urethral slings (TVT, TOT) are indicated for sphincteric insufficiency (closure pressure < 20 cmH2O) or failed rehabilitation. Success rate of 85-90% at 5 years with low morbidity. The reference minimally invasive technique.",
                ));
            }
        }

        if dx.is_dyssynergia() {
            items.push(GuidanceItem::new(
                "Clean intermittent self-catheterisation",
                "Intermittent self-catheterisation (4-6 times a day) empties the bladder completely, prevents urinary infections and protects the upper urinary tract. The reference technique in dyssynergia, with patient training and regular follow-up.",
            ));
            items.push(GuidanceItem::new(
                "Anticholinergics to control detrusor overactivity",
                "In dyssynergia, anticholinergics lower high intravesical pressures and protect the upper urinary tract. Always combined with self-catheterisation to avoid retention. Renal function monitoring required.",
            ));
            items.push(GuidanceItem::new(
                "Intradetrusor botulinum toxin for refractory detrusor overactivity or anticholinergic intolerance",
                "Used second-line, botulinum toxin reduces detrusor overactivity when anticholinergics are ineffective or poorly tolerated.",
            ));
            items.push(GuidanceItem::new(
                "Perineal EMG advised to confirm true dyssynergia",
                "Sphincter electromyography distinguishes true detrusor-sphincter dyssynergia from abdominal straining or artefact.",
            ));
        }

        items
    }
}
