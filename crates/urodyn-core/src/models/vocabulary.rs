//! Controlled vocabularies for symptoms, history and current treatments.
//!
//! Every tag knows which sex it applies to. The validator uses that to flag
//! cross-sex tags; the resolver and the guidance generators use the category
//! predicates defined here instead of re-listing tags.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    Urgency,
    Frequency,
    Nocturia,
    Dysuria,
    WeakStream,
    IncompleteEmptying,
    StressIncontinence,
    UrgeIncontinence,
    CoughLeakage,
    VoidingPain,
    RecurrentUrinaryInfections,
    Hematuria,
    UrinaryRetention,
    NocturnalEnuresis,
    DaytimeIncontinence,
    BladderPain,
    PelvicHeaviness,
    Straining,
    ContinuousLeakage,
    LossOfControl,
    BladderDistension,
    HypogastricPain,
    ReductionManeuvers,
    DeepSleep,
    AbsentSensation,
    MixedLeakage,
    Prostatism,
}

impl Symptom {
    pub const ALL: &'static [Symptom] = &[
        Symptom::Urgency,
        Symptom::Frequency,
        Symptom::Nocturia,
        Symptom::Dysuria,
        Symptom::WeakStream,
        Symptom::IncompleteEmptying,
        Symptom::StressIncontinence,
        Symptom::UrgeIncontinence,
        Symptom::CoughLeakage,
        Symptom::VoidingPain,
        Symptom::RecurrentUrinaryInfections,
        Symptom::Hematuria,
        Symptom::UrinaryRetention,
        Symptom::NocturnalEnuresis,
        Symptom::DaytimeIncontinence,
        Symptom::BladderPain,
        Symptom::PelvicHeaviness,
        Symptom::Straining,
        Symptom::ContinuousLeakage,
        Symptom::LossOfControl,
        Symptom::BladderDistension,
        Symptom::HypogastricPain,
        Symptom::ReductionManeuvers,
        Symptom::DeepSleep,
        Symptom::AbsentSensation,
        Symptom::MixedLeakage,
        Symptom::Prostatism,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Symptom::Urgency => "Urgency",
            Symptom::Frequency => "Frequency",
            Symptom::Nocturia => "Nocturia",
            Symptom::Dysuria => "Dysuria",
            Symptom::WeakStream => "Weak stream",
            Symptom::IncompleteEmptying => "Sensation of incomplete emptying",
            Symptom::StressIncontinence => "Stress incontinence",
            Symptom::UrgeIncontinence => "Urge incontinence",
            Symptom::CoughLeakage => "Leakage on coughing",
            Symptom::VoidingPain => "Painful voiding",
            Symptom::RecurrentUrinaryInfections => "Recurrent urinary infections",
            Symptom::Hematuria => "Hematuria",
            Symptom::UrinaryRetention => "Urinary retention",
            Symptom::NocturnalEnuresis => "Nocturnal enuresis",
            Symptom::DaytimeIncontinence => "Daytime incontinence",
            Symptom::BladderPain => "Bladder pain",
            Symptom::PelvicHeaviness => "Pelvic heaviness",
            Symptom::Straining => "Straining to void",
            Symptom::ContinuousLeakage => "Continuous leakage",
            Symptom::LossOfControl => "Loss of control",
            Symptom::BladderDistension => "Bladder distension",
            Symptom::HypogastricPain => "Hypogastric pain",
            Symptom::ReductionManeuvers => "Reduction manoeuvres",
            Symptom::DeepSleep => "Deep sleep",
            Symptom::AbsentSensation => "Absent sensation",
            Symptom::MixedLeakage => "Mixed leakage",
            Symptom::Prostatism => "Prostatism",
        }
    }

    /// `None` means the symptom is plausible for either sex.
    pub fn sex(self) -> Option<Sex> {
        match self {
            Symptom::Prostatism => Some(Sex::Male),
            Symptom::PelvicHeaviness => Some(Sex::Female),
            _ => None,
        }
    }

    /// Voiding-phase complaints that point towards outlet obstruction.
    pub fn is_obstructive(self) -> bool {
        matches!(
            self,
            Symptom::Dysuria | Symptom::WeakStream | Symptom::IncompleteEmptying | Symptom::Straining
        )
    }
}

/// Grouping of history tags, mirroring the intake form sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryCategory {
    Male,
    Female,
    Neurological,
    Urological,
    Oncological,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum History {
    // Male
    Bph,
    Prostatectomy,
    ProstateCancer,
    Prostatitis,
    ProstateResection,
    Adenomectomy,
    // Female
    Hysterectomy,
    CaesareanSection,
    DifficultDeliveries,
    Episiotomy,
    GenitalProlapse,
    Menopause,
    Cystocele,
    Rectocele,
    AntiIncontinenceSurgery,
    SlingErosion,
    MultipleDeliveries,
    // Neurological
    SpinalCordInjury,
    Paraplegia,
    MultipleSclerosis,
    ParkinsonsDisease,
    Stroke,
    Type2Diabetes,
    DiabeticNeuropathy,
    SpinaBifida,
    VentriculoperitonealShunt,
    MildCognitiveImpairment,
    NeurologicalRelapses,
    // Urological
    BladderStones,
    UrinaryInfections,
    RecurrentCystitis,
    UrethralTrauma,
    Urethrotomy,
    BladderCatheterisation,
    RetentionEpisodes,
    UrethralStricture,
    RecurrentUrinaryInfections,
    // Oncological
    CervicalCancer,
    PelvicRadiotherapy,
    RadicalHysterectomy,
    RadiationCystitis,
    // General
    Fibromyalgia,
    Constipation,
    FamilyHistoryOfEnuresis,
    SurgicalContraindication,
}

impl History {
    pub const ALL: &'static [History] = &[
        History::Bph,
        History::Prostatectomy,
        History::ProstateCancer,
        History::Prostatitis,
        History::ProstateResection,
        History::Adenomectomy,
        History::Hysterectomy,
        History::CaesareanSection,
        History::DifficultDeliveries,
        History::Episiotomy,
        History::GenitalProlapse,
        History::Menopause,
        History::Cystocele,
        History::Rectocele,
        History::AntiIncontinenceSurgery,
        History::SlingErosion,
        History::MultipleDeliveries,
        History::SpinalCordInjury,
        History::Paraplegia,
        History::MultipleSclerosis,
        History::ParkinsonsDisease,
        History::Stroke,
        History::Type2Diabetes,
        History::DiabeticNeuropathy,
        History::SpinaBifida,
        History::VentriculoperitonealShunt,
        History::MildCognitiveImpairment,
        History::NeurologicalRelapses,
        History::BladderStones,
        History::UrinaryInfections,
        History::RecurrentCystitis,
        History::UrethralTrauma,
        History::Urethrotomy,
        History::BladderCatheterisation,
        History::RetentionEpisodes,
        History::UrethralStricture,
        History::RecurrentUrinaryInfections,
        History::CervicalCancer,
        History::PelvicRadiotherapy,
        History::RadicalHysterectomy,
        History::RadiationCystitis,
        History::Fibromyalgia,
        History::Constipation,
        History::FamilyHistoryOfEnuresis,
        History::SurgicalContraindication,
    ];

    pub fn category(self) -> HistoryCategory {
        use History::*;
        match self {
            Bph | Prostatectomy | ProstateCancer | Prostatitis | ProstateResection
            | Adenomectomy => HistoryCategory::Male,
            Hysterectomy | CaesareanSection | DifficultDeliveries | Episiotomy
            | GenitalProlapse | Menopause | Cystocele | Rectocele | AntiIncontinenceSurgery
            | SlingErosion | MultipleDeliveries => HistoryCategory::Female,
            SpinalCordInjury | Paraplegia | MultipleSclerosis | ParkinsonsDisease | Stroke
            | Type2Diabetes | DiabeticNeuropathy | SpinaBifida | VentriculoperitonealShunt
            | MildCognitiveImpairment | NeurologicalRelapses => HistoryCategory::Neurological,
            BladderStones | UrinaryInfections | RecurrentCystitis | UrethralTrauma
            | Urethrotomy | BladderCatheterisation | RetentionEpisodes | UrethralStricture
            | RecurrentUrinaryInfections => HistoryCategory::Urological,
            CervicalCancer | PelvicRadiotherapy | RadicalHysterectomy | RadiationCystitis => {
                HistoryCategory::Oncological
            }
            Fibromyalgia | Constipation | FamilyHistoryOfEnuresis | SurgicalContraindication => {
                HistoryCategory::General
            }
        }
    }

    /// Oncological gynaecological history is female-restricted even though it
    /// is filed under the oncological section of the form.
    pub fn sex(self) -> Option<Sex> {
        match self.category() {
            HistoryCategory::Male => Some(Sex::Male),
            HistoryCategory::Female => Some(Sex::Female),
            _ => match self {
                History::CervicalCancer | History::RadicalHysterectomy => Some(Sex::Female),
                _ => None,
            },
        }
    }

    pub fn label(self) -> &'static str {
        use History::*;
        match self {
            Bph => "BPH",
            Prostatectomy => "Prostatectomy",
            ProstateCancer => "Prostate cancer",
            Prostatitis => "Prostatitis",
            ProstateResection => "Prostate resection",
            Adenomectomy => "Adenomectomy",
            Hysterectomy => "Hysterectomy",
            CaesareanSection => "Caesarean section",
            DifficultDeliveries => "Difficult deliveries",
            Episiotomy => "Episiotomy",
            GenitalProlapse => "Genital prolapse",
            Menopause => "Menopause",
            Cystocele => "Cystocele",
            Rectocele => "Rectocele",
            AntiIncontinenceSurgery => "Anti-incontinence surgery",
            SlingErosion => "Sling erosion",
            MultipleDeliveries => "Multiple deliveries",
            SpinalCordInjury => "Spinal cord injury",
            Paraplegia => "Paraplegia",
            MultipleSclerosis => "Multiple sclerosis",
            ParkinsonsDisease => "Parkinson's disease",
            Stroke => "Stroke",
            Type2Diabetes => "Type 2 diabetes",
            DiabeticNeuropathy => "Diabetic neuropathy",
            SpinaBifida => "Spina bifida",
            VentriculoperitonealShunt => "Ventriculoperitoneal shunt",
            MildCognitiveImpairment => "Mild cognitive impairment",
            NeurologicalRelapses => "Neurological relapses",
            BladderStones => "Bladder stones",
            UrinaryInfections => "Urinary infections",
            RecurrentCystitis => "Recurrent cystitis",
            UrethralTrauma => "Urethral trauma",
            Urethrotomy => "Urethrotomy",
            BladderCatheterisation => "Bladder catheterisation",
            RetentionEpisodes => "Retention episodes",
            UrethralStricture => "Urethral stricture",
            RecurrentUrinaryInfections => "Recurrent urinary infections",
            CervicalCancer => "Cervical cancer",
            PelvicRadiotherapy => "Pelvic radiotherapy",
            RadicalHysterectomy => "Radical hysterectomy",
            RadiationCystitis => "Radiation cystitis",
            Fibromyalgia => "Fibromyalgia",
            Constipation => "Constipation",
            FamilyHistoryOfEnuresis => "Family history of enuresis",
            SurgicalContraindication => "Surgical contraindication",
        }
    }

    /// Pelvic floor history that can produce a prolapse-related obstruction.
    pub fn is_prolapse_related(self) -> bool {
        matches!(
            self,
            History::GenitalProlapse
                | History::Cystocele
                | History::Rectocele
                | History::MultipleDeliveries
                | History::DifficultDeliveries
        )
    }

    /// Central neurological disease that makes detrusor overactivity neurogenic.
    pub fn is_neurogenic_overactivity_cause(self) -> bool {
        matches!(
            self,
            History::MultipleSclerosis | History::ParkinsonsDisease | History::Stroke
        )
    }

    pub fn is_neurological(self) -> bool {
        self.category() == HistoryCategory::Neurological
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Treatment {
    AlphaBlockers,
    FiveAlphaReductaseInhibitors,
    Anticholinergics,
    Beta3Agonists,
    Antispasmodics,
    HormoneReplacementTherapy,
    LocalOestrogens,
    Levodopa,
    Immunomodulators,
    Antidiabetics,
    Analgesics,
    AntiInflammatories,
    BladderInstillations,
    PelvicFloorRehabilitation,
    BladderTraining,
    IntermittentSelfCatheterisation,
    IndwellingCatheter,
    Pessary,
}

impl Treatment {
    pub const ALL: &'static [Treatment] = &[
        Treatment::AlphaBlockers,
        Treatment::FiveAlphaReductaseInhibitors,
        Treatment::Anticholinergics,
        Treatment::Beta3Agonists,
        Treatment::Antispasmodics,
        Treatment::HormoneReplacementTherapy,
        Treatment::LocalOestrogens,
        Treatment::Levodopa,
        Treatment::Immunomodulators,
        Treatment::Antidiabetics,
        Treatment::Analgesics,
        Treatment::AntiInflammatories,
        Treatment::BladderInstillations,
        Treatment::PelvicFloorRehabilitation,
        Treatment::BladderTraining,
        Treatment::IntermittentSelfCatheterisation,
        Treatment::IndwellingCatheter,
        Treatment::Pessary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Treatment::AlphaBlockers => "Alpha-blockers",
            Treatment::FiveAlphaReductaseInhibitors => "5-alpha-reductase inhibitors",
            Treatment::Anticholinergics => "Anticholinergics",
            Treatment::Beta3Agonists => "Beta-3 agonists",
            Treatment::Antispasmodics => "Antispasmodics",
            Treatment::HormoneReplacementTherapy => "Hormone replacement therapy",
            Treatment::LocalOestrogens => "Local oestrogens",
            Treatment::Levodopa => "L-DOPA",
            Treatment::Immunomodulators => "Immunomodulators",
            Treatment::Antidiabetics => "Antidiabetics",
            Treatment::Analgesics => "Analgesics",
            Treatment::AntiInflammatories => "Anti-inflammatories",
            Treatment::BladderInstillations => "Bladder instillations",
            Treatment::PelvicFloorRehabilitation => "Pelvic floor rehabilitation",
            Treatment::BladderTraining => "Bladder training",
            Treatment::IntermittentSelfCatheterisation => "Intermittent self-catheterisation",
            Treatment::IndwellingCatheter => "Indwelling catheter",
            Treatment::Pessary => "Pessary",
        }
    }

    pub fn sex(self) -> Option<Sex> {
        match self {
            Treatment::FiveAlphaReductaseInhibitors => Some(Sex::Male),
            Treatment::HormoneReplacementTherapy
            | Treatment::LocalOestrogens
            | Treatment::Pessary => Some(Sex::Female),
            _ => None,
        }
    }
}
