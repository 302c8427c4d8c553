//! Curated teaching cases: complete, coherent records with the diagnosis the
//! engine is expected to reach.

use std::sync::LazyLock;

use serde::Serialize;
use ts_rs::TS;
use urodyn_core::models::cystometry::{FillRateCystometry, FillRateRun, FillingCystometry, Sensation};
use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::emg::{
    BaselineActivity, DetrusorSphincterSynergy, EmgProfile, Fatigability, SphincterReflex,
    VoluntaryRecruitment,
};
use urodyn_core::models::flow::{FlowCurveShape, FlowStudy};
use urodyn_core::models::patient::{PatientMeasurement, Sex};
use urodyn_core::models::pressure_flow::PressureFlowStudy;
use urodyn_core::models::provocation::{ProvocationResult, ProvocationTests};
use urodyn_core::models::urethral::{DynamicProfile, UrethralPressureProfile};
use urodyn_core::models::vocabulary::{History, Symptom, Treatment};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ClinicalCase {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub expected_diagnosis: Diagnosis,
    pub measurement: PatientMeasurement,
}

/// Return all clinical cases, ordered by ID.
pub fn all_cases() -> &'static [ClinicalCase] {
    &CASES
}

pub fn get_case(id: u32) -> Option<&'static ClinicalCase> {
    CASES.iter().find(|c| c.id == id)
}

fn flow(
    peak: f64,
    mean: f64,
    volume: f64,
    time: f64,
    latency: f64,
    time_to_peak: f64,
    curve_shape: FlowCurveShape,
) -> FlowStudy {
    FlowStudy {
        peak_flow: peak,
        mean_flow: mean,
        voided_volume: volume,
        voiding_time: time,
        latency_time: latency,
        time_to_peak_flow: Some(time_to_peak),
        curve_shape,
    }
}

/// Filling cystometry at the standard 50 ml/min fill rate. `pressures` is
/// (Pdet, Pabd, Pves) and `desires` is (first, normal).
fn cystometry(
    capacity: f64,
    pressures: (f64, f64, f64),
    compliance: f64,
    involuntary_contractions: bool,
    sensation: Sensation,
    desires: (f64, f64),
) -> FillingCystometry {
    let (detrusor_pressure, abdominal_pressure, vesical_pressure) = pressures;
    let (first_desire, normal_desire) = desires;
    FillingCystometry {
        bladder_capacity: capacity,
        detrusor_pressure,
        abdominal_pressure,
        vesical_pressure,
        compliance,
        involuntary_contractions,
        sensation,
        first_desire,
        normal_desire,
        maximum_capacity: capacity,
        fill_rate: 50.0,
        leak_pressure: 0.0,
    }
}

fn urethral(
    max_pressure: f64,
    length: f64,
    closure: f64,
    functional_length: f64,
    transmission: f64,
    dynamic_profile: DynamicProfile,
) -> UrethralPressureProfile {
    UrethralPressureProfile {
        max_urethral_pressure: max_pressure,
        urethral_length: length,
        closure_pressure: closure,
        functional_length,
        pressure_transmission: transmission,
        dynamic_profile,
    }
}

fn emg(
    baseline_activity: BaselineActivity,
    voluntary_recruitment: VoluntaryRecruitment,
    sphincter_reflex: SphincterReflex,
    synergy: DetrusorSphincterSynergy,
    fatigability: Fatigability,
) -> EmgProfile {
    EmgProfile {
        baseline_activity,
        voluntary_recruitment,
        sphincter_reflex,
        synergy,
        fatigability,
    }
}

fn pressure_flow(pdet_at_qmax: f64) -> PressureFlowStudy {
    PressureFlowStudy {
        detrusor_pressure_at_peak_flow: pdet_at_qmax,
        ..PressureFlowStudy::default()
    }
}

fn provocation(
    cough_test: ProvocationResult,
    valsalva_test: ProvocationResult,
    leak_pressure: f64,
) -> ProvocationTests {
    ProvocationTests {
        cough_test,
        valsalva_test,
        stress_test_pressure: leak_pressure,
        abdominal_leak_point_pressure: leak_pressure,
    }
}

/// The three fill-rate runs share contraction and sensation findings; only
/// compliance differs (slow, fast, physiologic).
fn fill_rates(compliance: (f64, f64, f64), contractions: bool, sensation: Sensation) -> FillRateCystometry {
    let run = |compliance| FillRateRun {
        compliance,
        contractions,
        sensation,
    };
    FillRateCystometry {
        slow: run(compliance.0),
        fast: run(compliance.1),
        physiologic: run(compliance.2),
    }
}

static CASES: LazyLock<Vec<ClinicalCase>> = LazyLock::new(|| {
    use BaselineActivity as Baseline;
    use DetrusorSphincterSynergy as Synergy;
    use ProvocationResult::{Negative, StrongPositive, WeakPositive};

    let normal_emg = || {
        emg(
            Baseline::Normal,
            VoluntaryRecruitment::Normal,
            SphincterReflex::Present,
            Synergy::Normal,
            Fatigability::Normal,
        )
    };

    vec![
        ClinicalCase {
            id: 1,
            title: "Idiopathic overactive bladder".to_string(),
            description: "65-year-old woman with urgency and frequency".to_string(),
            expected_diagnosis: Diagnosis::IdiopathicDetrusorOveractivity,
            measurement: PatientMeasurement {
                patient_name: "Mrs D".to_string(),
                age: 65,
                sex: Sex::Female,
                symptoms: vec![Symptom::Urgency, Symptom::Frequency, Symptom::Nocturia],
                history: vec![History::Menopause],
                treatments: vec![Treatment::Anticholinergics],
                flow: flow(18.0, 12.0, 280.0, 25.0, 3.0, 8.0, FlowCurveShape::Normal),
                cystometry: cystometry(
                    220.0,
                    (45.0, 12.0, 57.0),
                    15.0,
                    true,
                    Sensation::Increased,
                    (80.0, 150.0),
                ),
                urethral_profile: urethral(65.0, 35.0, 35.0, 28.0, 85.0, DynamicProfile::Normal),
                emg: normal_emg(),
                pressure_flow: pressure_flow(35.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((16.0, 14.0, 15.0), true, Sensation::Increased),
                post_void_residual: 15.0,
            },
        },
        ClinicalCase {
            id: 2,
            title: "Prostatic obstruction".to_string(),
            description: "72-year-old man with dysuria and a weak stream".to_string(),
            expected_diagnosis: Diagnosis::BenignProstaticObstruction,
            measurement: PatientMeasurement {
                patient_name: "Mr L".to_string(),
                age: 72,
                sex: Sex::Male,
                symptoms: vec![
                    Symptom::Dysuria,
                    Symptom::WeakStream,
                    Symptom::IncompleteEmptying,
                    Symptom::Nocturia,
                ],
                history: vec![History::Bph],
                treatments: vec![Treatment::AlphaBlockers],
                flow: flow(8.0, 5.0, 320.0, 65.0, 8.0, 25.0, FlowCurveShape::Plateau),
                cystometry: cystometry(
                    480.0,
                    (25.0, 18.0, 43.0),
                    25.0,
                    false,
                    Sensation::Normal,
                    (180.0, 320.0),
                ),
                urethral_profile: urethral(95.0, 220.0, 70.0, 32.0, 90.0, DynamicProfile::Normal),
                emg: normal_emg(),
                pressure_flow: pressure_flow(65.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((26.0, 24.0, 25.0), false, Sensation::Normal),
                post_void_residual: 85.0,
            },
        },
        ClinicalCase {
            id: 3,
            title: "Stress incontinence".to_string(),
            description: "45-year-old woman with leakage on effort".to_string(),
            expected_diagnosis: Diagnosis::SphinctericStressIncontinence,
            measurement: PatientMeasurement {
                patient_name: "Mrs R".to_string(),
                age: 45,
                sex: Sex::Female,
                symptoms: vec![Symptom::StressIncontinence, Symptom::CoughLeakage],
                history: vec![History::DifficultDeliveries, History::Episiotomy],
                treatments: Vec::new(),
                flow: flow(22.0, 15.0, 350.0, 24.0, 2.0, 7.0, FlowCurveShape::Normal),
                cystometry: cystometry(
                    420.0,
                    (28.0, 15.0, 43.0),
                    22.0,
                    false,
                    Sensation::Normal,
                    (150.0, 280.0),
                ),
                urethral_profile: urethral(45.0, 32.0, 18.0, 22.0, 65.0, DynamicProfile::Decreased),
                emg: emg(
                    Baseline::Decreased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Present,
                    Synergy::Normal,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(22.0),
                provocation: provocation(StrongPositive, WeakPositive, 45.0),
                fill_rate_cystometry: fill_rates((23.0, 21.0, 22.0), false, Sensation::Normal),
                post_void_residual: 10.0,
            },
        },
        ClinicalCase {
            id: 4,
            title: "Detrusor-sphincter dyssynergia".to_string(),
            description: "35-year-old man with a spinal cord lesion".to_string(),
            expected_diagnosis: Diagnosis::DetrusorSphincterDyssynergia,
            measurement: PatientMeasurement {
                patient_name: "Mr T".to_string(),
                age: 35,
                sex: Sex::Male,
                symptoms: vec![
                    Symptom::Dysuria,
                    Symptom::IncompleteEmptying,
                    Symptom::RecurrentUrinaryInfections,
                ],
                history: vec![History::SpinalCordInjury, History::Paraplegia],
                treatments: vec![Treatment::IntermittentSelfCatheterisation],
                flow: flow(6.0, 3.0, 150.0, 55.0, 15.0, 30.0, FlowCurveShape::Intermittent),
                cystometry: cystometry(
                    280.0,
                    (55.0, 20.0, 75.0),
                    12.0,
                    true,
                    Sensation::Decreased,
                    (200.0, 250.0),
                ),
                urethral_profile: urethral(110.0, 200.0, 85.0, 35.0, 95.0, DynamicProfile::Increased),
                emg: emg(
                    Baseline::Increased,
                    VoluntaryRecruitment::Absent,
                    SphincterReflex::Absent,
                    Synergy::Dyssynergia,
                    Fatigability::Normal,
                ),
                pressure_flow: pressure_flow(85.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((14.0, 10.0, 12.0), true, Sensation::Decreased),
                post_void_residual: 130.0,
            },
        },
        ClinicalCase {
            id: 5,
            title: "Detrusor underactivity".to_string(),
            description: "68-year-old diabetic man with incomplete emptying".to_string(),
            expected_diagnosis: Diagnosis::DetrusorUnderactivity,
            measurement: PatientMeasurement {
                patient_name: "Mr B".to_string(),
                age: 68,
                sex: Sex::Male,
                symptoms: vec![
                    Symptom::IncompleteEmptying,
                    Symptom::WeakStream,
                    Symptom::Straining,
                ],
                history: vec![History::Type2Diabetes, History::DiabeticNeuropathy],
                treatments: vec![Treatment::Antidiabetics],
                flow: flow(9.0, 6.0, 280.0, 48.0, 12.0, 20.0, FlowCurveShape::Plateau),
                cystometry: cystometry(
                    650.0,
                    (15.0, 22.0, 37.0),
                    35.0,
                    false,
                    Sensation::Decreased,
                    (300.0, 500.0),
                ),
                urethral_profile: urethral(75.0, 210.0, 55.0, 28.0, 88.0, DynamicProfile::Normal),
                emg: emg(
                    Baseline::Decreased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Decreased,
                    Synergy::Normal,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(18.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((38.0, 32.0, 35.0), false, Sensation::Decreased),
                post_void_residual: 180.0,
            },
        },
        ClinicalCase {
            id: 6,
            title: "Post-menopausal mixed incontinence".to_string(),
            description: "58-year-old woman with stress and urge incontinence".to_string(),
            expected_diagnosis: Diagnosis::MixedDetrusorSphincteric,
            measurement: PatientMeasurement {
                patient_name: "Mrs C".to_string(),
                age: 58,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::StressIncontinence,
                    Symptom::Urgency,
                    Symptom::MixedLeakage,
                    Symptom::Nocturia,
                ],
                history: vec![History::Menopause, History::Hysterectomy, History::GenitalProlapse],
                treatments: vec![Treatment::HormoneReplacementTherapy, Treatment::Anticholinergics],
                flow: flow(16.0, 11.0, 290.0, 28.0, 4.0, 9.0, FlowCurveShape::Normal),
                cystometry: cystometry(
                    320.0,
                    (38.0, 16.0, 54.0),
                    18.0,
                    true,
                    Sensation::Increased,
                    (120.0, 200.0),
                ),
                urethral_profile: urethral(38.0, 28.0, 15.0, 18.0, 55.0, DynamicProfile::Decreased),
                emg: emg(
                    Baseline::Decreased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Present,
                    Synergy::Normal,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(28.0),
                provocation: provocation(StrongPositive, WeakPositive, 35.0),
                fill_rate_cystometry: fill_rates((19.0, 17.0, 18.0), true, Sensation::Increased),
                post_void_residual: 25.0,
            },
        },
        ClinicalCase {
            id: 7,
            title: "Post-traumatic urethral stricture".to_string(),
            description: "42-year-old man with a urethral stricture after trauma".to_string(),
            expected_diagnosis: Diagnosis::SubvesicalObstruction,
            measurement: PatientMeasurement {
                patient_name: "Mr F".to_string(),
                age: 42,
                sex: Sex::Male,
                symptoms: vec![Symptom::Dysuria, Symptom::WeakStream, Symptom::VoidingPain],
                history: vec![History::UrethralTrauma, History::Urethrotomy],
                treatments: Vec::new(),
                flow: flow(4.0, 2.0, 180.0, 85.0, 20.0, 40.0, FlowCurveShape::Plateau),
                cystometry: cystometry(
                    450.0,
                    (32.0, 18.0, 50.0),
                    24.0,
                    false,
                    Sensation::Normal,
                    (180.0, 320.0),
                ),
                urethral_profile: urethral(45.0, 180.0, 25.0, 15.0, 85.0, DynamicProfile::Stenosis),
                emg: normal_emg(),
                pressure_flow: pressure_flow(95.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((25.0, 23.0, 24.0), false, Sensation::Normal),
                post_void_residual: 120.0,
            },
        },
        ClinicalCase {
            id: 10,
            title: "Genital prolapse with voiding dysfunction".to_string(),
            description: "62-year-old woman with prolapse and dysuria".to_string(),
            expected_diagnosis: Diagnosis::ProlapseRelatedObstruction,
            measurement: PatientMeasurement {
                patient_name: "Mrs I".to_string(),
                age: 62,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::Dysuria,
                    Symptom::IncompleteEmptying,
                    Symptom::PelvicHeaviness,
                ],
                history: vec![History::GenitalProlapse, History::MultipleDeliveries],
                treatments: vec![Treatment::Pessary],
                flow: flow(12.0, 8.0, 250.0, 32.0, 8.0, 15.0, FlowCurveShape::Plateau),
                cystometry: cystometry(
                    380.0,
                    (35.0, 18.0, 53.0),
                    20.0,
                    false,
                    Sensation::Normal,
                    (150.0, 250.0),
                ),
                urethral_profile: urethral(42.0, 25.0, 22.0, 18.0, 60.0, DynamicProfile::Decreased),
                emg: emg(
                    Baseline::Decreased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Present,
                    Synergy::Normal,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(42.0),
                provocation: provocation(WeakPositive, WeakPositive, 50.0),
                fill_rate_cystometry: fill_rates((21.0, 19.0, 20.0), false, Sensation::Normal),
                post_void_residual: 45.0,
            },
        },
        ClinicalCase {
            id: 12,
            title: "Interstitial cystitis / painful bladder syndrome".to_string(),
            description: "44-year-old woman with chronic bladder pain".to_string(),
            expected_diagnosis: Diagnosis::PainfulBladderSyndrome,
            measurement: PatientMeasurement {
                patient_name: "Mrs K".to_string(),
                age: 44,
                sex: Sex::Female,
                symptoms: vec![Symptom::BladderPain, Symptom::Frequency, Symptom::Nocturia],
                history: vec![History::RecurrentCystitis, History::Fibromyalgia],
                treatments: vec![Treatment::Analgesics, Treatment::BladderInstillations],
                flow: flow(20.0, 14.0, 180.0, 15.0, 2.0, 5.0, FlowCurveShape::Normal),
                cystometry: FillingCystometry {
                    fill_rate: 30.0,
                    ..cystometry(
                        180.0,
                        (25.0, 12.0, 37.0),
                        12.0,
                        false,
                        Sensation::Hyperesthesia,
                        (50.0, 100.0),
                    )
                },
                urethral_profile: urethral(55.0, 30.0, 35.0, 22.0, 85.0, DynamicProfile::Normal),
                emg: emg(
                    Baseline::Increased,
                    VoluntaryRecruitment::Normal,
                    SphincterReflex::Present,
                    Synergy::Normal,
                    Fatigability::Normal,
                ),
                pressure_flow: pressure_flow(22.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((14.0, 10.0, 12.0), false, Sensation::Hyperesthesia),
                post_void_residual: 8.0,
            },
        },
        ClinicalCase {
            id: 14,
            title: "Paediatric overactive bladder".to_string(),
            description: "6-year-old girl with urgency and daytime incontinence".to_string(),
            expected_diagnosis: Diagnosis::IdiopathicDetrusorOveractivity,
            measurement: PatientMeasurement {
                patient_name: "Girl B".to_string(),
                age: 6,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::Urgency,
                    Symptom::DaytimeIncontinence,
                    Symptom::Frequency,
                ],
                history: vec![History::Constipation],
                treatments: vec![Treatment::BladderTraining],
                flow: flow(10.0, 7.0, 120.0, 18.0, 2.0, 5.0, FlowCurveShape::Normal),
                cystometry: FillingCystometry {
                    fill_rate: 25.0,
                    ..cystometry(
                        140.0,
                        (35.0, 8.0, 43.0),
                        12.0,
                        true,
                        Sensation::Increased,
                        (50.0, 90.0),
                    )
                },
                urethral_profile: urethral(40.0, 25.0, 28.0, 18.0, 80.0, DynamicProfile::Normal),
                emg: normal_emg(),
                pressure_flow: pressure_flow(25.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((14.0, 10.0, 12.0), true, Sensation::Increased),
                post_void_residual: 8.0,
            },
        },
        ClinicalCase {
            id: 16,
            title: "Hinman syndrome (non-neurogenic neurogenic bladder)".to_string(),
            description: "10-year-old girl with non-neurogenic voiding dysfunction".to_string(),
            expected_diagnosis: Diagnosis::DetrusorSphincterDyssynergia,
            measurement: PatientMeasurement {
                patient_name: "Girl D".to_string(),
                age: 10,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::Dysuria,
                    Symptom::RecurrentUrinaryInfections,
                    Symptom::UrgeIncontinence,
                ],
                history: vec![History::RecurrentUrinaryInfections],
                treatments: vec![],
                flow: flow(6.0, 3.0, 120.0, 45.0, 12.0, 20.0, FlowCurveShape::Intermittent),
                cystometry: FillingCystometry {
                    fill_rate: 25.0,
                    ..cystometry(
                        180.0,
                        (45.0, 12.0, 57.0),
                        10.0,
                        true,
                        Sensation::Normal,
                        (70.0, 120.0),
                    )
                },
                urethral_profile: urethral(55.0, 28.0, 35.0, 20.0, 75.0, DynamicProfile::Increased),
                emg: emg(
                    Baseline::Increased,
                    VoluntaryRecruitment::Normal,
                    SphincterReflex::Present,
                    Synergy::Dyssynergia,
                    Fatigability::Normal,
                ),
                pressure_flow: pressure_flow(65.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((12.0, 8.0, 10.0), true, Sensation::Normal),
                post_void_residual: 45.0,
            },
        },
        ClinicalCase {
            id: 17,
            title: "Parkinson's disease with urinary symptoms".to_string(),
            description: "71-year-old man with Parkinson's disease and an overactive bladder".to_string(),
            expected_diagnosis: Diagnosis::NeurogenicDetrusorOveractivity,
            measurement: PatientMeasurement {
                patient_name: "Mr P".to_string(),
                age: 71,
                sex: Sex::Male,
                symptoms: vec![
                    Symptom::Urgency,
                    Symptom::Frequency,
                    Symptom::Nocturia,
                    Symptom::UrgeIncontinence,
                ],
                history: vec![History::ParkinsonsDisease, History::MildCognitiveImpairment],
                treatments: vec![Treatment::Levodopa, Treatment::Anticholinergics],
                flow: flow(11.0, 7.0, 220.0, 35.0, 10.0, 18.0, FlowCurveShape::Intermittent),
                cystometry: FillingCystometry {
                    fill_rate: 40.0,
                    ..cystometry(
                        250.0,
                        (42.0, 18.0, 60.0),
                        14.0,
                        true,
                        Sensation::Increased,
                        (100.0, 180.0),
                    )
                },
                urethral_profile: urethral(70.0, 190.0, 50.0, 25.0, 80.0, DynamicProfile::Normal),
                emg: emg(
                    Baseline::Increased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Present,
                    Synergy::PseudoDyssynergia,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(38.0),
                provocation: provocation(Negative, Negative, 0.0),
                fill_rate_cystometry: fill_rates((16.0, 12.0, 14.0), true, Sensation::Increased),
                post_void_residual: 35.0,
            },
        },
        ClinicalCase {
            id: 18,
            title: "Cystocele with functional obstruction".to_string(),
            description: "68-year-old woman with a grade III cystocele and voiding dysfunction".to_string(),
            expected_diagnosis: Diagnosis::ProlapseRelatedObstruction,
            measurement: PatientMeasurement {
                patient_name: "Mrs Q".to_string(),
                age: 68,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::Dysuria,
                    Symptom::IncompleteEmptying,
                    Symptom::ReductionManeuvers,
                ],
                history: vec![
                    History::Cystocele,
                    History::MultipleDeliveries,
                    History::Hysterectomy,
                ],
                treatments: vec![Treatment::Pessary],
                flow: flow(8.0, 5.0, 200.0, 45.0, 15.0, 22.0, FlowCurveShape::Plateau),
                cystometry: cystometry(
                    420.0,
                    (38.0, 20.0, 58.0),
                    19.0,
                    false,
                    Sensation::Normal,
                    (180.0, 300.0),
                ),
                urethral_profile: urethral(35.0, 22.0, 15.0, 12.0, 45.0, DynamicProfile::Decreased),
                emg: emg(
                    Baseline::Decreased,
                    VoluntaryRecruitment::Decreased,
                    SphincterReflex::Present,
                    Synergy::Normal,
                    Fatigability::Increased,
                ),
                pressure_flow: pressure_flow(48.0),
                provocation: provocation(WeakPositive, WeakPositive, 40.0),
                fill_rate_cystometry: fill_rates((20.0, 18.0, 19.0), false, Sensation::Normal),
                post_void_residual: 85.0,
            },
        },
        ClinicalCase {
            id: 20,
            title: "Severe stress incontinence with intrinsic sphincter deficiency".to_string(),
            description: "52-year-old woman with intrinsic sphincter deficiency".to_string(),
            expected_diagnosis: Diagnosis::SphinctericStressIncontinence,
            measurement: PatientMeasurement {
                patient_name: "Mrs T".to_string(),
                age: 52,
                sex: Sex::Female,
                symptoms: vec![
                    Symptom::StressIncontinence,
                    Symptom::ContinuousLeakage,
                    Symptom::LossOfControl,
                ],
                history: vec![History::AntiIncontinenceSurgery, History::SlingErosion],
                treatments: vec![Treatment::PelvicFloorRehabilitation],
                flow: flow(28.0, 20.0, 380.0, 19.0, 1.0, 4.0, FlowCurveShape::Normal),
                cystometry: FillingCystometry {
                    leak_pressure: 18.0,
                    ..cystometry(
                        450.0,
                        (25.0, 12.0, 37.0),
                        25.0,
                        false,
                        Sensation::Normal,
                        (180.0, 320.0),
                    )
                },
                urethral_profile: urethral(22.0, 28.0, 8.0, 12.0, 25.0, DynamicProfile::Deficient),
                emg: emg(
                    Baseline::Absent,
                    VoluntaryRecruitment::Absent,
                    SphincterReflex::Decreased,
                    Synergy::Normal,
                    Fatigability::Normal,
                ),
                pressure_flow: pressure_flow(18.0),
                provocation: provocation(StrongPositive, StrongPositive, 12.0),
                fill_rate_cystometry: fill_rates((26.0, 24.0, 25.0), false, Sensation::Normal),
                post_void_residual: 8.0,
            },
        },
    ]
});
