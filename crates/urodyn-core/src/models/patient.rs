use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::cystometry::{FillRateCystometry, FillingCystometry};
use super::emg::EmgProfile;
use super::flow::FlowStudy;
use super::pressure_flow::PressureFlowStudy;
use super::provocation::ProvocationTests;
use super::urethral::UrethralPressureProfile;
use super::vocabulary::{History, Symptom, Treatment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn opposite(self) -> Self {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }
}

/// A patient's complete urodynamic record, as entered on the exam form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientMeasurement {
    pub patient_name: String,
    pub age: u32,
    pub sex: Sex,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub history: Vec<History>,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
    pub flow: FlowStudy,
    pub cystometry: FillingCystometry,
    pub urethral_profile: UrethralPressureProfile,
    pub emg: EmgProfile,
    pub pressure_flow: PressureFlowStudy,
    pub provocation: ProvocationTests,
    pub fill_rate_cystometry: FillRateCystometry,
    /// ml.
    pub post_void_residual: f64,
}

impl PatientMeasurement {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn has_history(&self, history: History) -> bool {
        self.history.contains(&history)
    }

    pub fn any_history(&self, predicate: impl Fn(History) -> bool) -> bool {
        self.history.iter().copied().any(predicate)
    }

    pub fn any_symptom(&self, predicate: impl Fn(Symptom) -> bool) -> bool {
        self.symptoms.iter().copied().any(predicate)
    }

    /// Shallow-merge a partial record onto this one.
    ///
    /// Each top-level key present in `fragment` replaces the whole
    /// corresponding section; sections are not merged field by field. The
    /// merged value must still deserialize into a complete record.
    pub fn merged_with(&self, fragment: &serde_json::Value) -> Result<Self, CoreError> {
        let patch = fragment.as_object().ok_or(CoreError::NotAnObject)?;
        let mut base = serde_json::to_value(self)?;
        let obj = base.as_object_mut().ok_or(CoreError::NotAnObject)?;
        for (key, value) in patch {
            obj.insert(key.clone(), value.clone());
        }
        Ok(serde_json::from_value(base)?)
    }
}

/// The blank exam form: a coherent adult male record with normal values.
impl Default for PatientMeasurement {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            age: 50,
            sex: Sex::Male,
            symptoms: Vec::new(),
            history: Vec::new(),
            treatments: Vec::new(),
            flow: FlowStudy::default(),
            cystometry: FillingCystometry::default(),
            urethral_profile: UrethralPressureProfile::default(),
            emg: EmgProfile::default(),
            pressure_flow: PressureFlowStudy::default(),
            provocation: ProvocationTests::default(),
            fill_rate_cystometry: FillRateCystometry::default(),
            post_void_residual: 30.0,
        }
    }
}
