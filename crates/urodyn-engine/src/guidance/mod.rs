//! The five guidance lists attached to a diagnosis.

pub mod exams;
pub mod pitfalls;
pub mod recommendations;
pub mod surveillance;
pub mod treatments;

use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::GuidanceItem;

use crate::GuidanceGenerator;

pub fn recommendations(m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
    recommendations::Recommendations.generate(m, dx)
}

pub fn complementary_exams(m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
    exams::ComplementaryExams.generate(m, dx)
}

pub fn treatments(m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
    treatments::Treatments.generate(m, dx)
}

pub fn surveillance(m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
    surveillance::Surveillance.generate(m, dx)
}

pub fn pitfalls(m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem> {
    pitfalls::Pitfalls.generate(m, dx)
}
