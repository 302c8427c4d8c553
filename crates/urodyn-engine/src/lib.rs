//! urodyn-engine
//!
//! Rule-based interpretation of a urodynamic study: consistency checks,
//! derived indices, nomogram zones, the diagnostic decision tree, guidance
//! lists and safety alerts. Every function is pure; the only side effect is
//! `tracing` output.

pub mod alerts;
pub mod error;
pub mod guidance;
pub mod indices;
pub mod nomogram;
pub mod resolver;
pub mod thresholds;
pub mod validator;

use urodyn_core::models::diagnosis::Diagnosis;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::{DiagnosticResult, GuidanceItem, ValidationReport};

pub use alerts::{CriticalAlert, detect_critical_alerts};
pub use error::EngineError;
pub use guidance::{complementary_exams, pitfalls, recommendations, surveillance, treatments};
pub use indices::compute_indices;
pub use nomogram::classify;
pub use resolver::resolve;
pub use thresholds::Thresholds;
pub use validator::{filter_transient_warnings, validate};

/// Which list of a [`DiagnosticResult`] a generator fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceSection {
    Recommendations,
    ComplementaryExams,
    Treatments,
    Surveillance,
    Pitfalls,
}

/// Trait implemented by each guidance list generator.
pub trait GuidanceGenerator: Send + Sync {
    /// The result list this generator produces.
    fn section(&self) -> GuidanceSection;

    /// Build the list for a record and its resolved diagnosis. Order matters:
    /// items are shown as returned.
    fn generate(&self, m: &PatientMeasurement, dx: Diagnosis) -> Vec<GuidanceItem>;
}

/// Return all registered guidance generators, in report order.
pub fn all_generators() -> Vec<Box<dyn GuidanceGenerator>> {
    vec![
        Box::new(guidance::recommendations::Recommendations),
        Box::new(guidance::exams::ComplementaryExams),
        Box::new(guidance::treatments::Treatments),
        Box::new(guidance::surveillance::Surveillance),
        Box::new(guidance::pitfalls::Pitfalls),
    ]
}

/// Engine configured with a set of thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Engine {
    thresholds: Thresholds,
}

impl Engine {
    pub fn new(thresholds: Thresholds) -> Result<Self, EngineError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn validate(&self, m: &PatientMeasurement) -> ValidationReport {
        validator::validate_with(m, &self.thresholds)
    }

    /// Run the full pipeline on `m`.
    ///
    /// Analysis always completes, even over a record with validation errors;
    /// callers decide whether to show it by checking
    /// [`DiagnosticResult::is_trustworthy`].
    pub fn analyze(&self, m: &PatientMeasurement) -> DiagnosticResult {
        let validation = self.validate(m);
        if !validation.coherent {
            tracing::warn!(
                errors = validation.errors.len(),
                "analysing a record that failed validation"
            );
        }

        let indices = compute_indices(m);
        let nomograms = classify(m);
        let resolution = resolver::resolve_with(m, &indices, &nomograms, &self.thresholds);
        let dx = resolution.diagnosis;

        let mut result = DiagnosticResult {
            diagnosis: dx,
            diagnosis_label: dx.label().to_string(),
            confidence: resolution.confidence,
            recommendations: Vec::new(),
            complementary_exams: Vec::new(),
            treatments: Vec::new(),
            surveillance: Vec::new(),
            pitfalls: Vec::new(),
            critical_alerts: detect_critical_alerts(m)
                .into_iter()
                .map(|alert| alert.message().to_string())
                .collect(),
            indices,
            nomograms,
            validation,
            measurement: PatientMeasurement {
                pressure_flow: m.pressure_flow.with_indices(&indices),
                ..m.clone()
            },
        };

        for generator in all_generators() {
            let items = generator.generate(m, dx);
            match generator.section() {
                GuidanceSection::Recommendations => result.recommendations = items,
                GuidanceSection::ComplementaryExams => result.complementary_exams = items,
                GuidanceSection::Treatments => result.treatments = items,
                GuidanceSection::Surveillance => result.surveillance = items,
                GuidanceSection::Pitfalls => result.pitfalls = items,
            }
        }

        tracing::debug!(
            diagnosis = result.diagnosis_label.as_str(),
            alerts = result.critical_alerts.len(),
            "analysis complete"
        );

        result
    }
}

/// Analyse `m` with the default thresholds.
pub fn analyze(m: &PatientMeasurement) -> DiagnosticResult {
    Engine::default().analyze(m)
}
