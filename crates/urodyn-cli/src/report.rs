//! Plain-text rendering of validation reports and analysis results.

use urodyn_core::models::result::{DiagnosticResult, GuidanceItem, ValidationReport};
use urodyn_core::reference::{self, CONTRACTILITY_INDEX, ReferenceRange};

pub fn render_validation(report: &ValidationReport) -> String {
    let mut lines = Vec::new();
    if report.coherent {
        lines.push("Record is coherent.".to_string());
    } else {
        lines.push(format!("Record is NOT coherent ({} error(s)).", report.errors.len()));
    }
    for error in &report.errors {
        lines.push(format!("  error: {error}"));
    }
    for warning in &report.warnings {
        lines.push(format!("  warning: {warning}"));
    }
    lines.join("\n")
}

pub fn render_result(result: &DiagnosticResult) -> String {
    let mut lines = vec![
        format!("Diagnosis: {}", result.diagnosis_label),
        format!("Confidence: {}", result.confidence.label()),
    ];

    if !result.critical_alerts.is_empty() {
        lines.push(String::new());
        lines.push("CRITICAL ALERTS".to_string());
        for alert in &result.critical_alerts {
            lines.push(format!("  ! {alert}"));
        }
    }

    lines.push(String::new());
    lines.push("Indices".to_string());
    for (name, value) in result.indices.named() {
        let shown = value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        lines.push(format!("  {name}: {shown}"));
    }
    if !CONTRACTILITY_INDEX.contains(result.indices.contractility_index) {
        lines.push(format!(
            "  contractility below normal ({})",
            describe_range(&CONTRACTILITY_INDEX)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Nomograms: Schafer {}, Abrams-Griffiths {}",
        result.nomograms.schafer.label(),
        result.nomograms.abrams_griffiths.label()
    ));

    let abnormal = reference::out_of_range(&result.measurement);
    if !abnormal.is_empty() {
        lines.push(String::new());
        lines.push("Out of reference range".to_string());
        for item in abnormal {
            lines.push(format!(
                "  {}: {} (normal {})",
                item.name,
                item.value,
                describe_range(&item.range)
            ));
        }
    }

    push_section(&mut lines, "Recommendations", &result.recommendations);
    push_section(&mut lines, "Complementary exams", &result.complementary_exams);
    push_section(&mut lines, "Treatments", &result.treatments);
    push_section(&mut lines, "Surveillance", &result.surveillance);
    push_section(&mut lines, "Pitfalls", &result.pitfalls);

    if !result.validation.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &result.validation.warnings {
            lines.push(format!("  {warning}"));
        }
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[GuidanceItem]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    for item in items {
        lines.push(format!("  - {}", item.label));
    }
}

pub fn describe_range(range: &ReferenceRange) -> String {
    let unit = if range.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", range.unit)
    };
    match (range.min, range.max) {
        (Some(min), Some(max)) => format!("{min}-{max}{unit}"),
        (Some(min), None) => format!(">= {min}{unit}"),
        (None, Some(max)) => format!("<= {max}{unit}"),
        (None, None) => "any".to_string(),
    }
}
