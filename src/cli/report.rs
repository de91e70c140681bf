// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Rendering of validation results for the terminal.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::validation::{FieldError, ValidationErrors};

/// Outcome of one CLI validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// What was checked: a field name, a map name, or an input file.
    pub subject: String,
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl Report {
    pub fn from_result(subject: impl Into<String>, result: Result<(), ValidationErrors>) -> Self {
        let errors = result.err().map(ValidationErrors::into_vec).unwrap_or_default();
        Self {
            subject: subject.into(),
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// One line for a valid subject, otherwise a header plus one line per failure.
pub fn format_human(report: &Report) -> String {
    if report.valid {
        return format!("{}: valid", report.subject);
    }

    let noun = if report.errors.len() == 1 {
        "problem"
    } else {
        "problems"
    };
    let mut out = format!(
        "{}: {} {} found",
        report.subject,
        report.errors.len(),
        noun
    );
    for error in &report.errors {
        out.push_str("\n  - ");
        out.push_str(&error.to_string());
    }
    out
}

pub fn format_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render(report: &Report, output: OutputFormat) -> Result<String, serde_json::Error> {
    match output {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => format_json(report),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
