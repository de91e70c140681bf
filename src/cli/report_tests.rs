// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::validation::{validate_kind, validate_metadata_labels};

#[test]
fn test_valid_report() {
    let report = Report::from_result("kind", Ok(()));
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert_eq!(format_human(&report), "kind: valid");
}

#[test]
fn test_single_problem() {
    let result = validate_kind("deployment").map_err(ValidationErrors::from);
    let report = Report::from_result("kind", result);
    assert!(!report.valid);
    assert_eq!(
        format_human(&report),
        "kind: 1 problem found\n  - invalid kind: must start with an uppercase letter"
    );
}

#[test]
fn test_multiple_problems_one_line_each() {
    let result = validate_metadata_labels([("a/b/c", "ok"), ("app", "-bad")]);
    let report = Report::from_result("metadata.labels", result);

    let text = format_human(&report);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "metadata.labels: 2 problems found");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("  - invalid label key 'a/b/c'"));
    assert!(lines[2].starts_with("  - invalid label value for key 'app'"));
}

#[test]
fn test_json_report() {
    let result = validate_kind("").map_err(ValidationErrors::from);
    let report = Report::from_result("kind", result);

    let json: serde_json::Value =
        serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["subject"], "kind");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["field"], "kind");
    assert_eq!(json["errors"][0]["violation"]["kind"], "empty_input");
}

#[test]
fn test_render_human_matches_format_human() {
    let report = Report::from_result("name", Ok(()));
    assert_eq!(
        render(&report, OutputFormat::Human).unwrap(),
        format_human(&report)
    );
}
