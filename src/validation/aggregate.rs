// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Whole-map validation for labels and annotations.
//!
//! Every key and every value is checked; a bad entry never stops the scan.
//! Failures are sorted by key (key failure before value failure) so the
//! rendered report does not depend on map iteration order.

use super::error::{FieldError, ValidationErrors};
use super::fields::{
    validate_annotation_key, validate_annotation_value, validate_label_key, validate_label_value,
};

/// Validate `metadata.labels`.
///
/// # Errors
/// Returns every bad key and every bad value, one `FieldError` each.
pub fn validate_metadata_labels<I, K, V>(labels: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let errors = collect_entry_errors(
        "metadata.labels",
        labels,
        validate_label_key,
        |value: &V| validate_label_value(value.as_ref()),
    );
    ValidationErrors::from_errors(errors)
}

/// Validate `metadata.annotations`.
///
/// Values are raw bytes so that non-UTF-8 input can be reported rather than
/// rejected at the type level.
///
/// # Errors
/// Returns every bad key and every bad value, one `FieldError` each.
pub fn validate_metadata_annotations<I, K, V>(annotations: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[u8]>,
{
    let errors = collect_entry_errors(
        "metadata.annotations",
        annotations,
        validate_annotation_key,
        |value: &V| validate_annotation_value(value),
    );
    ValidationErrors::from_errors(errors)
}

fn collect_entry_errors<I, K, V, KF, VF>(
    class: &'static str,
    entries: I,
    check_key: KF,
    check_value: VF,
) -> Vec<FieldError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    KF: Fn(&str) -> Result<(), FieldError>,
    VF: Fn(&V) -> Result<(), FieldError>,
{
    let mut errors = Vec::new();
    let mut count = 0usize;

    for (key, value) in entries {
        count += 1;
        let key = key.as_ref();

        if let Err(e) = check_key(key) {
            tracing::trace!(class, key, error = %e, "rejected key");
            errors.push(e);
        }

        if let Err(e) = check_value(&value) {
            let e = e.with_key(key);
            tracing::trace!(class, key, error = %e, "rejected value");
            errors.push(e);
        }
    }

    errors.sort_by(|a, b| a.key.cmp(&b.key).then(a.field.cmp(&b.field)));

    tracing::debug!(class, entries = count, failures = errors.len(), "validated map");
    errors
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
