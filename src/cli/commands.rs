// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation commands behind the CLI.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::OutputFormat;
use crate::grammar::validate_utf8;
use crate::validation::{
    validate_annotation_key, validate_annotation_value, validate_api_group, validate_api_version,
    validate_kind, validate_label_key, validate_label_value, validate_manifest_fields,
    validate_metadata_annotations, validate_metadata_labels, validate_metadata_name, Field,
    FieldError, ManifestFields, ValidationErrors,
};

use super::report::{render, Report};
use super::{EXIT_INVALID, EXIT_USAGE, EXIT_VALID};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing value for '{0}'")]
    MissingValue(String),

    #[error("Invalid value for {flag}: '{value}'")]
    InvalidFlag { flag: &'static str, value: String },

    #[error("Expected KEY=VALUE, got '{0}'")]
    MalformedPair(String),

    #[error("Argument is not valid UTF-8: '{0}'")]
    NonUtf8Argument(String),

    #[error("Failed to read {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid field set in {path}: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Map a single-value command name to the field it checks.
pub fn field_for_command(command: &str) -> Option<Field> {
    match command {
        "name" => Some(Field::MetadataName),
        "label-key" => Some(Field::LabelKey),
        "label-value" => Some(Field::LabelValue),
        "annotation-key" => Some(Field::AnnotationKey),
        "annotation-value" => Some(Field::AnnotationValue),
        "api-version" => Some(Field::ApiVersion),
        "api-group" => Some(Field::ApiGroup),
        "kind" => Some(Field::Kind),
        _ => None,
    }
}

/// Validate one raw command-line value as `field`.
///
/// Bytes that are not UTF-8 are reported against the field itself.
pub fn check_value(field: Field, raw: &[u8]) -> Result<(), ValidationErrors> {
    let value = validate_utf8(raw).map_err(|v| FieldError::new(field, v))?;

    let result = match field {
        Field::MetadataName => validate_metadata_name(value),
        Field::LabelKey => validate_label_key(value),
        Field::LabelValue => validate_label_value(value),
        Field::AnnotationKey => validate_annotation_key(value),
        Field::AnnotationValue => validate_annotation_value(value),
        Field::ApiVersion => validate_api_version(value),
        Field::ApiGroup => validate_api_group(value),
        Field::Kind => validate_kind(value),
    };
    result.map_err(ValidationErrors::from)
}

/// Split `KEY=VALUE` on the first `=`. The key must be UTF-8; the value is
/// kept as raw bytes.
fn split_pair(raw: &OsString) -> Result<(String, Vec<u8>), CliError> {
    let bytes = raw.as_encoded_bytes();
    let eq = bytes
        .iter()
        .position(|&b| b == b'=')
        .ok_or_else(|| CliError::MalformedPair(raw.to_string_lossy().into_owned()))?;

    let key = std::str::from_utf8(&bytes[..eq])
        .map_err(|_| CliError::NonUtf8Argument(raw.to_string_lossy().into_owned()))?;
    Ok((key.to_string(), bytes[eq + 1..].to_vec()))
}

/// Validate `KEY=VALUE` label pairs.
pub fn check_labels(pairs: &[OsString]) -> Result<Result<(), ValidationErrors>, CliError> {
    let mut labels = Vec::with_capacity(pairs.len());
    for raw in pairs {
        let (key, value) = split_pair(raw)?;
        let value = String::from_utf8(value)
            .map_err(|_| CliError::NonUtf8Argument(raw.to_string_lossy().into_owned()))?;
        labels.push((key, value));
    }
    Ok(validate_metadata_labels(labels))
}

/// Validate `KEY=VALUE` annotation pairs. Values may hold any bytes.
pub fn check_annotations(pairs: &[OsString]) -> Result<Result<(), ValidationErrors>, CliError> {
    let annotations = pairs
        .iter()
        .map(split_pair)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(validate_metadata_annotations(annotations))
}

/// Read an extracted field set from a JSON file.
pub fn load_fields(path: &Path) -> Result<ManifestFields, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_check(field: Field, raw: &[u8], output: OutputFormat) -> i32 {
    let report = Report::from_result(field.as_str(), check_value(field, raw));
    emit(&report, output)
}

pub fn run_labels(pairs: &[OsString], output: OutputFormat) -> i32 {
    run_pairs("metadata.labels", check_labels(pairs), output)
}

pub fn run_annotations(pairs: &[OsString], output: OutputFormat) -> i32 {
    run_pairs("metadata.annotations", check_annotations(pairs), output)
}

pub fn run_fields(path: &Path, output: OutputFormat) -> i32 {
    match load_fields(path) {
        Ok(fields) => {
            let subject = path.display().to_string();
            emit(
                &Report::from_result(subject, validate_manifest_fields(&fields)),
                output,
            )
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_USAGE
        }
    }
}

fn run_pairs(
    subject: &str,
    checked: Result<Result<(), ValidationErrors>, CliError>,
    output: OutputFormat,
) -> i32 {
    match checked {
        Ok(result) => emit(&Report::from_result(subject, result), output),
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_USAGE
        }
    }
}

fn emit(report: &Report, output: OutputFormat) -> i32 {
    match render(report, output) {
        Ok(text) => {
            println!("{}", text);
            if report.valid {
                EXIT_VALID
            } else {
                EXIT_INVALID
            }
        }
        Err(e) => {
            eprintln!("Error: {}", CliError::from(e));
            EXIT_USAGE
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
