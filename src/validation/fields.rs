// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! One validator per manifest identifier field.
//!
//! Each returns at most one `FieldError`: the first rule the value breaks.

use crate::grammar::patterns::Pattern;
use crate::grammar::primitives::validate_bounded;
use crate::grammar::{
    parse_group_version, validate_alphanumeric, validate_api_group_token, validate_dns_subdomain,
    validate_length, validate_qualified_key, validate_starts_with_uppercase, validate_utf8,
    KIND_MAX_LENGTH, LABEL_VALUE_MAX_LENGTH,
};

use super::error::{Field, FieldError};

/// `metadata.name`: a lowercase DNS subdomain of at most 253 characters.
pub fn validate_metadata_name(name: &str) -> Result<(), FieldError> {
    validate_dns_subdomain(name).map_err(|v| FieldError::new(Field::MetadataName, v))
}

/// Label key: `[prefix/]name`.
pub fn validate_label_key(key: &str) -> Result<(), FieldError> {
    validate_key(Field::LabelKey, key)
}

/// Label value: empty, or at most 63 alphanumerics, `-` and `.` with
/// alphanumeric ends.
pub fn validate_label_value(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }

    validate_bounded(value, LABEL_VALUE_MAX_LENGTH, Pattern::LabelValue)
        .map_err(|v| FieldError::new(Field::LabelValue, v))
}

/// Annotation key: same grammar as a label key.
pub fn validate_annotation_key(key: &str) -> Result<(), FieldError> {
    validate_key(Field::AnnotationKey, key)
}

/// Annotation value: any well-formed UTF-8, empty included, no length cap.
pub fn validate_annotation_value(value: impl AsRef<[u8]>) -> Result<(), FieldError> {
    validate_utf8(value.as_ref())
        .map(|_| ())
        .map_err(|v| FieldError::new(Field::AnnotationValue, v))
}

/// `apiVersion`: `version` or `group/version`.
pub fn validate_api_version(api_version: &str) -> Result<(), FieldError> {
    parse_group_version(api_version)
        .map(|_| ())
        .map_err(|pv| FieldError::from_part(Field::ApiVersion, pv))
}

/// A CRD group name such as `networking.k8s.io`.
pub fn validate_api_group(group: &str) -> Result<(), FieldError> {
    validate_api_group_token(group).map_err(|v| FieldError::new(Field::ApiGroup, v))
}

/// `kind`: at most 63 alphanumerics, starting with an uppercase letter.
pub fn validate_kind(kind: &str) -> Result<(), FieldError> {
    validate_length(kind, KIND_MAX_LENGTH)
        .and_then(|()| validate_alphanumeric(kind))
        .and_then(|()| validate_starts_with_uppercase(kind))
        .map_err(|v| FieldError::new(Field::Kind, v))
}

fn validate_key(field: Field, key: &str) -> Result<(), FieldError> {
    validate_qualified_key(key)
        .map(|_| ())
        .map_err(|pv| FieldError::from_part(field, pv).with_key(key))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
