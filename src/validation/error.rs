// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Field-level failures and their aggregation.

use serde::Serialize;

use crate::grammar::{PartViolation, TokenPart, Violation};

/// Manifest field a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    #[serde(rename = "metadata.name")]
    MetadataName,
    #[serde(rename = "label key")]
    LabelKey,
    #[serde(rename = "label value")]
    LabelValue,
    #[serde(rename = "annotation key")]
    AnnotationKey,
    #[serde(rename = "annotation value")]
    AnnotationValue,
    #[serde(rename = "apiVersion")]
    ApiVersion,
    #[serde(rename = "API group")]
    ApiGroup,
    #[serde(rename = "kind")]
    Kind,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MetadataName => "metadata.name",
            Self::LabelKey => "label key",
            Self::LabelValue => "label value",
            Self::AnnotationKey => "annotation key",
            Self::AnnotationValue => "annotation value",
            Self::ApiVersion => "apiVersion",
            Self::ApiGroup => "API group",
            Self::Kind => "kind",
        }
    }

    /// True for fields whose value *is* a map key.
    pub const fn is_key(self) -> bool {
        matches!(self, Self::LabelKey | Self::AnnotationKey)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field: where it happened and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    /// The offending key for key fields, or the owning key for value fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<TokenPart>,
    pub violation: Violation,
}

impl FieldError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self {
            field,
            key: None,
            part: None,
            violation,
        }
    }

    pub fn from_part(field: Field, part_violation: PartViolation) -> Self {
        Self {
            field,
            key: None,
            part: part_violation.part,
            violation: part_violation.violation,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}", self.field)?;
        match &self.key {
            Some(key) if self.field.is_key() => write!(f, " '{}'", key)?,
            Some(key) => write!(f, " for key '{}'", key)?,
            None => {}
        }
        f.write_str(": ")?;
        if let Some(part) = self.part {
            write!(f, "{}: ", part)?;
        }
        write!(f, "{}", self.violation)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

/// Every failure found in one validation call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// `Ok(())` for an empty list, otherwise the list as an error.
    pub fn from_errors(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_errors(&self.0))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Join error descriptions with `"; "`, in input order.
///
/// Callers only pass non-empty slices; an empty slice renders as "".
pub fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
