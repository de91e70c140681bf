// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Identifier fields already extracted from a manifest.
//!
//! The caller's loader fills these in; nothing here reads YAML documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::{validate_metadata_annotations, validate_metadata_labels};
use super::error::ValidationErrors;
use super::fields::{validate_api_version, validate_kind, validate_metadata_name};

/// The five identifier fields of one manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestFields {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetadataFields,
}

/// Identifier fields under `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFields {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ManifestFields {
    /// Validate all fields
    ///
    /// # Errors
    /// Returns every failure across all five fields.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_manifest_fields(self)
    }
}

/// Validate apiVersion, kind, metadata.name, labels and annotations together.
///
/// Failures are reported in that field order.
pub fn validate_manifest_fields(fields: &ManifestFields) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    errors.extend(validate_api_version(&fields.api_version).err());
    errors.extend(validate_kind(&fields.kind).err());
    errors.extend(validate_metadata_name(&fields.metadata.name).err());

    if let Err(e) = validate_metadata_labels(&fields.metadata.labels) {
        errors.extend(e);
    }
    if let Err(e) = validate_metadata_annotations(&fields.metadata.annotations) {
        errors.extend(e);
    }

    tracing::debug!(
        kind = %fields.kind,
        name = %fields.metadata.name,
        failures = errors.len(),
        "validated manifest fields"
    );
    ValidationErrors::from_errors(errors)
}
