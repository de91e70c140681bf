// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Field validators for Kubernetes manifest identifiers.
//!
//! Single values go through the per-field functions; label and annotation
//! maps and whole field sets go through the aggregating functions, which
//! report every failure instead of stopping at the first.

pub mod aggregate;
pub mod error;
pub mod fields;
pub mod manifest;

pub use aggregate::{validate_metadata_annotations, validate_metadata_labels};
pub use error::{join_errors, Field, FieldError, ValidationErrors};
pub use fields::{
    validate_annotation_key, validate_annotation_value, validate_api_group, validate_api_version,
    validate_kind, validate_label_key, validate_label_value, validate_metadata_name,
};
pub use manifest::{validate_manifest_fields, ManifestFields, MetadataFields};

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
