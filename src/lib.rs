// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! kube-ident - syntactic validation of Kubernetes manifest identifiers.
//!
//! Covers `metadata.name`, label and annotation keys and values,
//! `apiVersion` and `kind`. Values are validated as already-extracted
//! strings; no manifest documents are parsed here.
//!
//! ```
//! use kube_ident::{validate_api_version, validate_kind, validate_metadata_labels};
//!
//! assert!(validate_api_version("apps/v1beta1").is_ok());
//! assert!(validate_kind("deployment").is_err());
//!
//! let errors = validate_metadata_labels([("a/b/c", "ok"), ("app", "-bad")]).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod grammar;
pub mod validation;

pub use grammar::{PartViolation, TokenPart, Violation};
pub use validation::{
    join_errors, validate_annotation_key, validate_annotation_value, validate_api_group,
    validate_api_version, validate_kind, validate_label_key, validate_label_value,
    validate_manifest_fields, validate_metadata_annotations, validate_metadata_labels,
    validate_metadata_name, Field, FieldError, ManifestFields, MetadataFields, ValidationErrors,
};
