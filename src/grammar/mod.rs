// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Grammar primitives for Kubernetes identifier strings.
//!
//! Everything in here is a pure function over one string: RFC 1123 label and
//! subdomain matching, qualified-name parts, version tokens, and the
//! `[prefix/]name` and `[group/]version` splitters that dispatch to them.

pub mod group_version;
pub(crate) mod patterns;
pub mod primitives;
pub mod qualified_key;
pub mod violation;

pub use group_version::{parse_group_version, GroupVersion};
pub use primitives::{
    is_alphanumeric, is_api_group_token, is_dns_label, is_dns_subdomain, is_qualified_name_part,
    is_version_token, validate_alphanumeric, validate_api_group_token, validate_dns_label,
    validate_dns_subdomain, validate_length, validate_qualified_name_part,
    validate_starts_with_uppercase, validate_utf8, validate_version_token, API_GROUP_MAX_LENGTH,
    API_VERSION_MAX_LENGTH, DNS_LABEL_MAX_LENGTH, DNS_SUBDOMAIN_MAX_LENGTH, KIND_MAX_LENGTH,
    LABEL_VALUE_MAX_LENGTH, QUALIFIED_KEY_MAX_LENGTH, QUALIFIED_NAME_MAX_LENGTH,
};
pub use qualified_key::{split_qualified_key, validate_qualified_key, QualifiedKey};
pub use violation::{PartViolation, TokenPart, Violation};

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
