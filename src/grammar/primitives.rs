// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Length-bounded character-class matchers.
//!
//! Every matcher checks, in order: emptiness, maximum length (in bytes), then
//! the character class. The first failing check is the one reported.

use super::patterns::Pattern;
use super::violation::Violation;

/// Maximum length of an RFC 1123 label.
pub const DNS_LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of an RFC 1123 subdomain.
pub const DNS_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of the name part of a label or annotation key.
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

/// Maximum length of a whole `[prefix/]name` key.
pub const QUALIFIED_KEY_MAX_LENGTH: usize =
    DNS_SUBDOMAIN_MAX_LENGTH + 1 + QUALIFIED_NAME_MAX_LENGTH;

/// Maximum length of a non-empty label value.
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;
/// Maximum length of an `apiVersion` string.
pub const API_VERSION_MAX_LENGTH: usize = 63;
/// Maximum length of a CRD API group name.
pub const API_GROUP_MAX_LENGTH: usize = 253;
/// Maximum length of a `kind`.
pub const KIND_MAX_LENGTH: usize = 63;

/// Reject empty input and input longer than `max_length` bytes.
pub fn validate_length(input: &str, max_length: usize) -> Result<(), Violation> {
    if input.is_empty() {
        return Err(Violation::EmptyInput);
    }

    if input.len() > max_length {
        return Err(Violation::LengthExceeded {
            max: max_length,
            actual: input.len(),
        });
    }

    Ok(())
}

/// Length gate followed by a whole-string pattern match.
pub(crate) fn validate_bounded(
    input: &str,
    max_length: usize,
    pattern: Pattern,
) -> Result<(), Violation> {
    validate_length(input, max_length)?;
    validate_pattern(input, pattern)
}

pub(crate) fn validate_pattern(input: &str, pattern: Pattern) -> Result<(), Violation> {
    if input.is_empty() {
        return Err(Violation::EmptyInput);
    }

    if !pattern.is_match(input) {
        return Err(Violation::InvalidCharacterClass {
            expected: pattern.description(),
        });
    }

    Ok(())
}

/// RFC 1123 label: alphanumerics and `-`, alphanumeric at both ends, at most 63.
pub fn validate_dns_label(label: &str) -> Result<(), Violation> {
    validate_bounded(label, DNS_LABEL_MAX_LENGTH, Pattern::DnsLabel)
}

/// RFC 1123 subdomain: lowercase labels joined by `.`, at most 253.
pub fn validate_dns_subdomain(subdomain: &str) -> Result<(), Violation> {
    validate_bounded(subdomain, DNS_SUBDOMAIN_MAX_LENGTH, Pattern::DnsSubdomain)
}

/// Name half of a qualified key: alphanumerics, `-`, `_` and `.`, at most 63.
pub fn validate_qualified_name_part(name: &str) -> Result<(), Violation> {
    validate_bounded(name, QUALIFIED_NAME_MAX_LENGTH, Pattern::QualifiedNamePart)
}

/// `v1`, `v2beta3`, `v10alpha1`, ...
pub fn validate_version_token(version: &str) -> Result<(), Violation> {
    validate_pattern(version, Pattern::Version)
}

/// API group name as written in a CRD: alphanumerics, `-` and `.`, at most 253.
pub fn validate_api_group_token(group: &str) -> Result<(), Violation> {
    validate_bounded(group, API_GROUP_MAX_LENGTH, Pattern::ApiGroup)
}

pub fn validate_alphanumeric(input: &str) -> Result<(), Violation> {
    validate_pattern(input, Pattern::Alphanumeric)
}

/// First character must be an ASCII uppercase letter.
pub fn validate_starts_with_uppercase(input: &str) -> Result<(), Violation> {
    match input.chars().next() {
        None => Err(Violation::EmptyInput),
        Some(first) if first.is_ascii_uppercase() => Ok(()),
        Some(_) => Err(Violation::MissingUppercaseStart),
    }
}

/// Well-formed UTF-8 is the only requirement; the decoded text is returned.
pub fn validate_utf8(bytes: &[u8]) -> Result<&str, Violation> {
    std::str::from_utf8(bytes).map_err(|e| Violation::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

pub fn is_dns_label(label: &str) -> bool {
    validate_dns_label(label).is_ok()
}

pub fn is_dns_subdomain(subdomain: &str) -> bool {
    validate_dns_subdomain(subdomain).is_ok()
}

pub fn is_qualified_name_part(name: &str) -> bool {
    validate_qualified_name_part(name).is_ok()
}

pub fn is_version_token(version: &str) -> bool {
    validate_version_token(version).is_ok()
}

pub fn is_api_group_token(group: &str) -> bool {
    validate_api_group_token(group).is_ok()
}

pub fn is_alphanumeric(input: &str) -> bool {
    validate_alphanumeric(input).is_ok()
}
