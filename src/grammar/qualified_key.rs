// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! `[prefix/]name` keys used by labels and annotations.

use super::primitives::{
    validate_dns_subdomain, validate_length, validate_qualified_name_part,
    DNS_SUBDOMAIN_MAX_LENGTH, QUALIFIED_KEY_MAX_LENGTH, QUALIFIED_NAME_MAX_LENGTH,
};
use super::violation::{PartViolation, TokenPart};

/// A key split on its first `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedKey<'a> {
    pub prefix: Option<&'a str>,
    pub name: &'a str,
}

/// Split on the first `/` only. Later slashes stay in `name`.
pub fn split_qualified_key(key: &str) -> QualifiedKey<'_> {
    match key.split_once('/') {
        Some((prefix, name)) => QualifiedKey {
            prefix: Some(prefix),
            name,
        },
        None => QualifiedKey {
            prefix: None,
            name: key,
        },
    }
}

/// Validate a label or annotation key.
///
/// The prefix, when present, must be a DNS subdomain; the name must be a
/// qualified-name part. Lengths (whole key, prefix, name) are checked before
/// any character class; after that the prefix is checked first and only one
/// violation is returned per key. A name that still holds a `/` fails its own
/// grammar, so keys with two or more slashes never pass.
pub fn validate_qualified_key(key: &str) -> Result<QualifiedKey<'_>, PartViolation> {
    validate_length(key, QUALIFIED_KEY_MAX_LENGTH).map_err(PartViolation::whole)?;

    let parsed = split_qualified_key(key);

    if let Some(prefix) = parsed.prefix {
        validate_length(prefix, DNS_SUBDOMAIN_MAX_LENGTH)
            .map_err(|v| PartViolation::in_part(TokenPart::Prefix, v))?;
    }
    validate_length(parsed.name, QUALIFIED_NAME_MAX_LENGTH)
        .map_err(|v| PartViolation::in_part(TokenPart::Name, v))?;

    if let Some(prefix) = parsed.prefix {
        validate_dns_subdomain(prefix)
            .map_err(|v| PartViolation::in_part(TokenPart::Prefix, v))?;
    }

    validate_qualified_name_part(parsed.name)
        .map_err(|v| PartViolation::in_part(TokenPart::Name, v))?;

    Ok(parsed)
}

#[cfg(test)]
#[path = "qualified_key_tests.rs"]
mod tests;
