// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! `[group/]version` tokens carried by `apiVersion`.

use super::patterns::Pattern;
use super::primitives::{
    validate_dns_label, validate_length, validate_pattern, validate_version_token,
    API_VERSION_MAX_LENGTH,
};
use super::violation::{PartViolation, TokenPart, Violation};

/// A parsed apiVersion. `group` is `None` for the core group (`v1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupVersion<'a> {
    pub group: Option<&'a str>,
    pub version: &'a str,
}

/// Parse and validate an apiVersion string.
///
/// Whole-token checks run first (empty, length, allowed characters, slash
/// count); only a token that passes them is split and checked part by part.
pub fn parse_group_version(api_version: &str) -> Result<GroupVersion<'_>, PartViolation> {
    validate_length(api_version, API_VERSION_MAX_LENGTH).map_err(PartViolation::whole)?;
    validate_pattern(api_version, Pattern::ApiVersionChars).map_err(PartViolation::whole)?;

    let slashes = api_version.matches('/').count();
    if slashes > 1 {
        return Err(PartViolation::whole(Violation::InvalidSlashCount {
            found: slashes,
        }));
    }

    let parsed = match api_version.split_once('/') {
        Some((group, version)) => GroupVersion {
            group: Some(group),
            version,
        },
        None => GroupVersion {
            group: None,
            version: api_version,
        },
    };

    if let Some(group) = parsed.group {
        validate_dns_label(group).map_err(|v| PartViolation::in_part(TokenPart::Group, v))?;
    }

    validate_version_token(parsed.version)
        .map_err(|v| PartViolation::in_part(TokenPart::Version, v))?;

    Ok(parsed)
}
