// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Reasons a string can fail a grammar.

use serde::Serialize;
use thiserror::Error;

/// The most specific rule an input broke.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("must not be empty")]
    EmptyInput,

    #[error("exceeds maximum length of {max} characters (got {actual})")]
    LengthExceeded { max: usize, actual: usize },

    #[error("{expected}")]
    InvalidCharacterClass { expected: &'static str },

    #[error("contains {found} slashes (/); at most one slash is allowed")]
    InvalidSlashCount { found: usize },

    #[error("must be valid UTF-8 text (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("must start with an uppercase letter")]
    MissingUppercaseStart,
}

/// Which half of a split token a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPart {
    /// DNS subdomain before the `/` of a qualified key.
    Prefix,
    /// Qualified-name part of a key.
    Name,
    /// API group before the `/` of an apiVersion.
    Group,
    /// Version token of an apiVersion.
    Version,
}

impl std::fmt::Display for TokenPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Name => write!(f, "name part"),
            Self::Group => write!(f, "API group"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// A violation located in one part of a split token.
///
/// `part` is `None` when the token failed as a whole, before any split.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct PartViolation {
    pub part: Option<TokenPart>,
    #[source]
    pub violation: Violation,
}

impl PartViolation {
    pub fn whole(violation: Violation) -> Self {
        Self {
            part: None,
            violation,
        }
    }

    pub fn in_part(part: TokenPart, violation: Violation) -> Self {
        Self {
            part: Some(part),
            violation,
        }
    }
}

impl std::fmt::Display for PartViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.part {
            Some(part) => write!(f, "{}: {}", part, self.violation),
            None => write!(f, "{}", self.violation),
        }
    }
}
