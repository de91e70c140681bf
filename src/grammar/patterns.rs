// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Compiled character-class patterns shared by every matcher.

use std::sync::OnceLock;

use const_format::concatcp;
use regex::Regex;

const DNS_LABEL_FMT: &str = "[A-Za-z0-9]([-A-Za-z0-9]*[A-Za-z0-9])?";
const LOWER_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS_SUBDOMAIN_FMT: &str = concatcp!(LOWER_LABEL_FMT, "(\\.", LOWER_LABEL_FMT, ")*");
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";
const LABEL_VALUE_FMT: &str = "[A-Za-z0-9]([-A-Za-z0-9.]*[A-Za-z0-9])?";
// `\d` is Unicode-aware in the regex crate, so digits are spelled out.
const VERSION_FMT: &str = "v[0-9]+((alpha|beta)[0-9]+)?";
const API_GROUP_FMT: &str = "[A-Za-z0-9]([-.A-Za-z0-9]*[A-Za-z0-9])?";
const ALPHANUMERIC_FMT: &str = "[A-Za-z0-9]+";
const API_VERSION_CHARS_FMT: &str = "[A-Za-z0-9/-]+";

const DNS_LABEL_ERROR_MSG: &str =
    "must consist of alphanumeric characters or '-', and must start and end with an alphanumeric character";
const DNS_SUBDOMAIN_ERROR_MSG: &str = "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";
const QUALIFIED_NAME_ERROR_MSG: &str = "must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character";
const LABEL_VALUE_ERROR_MSG: &str = "must consist of alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";
const VERSION_ERROR_MSG: &str =
    "must match `v<number>` optionally followed by `alpha<number>` or `beta<number>`";
const API_GROUP_ERROR_MSG: &str = "must consist of alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";
const ALPHANUMERIC_ERROR_MSG: &str = "must consist of alphanumeric characters only";
const API_VERSION_CHARS_ERROR_MSG: &str =
    "must consist of alphanumeric characters, '-' or '/' only";

/// A fixed grammar that a whole input string must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pattern {
    DnsLabel,
    DnsSubdomain,
    QualifiedNamePart,
    LabelValue,
    Version,
    ApiGroup,
    Alphanumeric,
    ApiVersionChars,
}

const PATTERN_COUNT: usize = 8;

static COMPILED: [OnceLock<Regex>; PATTERN_COUNT] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

impl Pattern {
    /// Unanchored source of the grammar.
    pub(crate) const fn source(self) -> &'static str {
        match self {
            Self::DnsLabel => DNS_LABEL_FMT,
            Self::DnsSubdomain => DNS_SUBDOMAIN_FMT,
            Self::QualifiedNamePart => QUALIFIED_NAME_FMT,
            Self::LabelValue => LABEL_VALUE_FMT,
            Self::Version => VERSION_FMT,
            Self::ApiGroup => API_GROUP_FMT,
            Self::Alphanumeric => ALPHANUMERIC_FMT,
            Self::ApiVersionChars => API_VERSION_CHARS_FMT,
        }
    }

    /// Human-readable statement of what the grammar accepts.
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::DnsLabel => DNS_LABEL_ERROR_MSG,
            Self::DnsSubdomain => DNS_SUBDOMAIN_ERROR_MSG,
            Self::QualifiedNamePart => QUALIFIED_NAME_ERROR_MSG,
            Self::LabelValue => LABEL_VALUE_ERROR_MSG,
            Self::Version => VERSION_ERROR_MSG,
            Self::ApiGroup => API_GROUP_ERROR_MSG,
            Self::Alphanumeric => ALPHANUMERIC_ERROR_MSG,
            Self::ApiVersionChars => API_VERSION_CHARS_ERROR_MSG,
        }
    }

    fn regex(self) -> &'static Regex {
        COMPILED[self as usize].get_or_init(|| {
            let anchored = format!("^(?:{})$", self.source());
            Regex::new(&anchored)
                .unwrap_or_else(|e| panic!("built-in {:?} pattern failed to compile: {}", self, e))
        })
    }

    /// True when the entire input matches the grammar.
    pub(crate) fn is_match(self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}
