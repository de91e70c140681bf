// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the grammar primitives and group/version parsing.

use super::patterns::Pattern;
use super::*;

#[test]
fn test_dns_label_valid() {
    assert!(validate_dns_label("a").is_ok());
    assert!(validate_dns_label("apps").is_ok());
    assert!(validate_dns_label("my-group-1").is_ok());
    assert!(validate_dns_label("Apps").is_ok());
    assert!(validate_dns_label(&"a".repeat(DNS_LABEL_MAX_LENGTH)).is_ok());
}

#[test]
fn test_dns_label_invalid() {
    for input in ["-apps", "apps-", "a.b", "a_b", "a b", "é"] {
        assert!(
            matches!(
                validate_dns_label(input),
                Err(Violation::InvalidCharacterClass { .. })
            ),
            "expected class failure for {:?}",
            input
        );
    }
}

#[test]
fn test_dns_label_length_checked_before_class() {
    let too_long = "-".repeat(DNS_LABEL_MAX_LENGTH + 1);
    assert_eq!(
        validate_dns_label(&too_long),
        Err(Violation::LengthExceeded { max: 63, actual: 64 })
    );
}

#[test]
fn test_empty_is_distinct_from_malformed() {
    assert_eq!(validate_dns_label(""), Err(Violation::EmptyInput));
    assert_eq!(validate_dns_subdomain(""), Err(Violation::EmptyInput));
    assert_eq!(validate_qualified_name_part(""), Err(Violation::EmptyInput));
    assert_eq!(validate_version_token(""), Err(Violation::EmptyInput));
    assert_eq!(validate_alphanumeric(""), Err(Violation::EmptyInput));
    assert_eq!(validate_starts_with_uppercase(""), Err(Violation::EmptyInput));
    assert_eq!(validate_api_group_token(""), Err(Violation::EmptyInput));
}

#[test]
fn test_dns_subdomain_valid() {
    assert!(validate_dns_subdomain("example").is_ok());
    assert!(validate_dns_subdomain("app.kubernetes.io").is_ok());
    assert!(validate_dns_subdomain("a-1.b-2.c-3").is_ok());
    assert!(validate_dns_subdomain(&"a".repeat(DNS_SUBDOMAIN_MAX_LENGTH)).is_ok());
}

#[test]
fn test_dns_subdomain_invalid() {
    for input in [
        "App.io",
        "app..io",
        ".app.io",
        "app.io.",
        "app.-io",
        "app-.io",
        "app_io",
        "app/io",
    ] {
        assert!(
            matches!(
                validate_dns_subdomain(input),
                Err(Violation::InvalidCharacterClass { .. })
            ),
            "expected class failure for {:?}",
            input
        );
    }

    assert_eq!(
        validate_dns_subdomain(&"a".repeat(254)),
        Err(Violation::LengthExceeded { max: 253, actual: 254 })
    );
}

#[test]
fn test_qualified_name_part() {
    assert!(validate_qualified_name_part("a").is_ok());
    assert!(validate_qualified_name_part("Name").is_ok());
    assert!(validate_qualified_name_part("my_key.v-2").is_ok());

    assert!(!is_qualified_name_part("_name"));
    assert!(!is_qualified_name_part("name."));
    assert!(!is_qualified_name_part("b/c"));
    assert!(!is_qualified_name_part(&"a".repeat(64)));
}

#[test]
fn test_version_token() {
    for ok in ["v1", "v10", "v1beta1", "v2alpha3", "v1beta10"] {
        assert!(is_version_token(ok), "{:?} should be a version", ok);
    }
    for bad in ["1", "v", "V1", "v1.1", "v1beta", "v1gamma1", "v1-beta1", "v\u{0661}"] {
        assert!(!is_version_token(bad), "{:?} should not be a version", bad);
    }
}

#[test]
fn test_api_group_token() {
    assert!(is_api_group_token("apps"));
    assert!(is_api_group_token("networking.k8s.io"));
    assert!(is_api_group_token("Example.COM"));
    assert!(!is_api_group_token("-apps"));
    assert!(!is_api_group_token("apps."));
    assert!(!is_api_group_token("apps/v1"));
    assert!(matches!(
        validate_api_group_token(&"a".repeat(254)),
        Err(Violation::LengthExceeded { max: 253, .. })
    ));
}

#[test]
fn test_alphanumeric_and_uppercase_start() {
    assert!(is_alphanumeric("Pod123"));
    assert!(!is_alphanumeric("Pod-Service"));
    assert!(!is_alphanumeric("Pöd"));

    assert!(validate_starts_with_uppercase("Pod").is_ok());
    assert_eq!(
        validate_starts_with_uppercase("pod"),
        Err(Violation::MissingUppercaseStart)
    );
    assert_eq!(
        validate_starts_with_uppercase("123Pod"),
        Err(Violation::MissingUppercaseStart)
    );
    assert_eq!(
        validate_starts_with_uppercase("Épod"),
        Err(Violation::MissingUppercaseStart)
    );
}

#[test]
fn test_validate_utf8() {
    assert_eq!(validate_utf8("héllo".as_bytes()), Ok("héllo"));
    assert_eq!(validate_utf8(b""), Ok(""));
    assert_eq!(
        validate_utf8(&[0xff, 0xfe]),
        Err(Violation::InvalidUtf8 { valid_up_to: 0 })
    );
    assert_eq!(
        validate_utf8(b"ok\xff"),
        Err(Violation::InvalidUtf8 { valid_up_to: 2 })
    );
}

#[test]
fn test_validate_length() {
    assert_eq!(validate_length("", 5), Err(Violation::EmptyInput));
    assert!(validate_length("abcde", 5).is_ok());
    assert_eq!(
        validate_length("abcdef", 5),
        Err(Violation::LengthExceeded { max: 5, actual: 6 })
    );
}

#[test]
fn test_patterns_are_anchored() {
    // An unanchored match would find "abc" inside each of these.
    assert!(!Pattern::DnsLabel.is_match("abc!"));
    assert!(!Pattern::DnsLabel.is_match("!abc"));
    assert!(!Pattern::Version.is_match("xv1"));
    assert!(!Pattern::Version.is_match("v1x"));
    // Alternation inside the version pattern must not escape the anchors.
    assert!(!Pattern::Version.is_match("v1alpha"));
}

#[test]
fn test_pattern_descriptions_are_distinct() {
    let all = [
        Pattern::DnsLabel,
        Pattern::DnsSubdomain,
        Pattern::QualifiedNamePart,
        Pattern::LabelValue,
        Pattern::Version,
        Pattern::ApiGroup,
        Pattern::Alphanumeric,
        Pattern::ApiVersionChars,
    ];
    for (i, a) in all.iter().enumerate() {
        assert!(!a.source().is_empty());
        for b in &all[i + 1..] {
            assert_ne!(a.source(), b.source());
        }
    }
}

// --- group/version ---

#[test]
fn test_parse_core_version() {
    let gv = parse_group_version("v1").unwrap();
    assert_eq!(gv.group, None);
    assert_eq!(gv.version, "v1");
}

#[test]
fn test_parse_group_version() {
    let gv = parse_group_version("apps/v1beta1").unwrap();
    assert_eq!(gv.group, Some("apps"));
    assert_eq!(gv.version, "v1beta1");
}

#[test]
fn test_group_version_double_slash() {
    assert_eq!(
        parse_group_version("apps//v1"),
        Err(PartViolation::whole(Violation::InvalidSlashCount { found: 2 }))
    );
    assert_eq!(
        parse_group_version("a/b/v1").unwrap_err().violation,
        Violation::InvalidSlashCount { found: 2 }
    );
}

#[test]
fn test_group_version_whole_token_failures() {
    assert_eq!(
        parse_group_version(""),
        Err(PartViolation::whole(Violation::EmptyInput))
    );

    let err = parse_group_version("apps/v1.1").unwrap_err();
    assert_eq!(err.part, None);
    assert!(matches!(err.violation, Violation::InvalidCharacterClass { .. }));

    let too_long = format!("{}/v1", "g".repeat(61));
    assert_eq!(
        parse_group_version(&too_long).unwrap_err().violation,
        Violation::LengthExceeded { max: 63, actual: 64 }
    );
}

#[test]
fn test_group_version_part_failures() {
    assert_eq!(
        parse_group_version("/v1"),
        Err(PartViolation::in_part(TokenPart::Group, Violation::EmptyInput))
    );
    assert_eq!(
        parse_group_version("apps/"),
        Err(PartViolation::in_part(TokenPart::Version, Violation::EmptyInput))
    );

    let err = parse_group_version("-apps/v1").unwrap_err();
    assert_eq!(err.part, Some(TokenPart::Group));

    let err = parse_group_version("apps/1").unwrap_err();
    assert_eq!(err.part, Some(TokenPart::Version));
    assert!(matches!(err.violation, Violation::InvalidCharacterClass { .. }));
}

#[test]
fn test_violation_display() {
    assert_eq!(Violation::EmptyInput.to_string(), "must not be empty");
    assert_eq!(
        Violation::LengthExceeded { max: 63, actual: 70 }.to_string(),
        "exceeds maximum length of 63 characters (got 70)"
    );
    assert_eq!(
        Violation::InvalidSlashCount { found: 3 }.to_string(),
        "contains 3 slashes (/); at most one slash is allowed"
    );
    assert_eq!(
        PartViolation::in_part(TokenPart::Version, Violation::EmptyInput).to_string(),
        "version: must not be empty"
    );
    assert_eq!(
        PartViolation::whole(Violation::MissingUppercaseStart).to_string(),
        "must start with an uppercase letter"
    );
}

#[test]
fn test_violation_serializes_with_kind_tag() {
    let json = serde_json::to_string(&Violation::LengthExceeded { max: 63, actual: 64 }).unwrap();
    assert_eq!(json, r#"{"kind":"length_exceeded","max":63,"actual":64}"#);

    let json = serde_json::to_string(&Violation::EmptyInput).unwrap();
    assert_eq!(json, r#"{"kind":"empty_input"}"#);
}
