// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for environment variable specifications.
//!
//! Exercises the parser through the public API together with the request
//! rules layered on top of it.

use codebuild_rs::envspec::{EnvVarSpec, NameValuePair, parse};
use codebuild_rs::error::{EnvSpecError, ValidationError};
use codebuild_rs::request::to_environment_variables;
use codebuild_rs::validation::parse_env_variables;

fn names_and_values(spec: &EnvVarSpec) -> Vec<(&str, &str)> {
    spec.iter().map(|p| (p.name(), p.value())).collect()
}

// =============================================================================
// Accepted specifications
// =============================================================================

#[test]
fn envspec_absent_and_blank() {
    assert!(parse(None).unwrap().is_empty());
    assert!(parse(Some("")).unwrap().is_empty());
    assert!(parse(Some("   ")).unwrap().is_empty());
}

#[test]
fn envspec_single_pair() {
    let spec = parse(Some("[{name, value}]")).unwrap();
    assert_eq!(names_and_values(&spec), vec![("name", "value")]);
}

#[test]
fn envspec_surrounding_whitespace() {
    let spec = parse(Some("  [{   name, value \n} \t] ")).unwrap();
    assert_eq!(names_and_values(&spec), vec![("name", "value")]);
}

#[test]
fn envspec_four_pairs_in_order() {
    let spec = parse(Some("[{name, value}, {name2, value2}, {key, val}, {k2, v2}]")).unwrap();
    assert_eq!(
        names_and_values(&spec),
        vec![
            ("name", "value"),
            ("name2", "value2"),
            ("key", "val"),
            ("k2", "v2"),
        ]
    );
}

#[test]
fn envspec_whitespace_everywhere() {
    let spec = parse(Some(
        "\n [{ name   , value}, { name2\t, value2}, {  key, val},  {k2, v2 }]",
    ))
    .unwrap();
    assert_eq!(spec.len(), 4);
    assert_eq!(spec.pairs()[1], NameValuePair::try_new("name2", "value2").unwrap());
}

#[test]
fn envspec_inner_whitespace_preserved() {
    let spec = parse(Some("[{ my name , a  value }]")).unwrap();
    assert_eq!(names_and_values(&spec), vec![("my name", "a  value")]);
}

#[test]
fn envspec_duplicate_names_retained() {
    let spec = parse(Some("[{A, 1}, {A, 2}]")).unwrap();
    assert_eq!(names_and_values(&spec), vec![("A", "1"), ("A", "2")]);
}

#[test]
fn envspec_from_str_matches_parse() {
    let from_str: EnvVarSpec = "[{A, 1}, {B, 2}]".parse().unwrap();
    assert_eq!(from_str, parse(Some("[{A, 1}, {B, 2}]")).unwrap());
}

#[test]
fn envspec_canonical_display() {
    let spec = parse(Some(" [{a,1},{ b , 2 }] ")).unwrap();
    assert_eq!(spec.to_string(), "[{a, 1}, {b, 2}]");
    assert_eq!(parse(Some(spec.to_string().as_str())).unwrap(), spec);
}

#[test]
fn envspec_built_pairs_display_and_reparse() {
    let spec = EnvVarSpec::from(vec![
        NameValuePair::try_new("STAGE", "prod").unwrap(),
        NameValuePair::try_new("OPTS", "-a -b").unwrap(),
    ]);
    assert_eq!(parse(Some(spec.to_string().as_str())).unwrap(), spec);
}

// =============================================================================
// Rejected specifications
// =============================================================================

#[test]
fn envspec_rejects_malformed_input() {
    let cases = [
        "[]",
        "[{name, value}",
        "{name, value}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}]]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, ]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3, }]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3, k4}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3, k4, v4}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3} {k4, v4}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3}, {k4, v4]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, k3, v3}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {{k3, v3}]",
        "[{name, value}, {name2, value2}, {key, val}, {k2, v2}, {k3, v3}}]",
        "[{, value}]",
        "[{name, }]",
        "[{name value}]",
        "[[{name, value}]]",
    ];
    for raw in cases {
        assert_eq!(
            parse(Some(raw)),
            Err(EnvSpecError::InvalidSpecification),
            "expected rejection of {raw:?}"
        );
    }
}

#[test]
fn envspec_deserialize_rejects_empty_name() {
    let result = serde_json::from_str::<EnvVarSpec>(r#"[{"name":"","value":"x"}]"#);
    assert!(result.is_err());
}

// =============================================================================
// Request rules on top of the grammar
// =============================================================================

#[test]
fn envspec_restricted_prefix_rejected_for_requests() {
    let err = parse_env_variables(Some("[{PATH, /bin}, {CODEBUILD_X, 1}]")).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::RestrictedPrefix { ref name, .. } if name == "CODEBUILD_X"
    ));
}

#[test]
fn envspec_malformed_surfaces_as_validation_error() {
    let err = parse_env_variables(Some("[{a, b}")).unwrap_err();
    assert_eq!(
        err.to_string(),
        EnvSpecError::InvalidSpecification.to_string()
    );
}

#[test]
fn envspec_to_plaintext_variables() {
    let spec = parse_env_variables(Some("[{STAGE, prod}, {REGION, eu-west-1}]")).unwrap();
    let vars = to_environment_variables(spec);
    let json = serde_json::to_string(&vars).unwrap();
    insta::assert_snapshot!(json, @r#"[{"name":"STAGE","value":"prod","type":"PLAINTEXT"},{"name":"REGION","value":"eu-west-1","type":"PLAINTEXT"}]"#);
}
