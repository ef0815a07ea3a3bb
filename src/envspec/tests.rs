// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvVarSpec, NameValuePair, parse};
use crate::error::EnvSpecError;

fn pair(name: &str, value: &str) -> NameValuePair {
    NameValuePair::new(name, value)
}

fn parsed(raw: &str) -> Vec<NameValuePair> {
    parse(Some(raw)).unwrap().into_pairs()
}

#[test]
fn test_missing_and_blank_specs_are_empty() {
    assert!(parse(None).unwrap().is_empty());
    assert!(parse(Some("")).unwrap().is_empty());
    assert!(parse(Some(" \t\n ")).unwrap().is_empty());
}

#[test]
fn test_empty_list_is_rejected() {
    assert_eq!(parse(Some("[]")), Err(EnvSpecError::InvalidSpecification));
    assert_eq!(parse(Some("  [ \n ]  ")), Err(EnvSpecError::InvalidSpecification));
}

#[test]
fn test_single_pair() {
    assert_eq!(parsed("[{name, value}]"), vec![pair("name", "value")]);
}

#[test]
fn test_single_pair_with_whitespace() {
    assert_eq!(
        parsed("  [{   name, value \n} \t] "),
        vec![pair("name", "value")]
    );
}

#[test]
fn test_pairs_keep_input_order() {
    assert_eq!(
        parsed("[{name, value}, {name2, value2}, {key, val}, {k2, v2}]"),
        vec![
            pair("name", "value"),
            pair("name2", "value2"),
            pair("key", "val"),
            pair("k2", "v2"),
        ]
    );
}

#[test]
fn test_multiple_pairs_with_whitespace() {
    assert_eq!(
        parsed("\n [{ name   , value}, { name2\t, value2}, {  key, val},  {k2, v2 }]"),
        vec![
            pair("name", "value"),
            pair("name2", "value2"),
            pair("key", "val"),
            pair("k2", "v2"),
        ]
    );
}

#[test]
fn test_interior_whitespace_is_preserved() {
    assert_eq!(
        parsed("[{ JAVA_OPTS , -Xmx1g  -Xms512m }]"),
        vec![pair("JAVA_OPTS", "-Xmx1g  -Xms512m")]
    );
}

#[test]
fn test_duplicate_names_are_kept() {
    assert_eq!(
        parsed("[{STAGE, alpha}, {STAGE, beta}]"),
        vec![pair("STAGE", "alpha"), pair("STAGE", "beta")]
    );
}

#[test]
fn test_token_characters_outside_delimiters_are_allowed() {
    assert_eq!(
        parsed("[{URL, https://example.com/a?b=c&d=e}, {PATH, C:\\tools;/usr/bin}]"),
        vec![
            pair("URL", "https://example.com/a?b=c&d=e"),
            pair("PATH", "C:\\tools;/usr/bin"),
        ]
    );
}

#[test]
fn test_malformed_specs_are_rejected() {
    let cases = [
        "[{}]",
        "[{,}]",
        "[{,value}]",
        "[{name,}]",
        "[{name, value}, {name, value, }]",
        "[{name, value},}]",
        "[{name, value,}]",
        "[{name, ,value}]",
        "[name, value]",
        "[{name, value} {name, value}]",
        "[{name, value},,{name, value}]",
        "[{name, value}, bad{name2, value2}, {key, val}, {k2, v2}]",
        "[name{name,, value}]",
        "[{name, anem, value}]",
        "[{name, {name, value}, value}]",
        "[{name, value} name, value}]",
        "[{,name value,}]",
        "[{name, value},]",
        "[,{name, value}]",
        "[{name, value}",
        "{name, value}]",
        "{name, value}",
        "[{name, value}] trailing",
        "[{name, value}]]",
        "[[{name, value}]]",
        "[{name, value]}",
        "[{na[me, value}]",
        "[{name, value}}]",
        "[{name value}]",
        "[{name, value",
        "name=value",
    ];

    for case in cases {
        assert_eq!(
            parse(Some(case)),
            Err(EnvSpecError::InvalidSpecification),
            "expected rejection for {case:?}"
        );
    }
}

#[test]
fn test_display_is_canonical() {
    let spec = parse(Some(" [{ a ,1 },{b,  2}] ")).unwrap();
    insta::assert_snapshot!(spec.to_string(), @"[{a, 1}, {b, 2}]");
    assert_eq!(EnvVarSpec::default().to_string(), "");
}

#[test]
fn test_reparse_canonical_form() {
    let raw = "\n[{ name , value one }, {name2,value2}, {name, again}]\t";
    let first = parse(Some(raw)).unwrap();
    let second: EnvVarSpec = first.to_string().parse().unwrap();
    assert_eq!(first, second);

    let empty = parse(None).unwrap();
    assert_eq!(parse(Some(empty.to_string().as_str())).unwrap(), empty);
}

#[test]
fn test_serializes_as_list_of_pairs() {
    let spec = parse(Some("[{STAGE, beta}]")).unwrap();
    insta::assert_snapshot!(
        serde_json::to_string(&spec).unwrap(),
        @r#"[{"name":"STAGE","value":"beta"}]"#
    );
}

#[test]
fn test_deserialize_valid_pairs() {
    let spec: EnvVarSpec =
        serde_json::from_str(r#"[{"name":"STAGE","value":"beta"},{"name":"A","value":"x y"}]"#)
            .unwrap();
    assert_eq!(spec, parse(Some("[{STAGE, beta}, {A, x y}]")).unwrap());
}

#[test]
fn test_deserialize_rejects_tokens_the_parser_rejects() {
    let cases = [
        r#"[{"name":"","value":"x"}]"#,
        r#"[{"name":"a","value":"   "}]"#,
        r#"[{"name":" a","value":"x"}]"#,
        r#"[{"name":"a","value":"x,y"}]"#,
        r#"[{"name":"a{","value":"x"}]"#,
        r#"[{"name":"a","value":"[x]"}]"#,
    ];
    for raw in cases {
        assert!(
            serde_json::from_str::<EnvVarSpec>(raw).is_err(),
            "expected rejection of {raw}"
        );
    }
}

#[test]
fn test_try_new_applies_token_rules() {
    assert_eq!(
        NameValuePair::try_new("STAGE", "beta").unwrap(),
        pair("STAGE", "beta")
    );
    assert_eq!(
        NameValuePair::try_new("", "x"),
        Err(EnvSpecError::InvalidSpecification)
    );
    assert_eq!(
        NameValuePair::try_new("a", "x}"),
        Err(EnvSpecError::InvalidSpecification)
    );
}

mod properties {
    use proptest::prelude::*;

    use super::parse;

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&x| x == c).count()
    }

    proptest! {
        #[test]
        fn unbalanced_delimiters_never_parse(raw in "[\\[\\]{},a-z \t\n]{0,40}") {
            let braces_unbalanced = count(&raw, '{') != count(&raw, '}');
            let brackets_unbalanced = count(&raw, '[') != count(&raw, ']');
            prop_assume!(braces_unbalanced || brackets_unbalanced);
            prop_assert!(parse(Some(raw.as_str())).is_err());
        }

        #[test]
        fn canonical_form_reparses(
            pairs in proptest::collection::vec(("[A-Z_]{1,8}", "[a-z0-9 ./:-]{0,12}[a-z0-9]"), 1..6)
        ) {
            let raw = format!(
                "[{}]",
                pairs
                    .iter()
                    .map(|(n, v)| format!("{{ {n} ,{v} }}"))
                    .collect::<Vec<_>>()
                    .join(" , ")
            );
            let spec = parse(Some(raw.as_str())).unwrap();
            prop_assert_eq!(spec.len(), pairs.len());
            for (parsed, (name, value)) in spec.iter().zip(&pairs) {
                prop_assert_eq!(parsed.name(), name.as_str());
                prop_assert_eq!(parsed.value(), value.trim());
            }
            prop_assert_eq!(parse(Some(spec.to_string().as_str())).unwrap(), spec);
        }
    }
}
