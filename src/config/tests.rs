// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use super::loader::parse_override;
use crate::error::ConfigError;
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.as_os_str().is_empty());
    assert_eq!(config.aws.credentials_type, "keys");
    assert!(config.aws.region.is_none());
    assert!(config.project.name.is_none());
    assert!(config.project.env_variables.is_none());
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 5

[aws]
credentials_type = "role"
iam_role_arn = "arn:aws:iam::123456789012:role/CodeBuildRole"
region = "eu-west-1"

[project]
name = "app"
source_type = "S3"
env_variables = "[{STAGE, beta}]"
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.aws.credentials_type, "role");
    assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.project.name.as_deref(), Some("app"));
    assert_eq!(config.project.env_variables.as_deref(), Some("[{STAGE, beta}]"));
}

#[test]
fn test_unknown_key_is_rejected() {
    assert!(Config::parse("[project]\nnmae = \"typo\"\n").is_err());
    assert!(Config::parse("[unknown]\nkey = 1\n").is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[project]\nname = \"first\"\nsource_type = \"S3\"\n")
        .add_toml_str("[project]\nname = \"second\"\n")
        .build()
        .unwrap();
    assert_eq!(config.project.name.as_deref(), Some("second"));
    assert_eq!(config.project.source_type.as_deref(), Some("S3"));
}

#[test]
fn test_set_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[aws]\nregion = \"us-east-1\"\n")
        .apply_override("aws/region=eu-central-1")
        .unwrap()
        .apply_override("global/output_log_level=2")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.aws.region.as_deref(), Some("eu-central-1"));
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("project/env_variables=[{a, b}]").unwrap(),
        ("project.env_variables".to_string(), "[{a, b}]".to_string())
    );
    assert_eq!(
        parse_override("aws/proxy_host=").unwrap(),
        ("aws.proxy_host".to_string(), String::new())
    );
    for bad in ["aws.region=x", "region", "/region=x", "aws/=x"] {
        assert!(
            matches!(parse_override(bad), Err(ConfigError::InvalidOverride(_))),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn test_format_options_hides_keys() {
    let config = Config::parse(
        r#"
[aws]
access_key = "AKIAEXAMPLE"
secret_key = "very-secret"
region = "us-west-2"
"#,
    )
    .unwrap();
    let lines = config.format_options();
    let joined = lines.join("\n");
    assert!(!joined.contains("AKIAEXAMPLE"));
    assert!(!joined.contains("very-secret"));
    assert!(lines.iter().any(|l| l.starts_with("aws.access_key") && l.ends_with("= [hidden]")));
    assert!(lines.iter().any(|l| l.starts_with("aws.region") && l.ends_with("= us-west-2")));

    let keys: Vec<_> = lines
        .iter()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_loaded_files_tracking() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("codebuild.toml");
    std::fs::write(&present, "[project]\nname = \"app\"\n").unwrap();
    let missing = dir.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .add_toml_file(&present)
        .add_toml_file_optional(&missing)
        .add_toml_str("");
    assert_eq!(loader.loaded_files().len(), 2);
    let formatted = loader.format_loaded_files();
    assert!(formatted[0].starts_with("1. [file] "));
    assert_eq!(formatted[1], "2. [string] <string>");

    let config = loader.build().unwrap();
    assert_eq!(config.project.name.as_deref(), Some("app"));
}

#[test]
fn test_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("nope.toml")).is_err());
}
