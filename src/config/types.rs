// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for codebuild-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, AwsConfig, ProjectConfig
//! ```
//!
//! Most AWS and project fields are optional strings: an unset field and an
//! empty field are both reported by validation, not by deserialization.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Credentials, region and proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AwsConfig {
    /// `keys` or `role`. Kept as a string so an invalid value is reported
    /// by `check` rather than rejected at load time.
    pub credentials_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_host: Option<String>,
    /// Proxy port as written by the user (validated, not parsed, on load).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            credentials_type: "keys".to_string(),
            access_key: None,
            secret_key: None,
            iam_role_arn: None,
            region: None,
            proxy_host: None,
            proxy_port: None,
        }
    }
}

/// Build project settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Remote build project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source provider, e.g. `S3` or `GITHUB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
    /// Commit, branch or object version to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_location: Option<String>,
    /// Console URL prefix used to link S3 artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_base_url: Option<String>,
    /// Environment variables, `[{name, value}, ...]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_variables: Option<String>,
    /// Local workspace uploaded for S3 sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
}
