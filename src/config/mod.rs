// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for codebuild-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. codebuild.toml (cwd)
//! 3. --ini FILE
//! 4. CODEBUILD_RS_* env vars
//! 5. --set section/key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CODEBUILD_RS_AWS__REGION=us-east-1           → aws.region = "us-east-1"
//! CODEBUILD_RS_PROJECT__NAME=app               → project.name = "app"
//! CODEBUILD_RS_PROJECT__ENV_VARIABLES='[{a,b}]' → project.env_variables
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{AwsConfig, GlobalConfig, ProjectConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "codebuild.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CODEBUILD_RS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Credentials, region and proxy.
    pub aws: AwsConfig,
    /// Build project settings.
    pub project: ProjectConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use codebuild_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/codebuild.toml")
    ///     .add_toml_file_optional("codebuild.local.toml")
    ///     .with_env_prefix("CODEBUILD_RS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Keys are sorted. Credentials are shown as `[hidden]`, unset options
    /// as an empty value.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_aws_options(&mut options);
        self.format_project_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_aws_options(&self, options: &mut BTreeMap<String, String>) {
        let aws = &self.aws;
        options.insert(
            "aws.credentials_type".into(),
            aws.credentials_type.clone(),
        );
        options.insert("aws.access_key".into(), hidden(aws.access_key.as_ref()));
        options.insert("aws.secret_key".into(), hidden(aws.secret_key.as_ref()));
        options.insert("aws.iam_role_arn".into(), shown(aws.iam_role_arn.as_ref()));
        options.insert("aws.region".into(), shown(aws.region.as_ref()));
        options.insert("aws.proxy_host".into(), shown(aws.proxy_host.as_ref()));
        options.insert("aws.proxy_port".into(), shown(aws.proxy_port.as_ref()));
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        let project = &self.project;
        options.insert("project.name".into(), shown(project.name.as_ref()));
        options.insert(
            "project.source_type".into(),
            shown(project.source_type.as_ref()),
        );
        options.insert(
            "project.source_location".into(),
            shown(project.source_location.as_ref()),
        );
        options.insert(
            "project.source_version".into(),
            shown(project.source_version.as_ref()),
        );
        options.insert(
            "project.artifact_type".into(),
            shown(project.artifact_type.as_ref()),
        );
        options.insert(
            "project.artifact_location".into(),
            shown(project.artifact_location.as_ref()),
        );
        options.insert(
            "project.artifact_base_url".into(),
            shown(project.artifact_base_url.as_ref()),
        );
        options.insert(
            "project.env_variables".into(),
            shown(project.env_variables.as_ref()),
        );
        options.insert(
            "project.workspace".into(),
            project
                .workspace
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }
}

fn shown(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn hidden(value: Option<&String>) -> String {
    match value {
        Some(v) if !v.is_empty() => "[hidden]".to_string(),
        _ => String::new(),
    }
}
