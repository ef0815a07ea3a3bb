// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Start-build request construction.
//!
//! ```text
//! ProjectConfig
//!   name ----------------> projectName
//!   source_version ------> sourceVersion
//!   artifact_* ----------> artifactsOverride (S3 only)
//!   env_variables
//!     | validation::parse_env_variables
//!     v
//!   [EnvironmentVariable] -> environmentVariablesOverride
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::config::types::ProjectConfig;
use crate::envspec::{EnvVarSpec, NameValuePair};
use crate::error::{RequestError, Result};
use crate::validation::{self, SOURCE_TYPE_S3, sanitize};

/// Kind of an environment variable attached to a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentVariableType {
    #[default]
    Plaintext,
}

/// Environment variable entry of a start-build request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: EnvironmentVariableType,
}

impl From<NameValuePair> for EnvironmentVariable {
    fn from(pair: NameValuePair) -> Self {
        Self {
            name: pair.name().to_string(),
            value: pair.value().to_string(),
            kind: EnvironmentVariableType::Plaintext,
        }
    }
}

/// Artifact location override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsOverride {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

/// Parameters for starting a remote build.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBuildRequest {
    #[builder(into)]
    project_name: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    source_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifacts_override: Option<ArtifactsOverride>,
    #[builder(default)]
    environment_variables_override: Vec<EnvironmentVariable>,
}

impl StartBuildRequest {
    /// Builds a request from the `[project]` configuration section.
    ///
    /// Project name, source version and artifact settings are trimmed and
    /// escaped with [`sanitize`]. The environment variable specification is
    /// parsed as written.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingProjectName`] if no project name is set,
    /// and [`RequestError::Validation`] if the environment variable
    /// specification or the artifact settings are invalid.
    pub fn from_config(project: &ProjectConfig) -> std::result::Result<Self, RequestError> {
        let project_name = sanitize(project.name.as_deref());
        if !validation::check_project_name(Some(project_name.as_str())) {
            return Err(RequestError::MissingProjectName);
        }
        let env = validation::parse_env_variables(project.env_variables.as_deref())?;

        let artifacts_override = match (&project.artifact_type, &project.artifact_location) {
            (Some(kind), Some(location)) if !location.trim().is_empty() => {
                Some(ArtifactsOverride {
                    kind: sanitize(Some(kind.as_str())),
                    location: sanitize(Some(location.as_str())),
                })
            }
            _ => None,
        };
        let source_version = Some(sanitize(project.source_version.as_deref()))
            .filter(|v| !v.is_empty());

        let request = Self::builder()
            .project_name(project_name)
            .maybe_source_version(source_version)
            .maybe_artifacts_override(artifacts_override)
            .environment_variables_override(to_environment_variables(env))
            .build();

        tracing::debug!(
            project = request.project_name(),
            env_count = request.environment_variables_override().len(),
            "constructed start-build request"
        );
        Ok(request)
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    #[must_use]
    pub fn source_version(&self) -> Option<&str> {
        self.source_version.as_deref()
    }

    #[must_use]
    pub const fn artifacts_override(&self) -> Option<&ArtifactsOverride> {
        self.artifacts_override.as_ref()
    }

    #[must_use]
    pub fn environment_variables_override(&self) -> &[EnvironmentVariable] {
        &self.environment_variables_override
    }

    /// Serializes the request as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Converts parsed pairs into request entries, preserving order.
#[must_use]
pub fn to_environment_variables(spec: EnvVarSpec) -> Vec<EnvironmentVariable> {
    spec.into_pairs()
        .into_iter()
        .map(EnvironmentVariable::from)
        .collect()
}

/// Formats the console URL of an S3 artifact.
///
/// Returns an empty string unless all parts are present and the artifact
/// type is `S3`.
#[must_use]
pub fn s3_artifact_url(
    base_url: Option<&str>,
    location: Option<&str>,
    artifact_type: Option<&str>,
) -> String {
    match (base_url, location, artifact_type) {
        (Some(base), Some(location), Some(SOURCE_TYPE_S3))
            if !base.is_empty() && !location.is_empty() =>
        {
            format!("{base}{location}")
        }
        _ => String::new(),
    }
}
