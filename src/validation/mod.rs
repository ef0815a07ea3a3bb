// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration validation helpers.
//!
//! ```text
//! aws:     check_region, check_proxy, check_credentials (keys | role)
//! project: check_project_name, check_source_url, is_source_type_s3,
//!          check_workspace
//! env:     parse_env_variables = envspec::parse
//!                              + check_env_variables
//!                              + reserved prefix check
//! input:   sanitize (html + sql escape), parse_int
//! report:  has_restricted_prefix (env command warning)
//! ```
//!
//! Every helper takes explicit values; nothing reads global state.

mod entities;
pub mod region;


use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::envspec::{self, EnvVarSpec, NameValuePair};
use crate::error::ValidationError;

pub use region::Region;

/// Source locations must use this scheme.
pub const VALID_SOURCE_URL_PREFIX: &str = "https://";

/// Environment variable names with this prefix are reserved by the build service.
pub const RESTRICTED_ENV_PREFIX: &str = "CODEBUILD_";

/// Source type that stores sources in an S3 bucket.
pub const SOURCE_TYPE_S3: &str = "S3";

static IAM_ROLE_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws(-[a-z]+)*:iam::[0-9]{12}:role/[A-Za-z0-9_+=,.@/-]{1,512}$")
        .expect("IAM role ARN pattern is valid")
});

/// How the plugin authenticates against the build service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialsType {
    /// Access key and secret key given directly.
    #[default]
    Keys,
    /// Assume an IAM role.
    Role,
}

impl std::fmt::Display for CredentialsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keys => write!(f, "keys"),
            Self::Role => write!(f, "role"),
        }
    }
}

impl std::str::FromStr for CredentialsType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keys" => Ok(Self::Keys),
            "role" => Ok(Self::Role),
            _ => Err(ValidationError::InvalidCredentialsType),
        }
    }
}

/// Escapes a user-supplied string for HTML and SQL contexts.
///
/// Leading and trailing whitespace is removed first. `None` becomes `""`.
/// Non-ASCII characters use their HTML 4.0 entity name where one exists,
/// otherwise one numeric reference per UTF-16 unit.
#[must_use]
pub fn sanitize(s: Option<&str>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let mut out = String::with_capacity(s.len());
    for c in s.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("''"),
            c if c.is_ascii() => out.push(c),
            c => match entities::named(c) {
                Some(name) => {
                    let _ = write!(out, "&{name};");
                }
                None => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        let _ = write!(out, "&#{unit};");
                    }
                }
            },
        }
    }
    out
}

/// Parses an optional decimal integer. Missing or empty input is `None`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInteger`] if the input is not a valid `i32`.
pub fn parse_int(s: Option<&str>) -> Result<Option<i32>, ValidationError> {
    match s {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidInteger(s.to_string())),
    }
}

#[must_use]
pub fn check_project_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| !n.is_empty())
}

/// Checks that every pair has a non-empty name and value.
#[must_use]
pub fn check_env_variables(spec: &EnvVarSpec) -> bool {
    spec.iter()
        .all(|pair| !pair.name().is_empty() && !pair.value().is_empty())
}

/// Returns true if any name starts with [`RESTRICTED_ENV_PREFIX`].
#[must_use]
pub fn has_restricted_prefix(spec: &EnvVarSpec) -> bool {
    first_restricted(spec).is_some()
}

fn first_restricted(spec: &EnvVarSpec) -> Option<&NameValuePair> {
    spec.iter()
        .find(|pair| pair.name().starts_with(RESTRICTED_ENV_PREFIX))
}

#[must_use]
pub fn is_source_type_s3(source_type: Option<&str>) -> bool {
    source_type == Some(SOURCE_TYPE_S3)
}

/// Parses an environment variable specification and applies the
/// request-level rules on top of the grammar.
///
/// # Errors
///
/// Returns [`ValidationError::EnvVariables`] for a malformed spec,
/// [`ValidationError::EmptyEnvVariable`] for an empty name or value, and
/// [`ValidationError::RestrictedPrefix`] for a reserved name.
pub fn parse_env_variables(raw: Option<&str>) -> Result<EnvVarSpec, ValidationError> {
    let spec = envspec::parse(raw)?;
    if !check_env_variables(&spec) {
        return Err(ValidationError::EmptyEnvVariable);
    }
    if let Some(pair) = first_restricted(&spec) {
        return Err(ValidationError::RestrictedPrefix {
            name: pair.name().to_string(),
            prefix: RESTRICTED_ENV_PREFIX,
        });
    }
    tracing::debug!(count = spec.len(), "parsed environment variables");
    Ok(spec)
}

/// Resolves a region name.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRegion`] if the region is missing or unknown.
pub fn check_region(region: Option<&str>) -> Result<Region, ValidationError> {
    region
        .ok_or(ValidationError::InvalidRegion)?
        .parse()
}

/// Checks proxy settings. The port is only inspected when a host is set.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidProxy`] if the port is not an integer or
/// is negative.
pub fn check_proxy(host: Option<&str>, port: Option<&str>) -> Result<(), ValidationError> {
    if host.is_none_or(str::is_empty) {
        return Ok(());
    }
    match parse_int(port) {
        Ok(Some(p)) if p < 0 => Err(ValidationError::InvalidProxy),
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::InvalidProxy),
    }
}

/// Checks the shape of an IAM role ARN.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIamRole`] if the ARN is missing or malformed.
pub fn check_iam_role(arn: Option<&str>) -> Result<(), ValidationError> {
    match arn {
        Some(arn) if IAM_ROLE_ARN.is_match(arn.trim()) => Ok(()),
        _ => Err(ValidationError::InvalidIamRole),
    }
}

/// # Errors
///
/// Returns [`ValidationError::InvalidKeys`] if either key is missing or blank.
pub fn check_keys(access_key: Option<&str>, secret_key: Option<&str>) -> Result<(), ValidationError> {
    let present = |k: Option<&str>| k.is_some_and(|k| !k.trim().is_empty());
    if present(access_key) && present(secret_key) {
        Ok(())
    } else {
        Err(ValidationError::InvalidKeys)
    }
}

/// Checks credentials according to the configured credentials type.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCredentialsType`] for an unknown type,
/// otherwise whatever [`check_keys`] or [`check_iam_role`] returns.
pub fn check_credentials(
    credentials_type: &str,
    access_key: Option<&str>,
    secret_key: Option<&str>,
    iam_role_arn: Option<&str>,
) -> Result<CredentialsType, ValidationError> {
    let kind: CredentialsType = credentials_type.parse()?;
    match kind {
        CredentialsType::Keys => check_keys(access_key, secret_key)?,
        CredentialsType::Role => check_iam_role(iam_role_arn)?,
    }
    Ok(kind)
}

/// Checks that the source location uses [`VALID_SOURCE_URL_PREFIX`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSourceUrl`] otherwise.
pub fn check_source_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with(VALID_SOURCE_URL_PREFIX) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSourceUrl {
            url: url.to_string(),
            prefix: VALID_SOURCE_URL_PREFIX,
        })
    }
}

/// Checks that a workspace directory was given and exists.
///
/// # Errors
///
/// Returns [`ValidationError::NullWorkspace`] if no path was given and
/// [`ValidationError::WorkspaceNotFound`] if it does not exist.
pub fn check_workspace(workspace: Option<&Path>) -> Result<(), ValidationError> {
    let workspace = workspace.ok_or(ValidationError::NullWorkspace)?;
    if workspace.is_dir() {
        Ok(())
    } else {
        Err(ValidationError::WorkspaceNotFound(
            workspace.display().to_string(),
        ))
    }
}
