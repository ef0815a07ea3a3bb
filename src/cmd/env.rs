// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation for codebuild-rs.

use anyhow::Context;

use crate::cli::env::EnvArgs;
use crate::config::Config;
use crate::envspec::EnvVarSpec;
use crate::error::{PluginError, Result};
use crate::validation;

/// Main handler for env command.
///
/// # Errors
///
/// Returns an error if the specification is malformed.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let raw = args
        .spec
        .as_deref()
        .or(config.project.env_variables.as_deref());

    let spec = EnvVarSpec::parse(raw).map_err(PluginError::from)?;
    if spec.is_empty() {
        tracing::info!("no environment variables configured");
    } else if validation::has_restricted_prefix(&spec) {
        tracing::warn!(
            prefix = validation::RESTRICTED_ENV_PREFIX,
            "names with a reserved prefix will be rejected by `codebuild request`"
        );
    }

    for line in render_env(&spec, args.json)? {
        println!("{line}");
    }
    Ok(())
}

/// Renders pairs as `name=value` lines or a single JSON document.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(spec: &EnvVarSpec, json: bool) -> Result<Vec<String>> {
    if json {
        let doc = serde_json::to_string_pretty(spec)
            .context("failed to serialize environment variables")?;
        return Ok(vec![doc]);
    }
    Ok(spec
        .iter()
        .map(|pair| format!("{}={}", pair.name(), pair.value()))
        .collect())
}
